/// Value of the `Server` response header.
pub const SERVER_NAME: &str = "Tiny Web Server";

/// HTTP status codes this server emits.
///
/// - `Ok` (200): request served
/// - `Forbidden` (403): permission bits deny the requested operation
/// - `NotFound` (404): resolved path does not exist
/// - `NotImplemented` (501): method other than GET/HEAD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not found
    NotFound,
    /// 501 Not implemented
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyweb::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::NotImplemented => 501,
        }
    }

    /// Returns the reason phrase sent on the status line.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not found",
            StatusCode::NotImplemented => "Not implemented",
        }
    }
}

/// A complete HTTP response ready to be sent to a client.
///
/// Headers are an ordered list, not a map: the wire format fixes the order
/// they appear in (e.g. Server, Connection, Content-length, Content-type
/// for static content).
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    /// Headers in the order they go on the wire
    pub headers: Vec<(String, String)>,
    /// Response body as bytes (empty for HEAD)
    pub body: Vec<u8>,
}

impl Response {
    /// Looks up a header value by exact name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Builder for constructing responses in a fluent style.
///
/// Headers are emitted in the order they are added. Content-length is never
/// inserted automatically: every response in this protocol sets it
/// explicitly, and for static content it carries the stat-reported file
/// size rather than the body length (a HEAD response has the real size and
/// an empty body).
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Appends a header. Order of calls is order on the wire.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    pub fn build(self) -> Response {
        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}
