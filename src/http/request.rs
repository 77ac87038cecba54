/// HTTP methods this server implements.
///
/// Anything that does not parse as one of these is answered with
/// 501 Not implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    Get,
    /// HEAD - Like GET but without the response body
    Head,
}

impl Method {
    /// Parses an HTTP method from a string, case-insensitively.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyweb::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::Get));
    /// assert_eq!(Method::from_str("head"), Some(Method::Head));
    /// assert_eq!(Method::from_str("POST"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("GET") {
            Some(Method::Get)
        } else if s.eq_ignore_ascii_case("HEAD") {
            Some(Method::Head)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
        }
    }
}

/// A parsed HTTP request line.
///
/// The method is kept as the raw token the client sent: an unsupported
/// method must be echoed verbatim as the cause of the 501 response, and a
/// CGI program receives the original string in `REQUEST_METHOD`.
#[derive(Debug, Clone)]
pub struct Request {
    /// Raw method token (e.g. "GET", "head", "POST")
    pub method: String,
    /// The request target as sent (e.g. "/index.html", "/cgi-bin/adder?x=1")
    pub target: String,
    /// HTTP version token (typically "HTTP/1.0")
    pub version: String,
}

impl Request {
    /// The validated method, if this server implements it.
    pub fn method(&self) -> Option<Method> {
        Method::from_str(&self.method)
    }
}
