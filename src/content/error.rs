//! HTTP error responses.

use tokio::net::TcpStream;

use crate::http::response::{ResponseBuilder, StatusCode};
use crate::http::writer::ResponseWriter;

/// Sends a complete HTML error response: status line, Content-type,
/// Content-length, blank line, body.
pub async fn client_error(
    stream: &mut TcpStream,
    cause: &str,
    status: StatusCode,
    long_msg: &str,
) -> anyhow::Result<()> {
    let body = build_body(status, long_msg, cause);

    let response = ResponseBuilder::new(status)
        .header("Content-type", "text/html")
        .header("Content-length", body.len().to_string())
        .body(body.into_bytes())
        .build();

    ResponseWriter::new(&response).write_to_stream(stream).await
}

/// Builds the error body field by field. The cause and message are escaped,
/// since the cause usually echoes a client-supplied token (the method or
/// the resolved filename).
fn build_body(status: StatusCode, long_msg: &str, cause: &str) -> String {
    let mut body = String::from("<html><title>Tiny Error</title>");
    body.push_str("<body bgcolor=\"ffffff\">\r\n");
    body.push_str(&format!(
        "{}: {}\r\n",
        status.as_u16(),
        status.reason_phrase()
    ));
    body.push_str(&format!(
        "<p>{}: {}\r\n",
        escape_html(long_msg),
        escape_html(cause)
    ));
    body.push_str("<hr><em>The Tiny Web server</em>\r\n");
    body
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
