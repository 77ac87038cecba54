use crate::http::request::Request;

#[derive(Debug)]
pub enum ParseError {
    InvalidRequest,
    Incomplete,
}

/// Parses one request head (request line plus headers) from the buffer.
///
/// Returns the request and the number of bytes consumed. Header lines are
/// read and discarded: this server interprets none of them. Extra tokens on
/// the request line are ignored; fewer than three is a malformed request.
pub fn parse_request_head(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    // The head is complete once the blank line arrives
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let head = std::str::from_utf8(&buf[..headers_end]).map_err(|_| ParseError::InvalidRequest)?;

    let mut lines = head.split("\r\n");

    // Request line
    let request_line = lines.next().ok_or(ParseError::InvalidRequest)?;
    let mut parts = request_line.split_whitespace();

    let method = parts.next().ok_or(ParseError::InvalidRequest)?;
    let target = parts.next().ok_or(ParseError::InvalidRequest)?;
    let version = parts.next().ok_or(ParseError::InvalidRequest)?;

    let request = Request {
        method: method.to_string(),
        target: target.to_string(),
        version: version.to_string(),
    };

    let total_consumed = headers_end + 4;
    Ok((request, total_consumed))
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
