use crate::http::request::{Method, RequestLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// No tokens at all on the request line.
    Empty,
    /// A method token but no path token.
    MissingPath,
    /// Request line is not valid UTF-8.
    InvalidEncoding,
    /// Method token is not a recognized HTTP verb.
    UnknownMethod,
}

/// Parses the request line from the bytes read off a connection.
///
/// The method and path are the first two whitespace-delimited tokens of the
/// first line; anything after the path (the HTTP version, headers, a body)
/// is never inspected.
pub fn parse_request_line(buf: &[u8]) -> Result<RequestLine, ParseError> {
    let line_end = buf
        .iter()
        .position(|&b| b == b'\n')
        .unwrap_or(buf.len());

    let line = std::str::from_utf8(&buf[..line_end])
        .map_err(|_| ParseError::InvalidEncoding)?;

    let mut parts = line.split_whitespace();

    let method_str = parts.next().ok_or(ParseError::Empty)?;
    let path = parts.next().ok_or(ParseError::MissingPath)?;

    let method = Method::from_str(method_str).ok_or(ParseError::UnknownMethod)?;

    Ok(RequestLine {
        method,
        path: path.to_string(),
    })
}
