use crate::http::request::Request;

/// Upper bound on the single request read; nothing past it is ever examined.
pub const MAX_REQUEST_BYTES: usize = 1024;

/// Token length bounds. A request line whose tokens exceed these is rejected
/// outright rather than truncated.
const MAX_METHOD_LEN: usize = 8;
const MAX_TOKEN_LEN: usize = 99;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Not a three-token request line, or not text at all.
    Malformed,
    /// A token exceeds its length bound.
    TokenTooLong,
}

/// Parses the request line out of a raw request buffer.
///
/// Only the first line is consulted (terminated at the first CR or LF, or at
/// the end of the buffer); it must contain exactly three whitespace-separated
/// tokens: method, path, version. Anything after the first line — headers,
/// body — is ignored.
pub fn parse_request_line(buf: &[u8]) -> Result<Request, ParseError> {
    // Isolate the first line before any text validation: bytes past it
    // (headers, body) may be arbitrary binary and must not affect parsing.
    let line_end = buf
        .iter()
        .position(|&b| b == b'\r' || b == b'\n')
        .unwrap_or(buf.len());
    let line = std::str::from_utf8(&buf[..line_end]).map_err(|_| ParseError::Malformed)?;

    let mut tokens = line.split_whitespace();

    let method = tokens.next().ok_or(ParseError::Malformed)?;
    let path = tokens.next().ok_or(ParseError::Malformed)?;
    let version = tokens.next().ok_or(ParseError::Malformed)?;

    if tokens.next().is_some() {
        return Err(ParseError::Malformed);
    }

    if method.len() > MAX_METHOD_LEN || path.len() > MAX_TOKEN_LEN || version.len() > MAX_TOKEN_LEN
    {
        return Err(ParseError::TokenTooLong);
    }

    Ok(Request {
        method: method.to_string(),
        path: path.to_string(),
        version: version.to_string(),
    })
}
