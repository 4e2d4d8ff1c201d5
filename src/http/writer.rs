use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::response::{ResponseHead, StatusCode, error_body};

const HTTP_VERSION: &str = "HTTP/1.0";

/// Content type declared on every response, error pages and files alike.
pub const CONTENT_TYPE: &str = "text/html";

/// Serializes a response head to its wire form.
///
/// Status line, Content-Type, Content-Length, blank line, CRLF throughout.
/// This framing is the binary contract clients depend on.
pub fn serialize_head(head: &ResponseHead) -> Vec<u8> {
    let mut buf = Vec::new();

    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        head.status.as_u16(),
        head.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    buf.extend_from_slice(b"Content-Type: ");
    buf.extend_from_slice(head.content_type.as_bytes());
    buf.extend_from_slice(b"\r\n");

    buf.extend_from_slice(b"Content-Length: ");
    buf.extend_from_slice(head.content_length.to_string().as_bytes());
    buf.extend_from_slice(b"\r\n");

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    buf
}

/// Writes a response head and, if present and non-empty, its body.
///
/// Headers always reach the wire before any body byte. File responses pass
/// `None` here and stream the body themselves after the head is out.
pub async fn respond(
    stream: &mut TcpStream,
    head: &ResponseHead,
    body: Option<&[u8]>,
) -> anyhow::Result<()> {
    stream.write_all(&serialize_head(head)).await?;

    if let Some(body) = body {
        if head.content_length > 0 {
            stream.write_all(body).await?;
        }
    }

    Ok(())
}

/// Writes a complete HTML error response.
pub async fn send_error(
    stream: &mut TcpStream,
    status: StatusCode,
    message: &str,
) -> anyhow::Result<()> {
    let body = error_body(status, message);
    let head = ResponseHead::new(status, CONTENT_TYPE, body.len() as u64);
    respond(stream, &head, Some(body.as_bytes())).await
}
