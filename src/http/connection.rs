use std::time::Duration;

use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tracing::debug;

use crate::config::ServerConfig;
use crate::http::files;
use crate::http::parser::{self, MAX_REQUEST_BYTES};
use crate::http::request::Method;
use crate::http::response::StatusCode;
use crate::http::writer;

/// One accepted connection, owned for the duration of a single request.
pub struct Connection {
    stream: TcpStream,
    cfg: ServerConfig,
}

impl Connection {
    pub fn new(stream: TcpStream, cfg: ServerConfig) -> Self {
        Self { stream, cfg }
    }

    /// Handles exactly one request and returns; the caller closes the socket.
    ///
    /// Every protocol-level failure is converted into an HTTP error response
    /// on the connection. The only `Err` returns are transport failures
    /// where no response could be delivered at all.
    pub async fn handle(&mut self) -> anyhow::Result<()> {
        // Single bounded read; no chunked header reading is performed, so
        // anything the client sends past the bound is never examined.
        let mut buf = [0u8; MAX_REQUEST_BYTES];
        let timeout = Duration::from_secs(self.cfg.read_timeout_secs);
        let n = match tokio::time::timeout(timeout, self.stream.read(&mut buf)).await {
            Ok(Ok(n)) if n > 0 => n,
            Ok(Ok(_)) => {
                debug!("empty request");
                return writer::send_error(&mut self.stream, StatusCode::BadRequest, "Bad Request")
                    .await;
            }
            Ok(Err(e)) => {
                debug!("request read failed: {}", e);
                return writer::send_error(&mut self.stream, StatusCode::BadRequest, "Bad Request")
                    .await;
            }
            Err(_) => {
                debug!("request read timed out");
                return writer::send_error(&mut self.stream, StatusCode::BadRequest, "Bad Request")
                    .await;
            }
        };

        let request = match parser::parse_request_line(&buf[..n]) {
            Ok(request) => request,
            Err(e) => {
                debug!("request parse failed: {:?}", e);
                return writer::send_error(&mut self.stream, StatusCode::BadRequest, "Bad Request")
                    .await;
            }
        };

        debug!("{} {} {}", request.method, request.path, request.version);

        // Literal traversal check on the raw path, before any resolution.
        // This intentionally blocks the substring ".." anywhere in the path
        // and nothing else; no canonicalization is attempted.
        if request.path.contains("..") {
            return writer::send_error(
                &mut self.stream,
                StatusCode::PermissionDenied,
                "Permission Denied",
            )
            .await;
        }

        match Method::from_str(&request.method) {
            Some(method) => {
                let rel_path = request.path.strip_prefix('/').unwrap_or(&request.path);
                let include_body = method == Method::GET;
                files::serve(&mut self.stream, &self.cfg.root, rel_path, include_body).await
            }
            None => {
                writer::send_error(
                    &mut self.stream,
                    StatusCode::NotImplemented,
                    "Not Implemented",
                )
                .await
            }
        }
    }
}
