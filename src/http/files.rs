use std::io::ErrorKind;
use std::path::Path;

use bytes::BytesMut;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

use crate::http::response::{ResponseHead, StatusCode};
use crate::http::writer;

/// Size of one streamed body chunk.
const CHUNK_SIZE: usize = 1024;

/// Serves the file at `rel_path`, resolved against the document root.
///
/// Status mapping:
/// - 404 if metadata cannot be retrieved or the path is a directory
/// - 403 if the file cannot be opened for lack of permission
/// - 500 if the open fails for any other reason
/// - 200 otherwise, with `Content-Length` taken from metadata, then the file
///   bytes streamed in fixed-size chunks. HEAD sets `include_body` to false:
///   same checks and head, so the same status as the corresponding GET, but
///   no body bytes.
pub async fn serve(
    stream: &mut TcpStream,
    root: &Path,
    rel_path: &str,
    include_body: bool,
) -> anyhow::Result<()> {
    let path = root.join(rel_path);

    let meta = match tokio::fs::metadata(&path).await {
        Ok(meta) => meta,
        Err(e) => {
            debug!("stat failed for {}: {}", path.display(), e);
            return writer::send_error(stream, StatusCode::NotFound, "Not Found").await;
        }
    };

    // Directories are not served and there is no index lookup.
    if meta.is_dir() {
        return writer::send_error(stream, StatusCode::NotFound, "Not Found").await;
    }

    let mut file = match File::open(&path).await {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            return writer::send_error(stream, StatusCode::PermissionDenied, "Permission Denied")
                .await;
        }
        Err(e) => {
            debug!("open failed for {}: {}", path.display(), e);
            return writer::send_error(stream, StatusCode::InternalError, "Internal Error").await;
        }
    };

    // Length is captured from metadata before streaming starts, never
    // recomputed afterwards.
    let head = ResponseHead::new(StatusCode::Ok, writer::CONTENT_TYPE, meta.len());
    writer::respond(stream, &head, None).await?;

    if !include_body {
        return Ok(());
    }

    let mut chunk = BytesMut::with_capacity(CHUNK_SIZE);
    loop {
        chunk.clear();
        let n = file.read_buf(&mut chunk).await?;
        if n == 0 {
            break;
        }
        stream.write_all(&chunk).await?;
    }

    Ok(())
}
