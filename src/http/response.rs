/// HTTP status codes the server emits.
///
/// The reason phrases are part of the wire contract and are deliberately the
/// server's own ("Permission Denied", "Internal Error") rather than the
/// RFC-standard phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 403 Permission Denied
    PermissionDenied,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Error
    InternalError,
    /// 501 Not Implemented
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use shelf::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::PermissionDenied => 403,
            StatusCode::NotFound => 404,
            StatusCode::InternalError => 500,
            StatusCode::NotImplemented => 501,
        }
    }

    /// Returns the reason phrase emitted on the status line.
    ///
    /// # Example
    ///
    /// ```
    /// # use shelf::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::PermissionDenied.reason_phrase(), "Permission Denied");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::PermissionDenied => "Permission Denied",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalError => "Internal Error",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }
}

/// The header block of a response.
///
/// `content_length` always states the true number of body bytes that will
/// follow the blank line, whether the body is held in memory (error pages)
/// or streamed from disk (file responses, length taken from file metadata
/// before streaming starts).
#[derive(Debug)]
pub struct ResponseHead {
    pub status: StatusCode,
    pub content_type: String,
    pub content_length: u64,
}

impl ResponseHead {
    pub fn new(status: StatusCode, content_type: impl Into<String>, content_length: u64) -> Self {
        Self {
            status,
            content_type: content_type.into(),
            content_length,
        }
    }
}

/// Builds the canonical HTML error page.
///
/// `message` is a caller-controlled literal at every call site, never user
/// input; no escaping is performed.
pub fn error_body(status: StatusCode, message: &str) -> String {
    format!(
        "<html><body><h1>{} {}</h1><p>{}</p></body></html>",
        status.as_u16(),
        status.reason_phrase(),
        message
    )
}
