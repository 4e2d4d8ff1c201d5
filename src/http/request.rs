/// HTTP methods the server implements.
///
/// Only GET and HEAD are served; every other method token parses fine but is
/// answered with 501 Not Implemented by the request handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a file
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// Matching is case-sensitive, as on the wire.
    ///
    /// # Example
    ///
    /// ```
    /// # use shelf::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// assert_eq!(Method::from_str("POST"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "HEAD" => Some(Method::HEAD),
            _ => None,
        }
    }
}

/// A parsed request line.
///
/// Derived from exactly the first line of the input; headers and body sent by
/// the client are never read. The method is kept as the raw token so the
/// handler can distinguish an unsupported method (501) from a malformed
/// request (400). All three fields are non-empty.
#[derive(Debug, Clone)]
pub struct Request {
    /// The raw method token (e.g. "GET")
    pub method: String,
    /// The request path (e.g. "/index.html")
    pub path: String,
    /// HTTP version token (e.g. "HTTP/1.0")
    pub version: String,
}
