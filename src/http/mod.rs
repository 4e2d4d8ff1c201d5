//! HTTP protocol implementation.
//!
//! This module implements a one-request-per-connection HTTP/1.0 server that
//! serves files out of a configured document root.
//!
//! # Architecture
//!
//! - **`connection`**: the request handler; owns the accepted socket for the
//!   duration of one request and converts every protocol failure into an
//!   HTTP error response
//! - **`parser`**: bounded request-line tokenization
//! - **`request`**: parsed request representation and the dispatch method set
//! - **`response`**: status codes, response head, and the error page body
//! - **`files`**: path resolution against the document root and chunked file
//!   streaming
//! - **`writer`**: serializes and writes response frames to the client
//!
//! # Request flow
//!
//! ```text
//! connection::handle
//!     ├─ read request line (bounded, timed out)
//!     ├─ parse + sanitize path
//!     ├─ GET/HEAD ──→ files::serve ──→ writer::respond (+ streamed body)
//!     └─ otherwise ─→ writer::send_error
//! ```
//!
//! The connection is never kept alive: the accept loop closes the socket as
//! soon as `handle` returns.

pub mod connection;
pub mod files;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
