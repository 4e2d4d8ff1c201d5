//! Shelf - Minimal HTTP/1.0 Static File Server
//!
//! Core library for request handling and file serving.

pub mod config;
pub mod http;
pub mod server;
