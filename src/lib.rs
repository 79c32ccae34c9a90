//! staticd - Minimal Static File Server
//!
//! Serves one file per connection over a minimal HTTP/1.1 subset: a fixed
//! pool of acceptor tasks shares the listening socket and every accepted
//! connection gets its own handler task.

pub mod access_log;
pub mod config;
pub mod files;
pub mod http;
pub mod server;
