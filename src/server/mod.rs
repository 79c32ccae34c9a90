//! Listening socket setup and the fixed worker pool.

pub mod listener;

pub use listener::Server;
