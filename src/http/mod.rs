//! Minimal HTTP/1.1 subset.
//!
//! Just enough protocol for one request/response exchange per connection:
//!
//! - **`parser`**: extracts method and path from the request line
//! - **`request`**: method enum and the parsed request line
//! - **`response`**: status codes and the fixed-header response value
//! - **`writer`**: serializes responses and streams file payloads
//! - **`connection`**: drives read, parse, file lookup and write for one
//!   accepted connection
//!
//! Every connection is handled the same way: a single read, one response,
//! then `Connection: close`. There is no keep-alive, no chunked encoding
//! and no inspection of request headers.

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
