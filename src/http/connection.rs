use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::access_log::AccessLog;
use crate::files::{FileStore, ServeError};
use crate::http::parser::{ParseError, parse_request_line};
use crate::http::request::Method;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Maximum bytes taken from the connection in the single request read.
const READ_BUFFER_SIZE: usize = 4096;

/// Owns one accepted connection for one request/response cycle.
///
/// Request-level problems (bad request line, wrong method, missing or
/// oversized file) are answered with a status code and are never errors
/// from `run`; only transport failures propagate to the spawning task.
pub struct Connection {
    stream: TcpStream,
    store: FileStore,
    writer: ResponseWriter,
}

impl Connection {
    pub fn new(stream: TcpStream, store: FileStore, log: AccessLog) -> Self {
        Self {
            stream,
            store,
            writer: ResponseWriter::new(log),
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        let mut buffer = BytesMut::with_capacity(READ_BUFFER_SIZE);

        // One read only. A request line split across reads is not
        // reassembled and parses as malformed; a known limitation.
        let n = self.stream.read_buf(&mut buffer).await?;
        if n == 0 {
            // Client closed without sending anything.
            return Ok(());
        }

        let request = match parse_request_line(&buffer) {
            Ok(request) => request,
            Err(ParseError::UnknownMethod) => {
                return self
                    .writer
                    .send(&mut self.stream, &Response::method_not_allowed())
                    .await;
            }
            Err(_) => {
                return self
                    .writer
                    .send(&mut self.stream, &Response::bad_request())
                    .await;
            }
        };

        if !request.method.is_supported() {
            return self
                .writer
                .send(&mut self.stream, &Response::method_not_allowed())
                .await;
        }

        let mut served = match self.store.open(&request.path).await {
            Ok(served) => served,
            Err(e) => {
                let resp = match e {
                    ServeError::NotFound => Response::not_found(),
                    ServeError::TooLarge => Response::too_large(),
                    ServeError::Traversal | ServeError::Stat => Response::forbidden(),
                };
                return self.writer.send(&mut self.stream, &resp).await;
            }
        };

        let resp = Response::ok_file(served.len);

        match request.method {
            Method::GET => {
                self.writer
                    .send_file(&mut self.stream, &resp, &mut served.file)
                    .await
            }
            // HEAD: header block only, no payload.
            _ => self.writer.send(&mut self.stream, &resp).await,
        }
    }
}
