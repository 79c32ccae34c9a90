use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::access_log::AccessLog;
use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Size of one read when streaming a file payload.
const CHUNK_SIZE: usize = 4096;

/// Serializes the fixed header block plus the inline body.
pub fn serialize_response(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Fixed headers
    buf.extend_from_slice(format!("Content-Type: {}\r\n", resp.content_type).as_bytes());
    buf.extend_from_slice(format!("Content-Length: {}\r\n", resp.content_length).as_bytes());
    buf.extend_from_slice(b"Connection: close\r\n");

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    // Body
    buf.extend_from_slice(&resp.body);

    buf
}

/// Transmits responses over a connection and records every outcome in the
/// shared log.
pub struct ResponseWriter {
    log: AccessLog,
}

impl ResponseWriter {
    pub fn new(log: AccessLog) -> Self {
        Self { log }
    }

    /// Sends the header block and inline body.
    ///
    /// The log record is appended before transmission, so a failed write
    /// still leaves its one line in the log.
    pub async fn send(
        &self,
        stream: &mut TcpStream,
        resp: &Response,
    ) -> anyhow::Result<()> {
        self.record(resp);

        stream.write_all(&serialize_response(resp)).await?;
        stream.flush().await?;

        Ok(())
    }

    /// Sends the header block, then streams `file` in fixed-size chunks
    /// until end of file.
    pub async fn send_file(
        &self,
        stream: &mut TcpStream,
        resp: &Response,
        file: &mut File,
    ) -> anyhow::Result<()> {
        self.record(resp);

        stream.write_all(&serialize_response(resp)).await?;

        let mut chunk = [0u8; CHUNK_SIZE];
        loop {
            let n = file.read(&mut chunk).await?;
            if n == 0 {
                break;
            }
            stream.write_all(&chunk[..n]).await?;
        }

        stream.flush().await?;

        Ok(())
    }

    fn record(&self, resp: &Response) {
        self.log
            .record(format!("Response sent: {}", resp.status.status_text()));
    }
}
