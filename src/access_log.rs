//! The shared append-only outcome log.
//!
//! Every response produces one line in `server.log`, echoed to stdout. All
//! writes funnel through a single writer task fed by a channel, so records
//! from concurrent handlers never interleave within a line. Line order
//! across connections follows channel arrival, not request completion.

use std::path::PathBuf;

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tracing::warn;

/// Cheaply cloneable handle to the log writer task.
#[derive(Clone)]
pub struct AccessLog {
    tx: mpsc::UnboundedSender<String>,
}

impl AccessLog {
    /// Spawns the writer task appending to `path`.
    ///
    /// Must be called from within a tokio runtime. If the sink cannot be
    /// opened the writer degrades to the stdout echo alone; logging is
    /// best-effort and never fails the caller.
    pub fn open(path: PathBuf) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(writer_task(path, rx));
        Self { tx }
    }

    /// Queues one line for the log and the stdout echo.
    pub fn record(&self, line: impl Into<String>) {
        // The writer task lives until every handle is dropped; a send can
        // only fail during shutdown, where losing the line is fine.
        let _ = self.tx.send(line.into());
    }
}

async fn writer_task(path: PathBuf, mut rx: mpsc::UnboundedReceiver<String>) {
    let mut sink = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .await
    {
        Ok(file) => Some(file),
        Err(e) => {
            warn!("failed to open log file {}: {}", path.display(), e);
            None
        }
    };

    while let Some(line) = rx.recv().await {
        println!("{line}");

        if let Some(file) = sink.as_mut() {
            if let Err(e) = file.write_all(format!("{line}\n").as_bytes()).await {
                warn!("failed to append to log file {}: {}", path.display(), e);
            }
        }
    }
}
