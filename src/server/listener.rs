use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket};
use tracing::{debug, error, info, warn};

use crate::access_log::AccessLog;
use crate::config::Config;
use crate::files::FileStore;
use crate::http::connection::Connection;

/// The bound listening socket plus everything the worker pool shares.
///
/// Exactly one listening socket exists for the server's lifetime. A fixed
/// number of acceptor tasks share it; each accepted connection is handed to
/// its own short-lived handler task, which is the only owner of that stream.
pub struct Server {
    listener: Arc<TcpListener>,
    worker_count: usize,
    store: FileStore,
    log: AccessLog,
}

impl Server {
    /// Binds the listening socket with the configured backlog.
    ///
    /// Failures here are unrecoverable startup errors; callers are expected
    /// to exit on them rather than retry.
    pub fn bind(cfg: &Config) -> anyhow::Result<Self> {
        let addr: SocketAddr = cfg
            .listen_addr
            .parse()
            .with_context(|| format!("invalid listen address {}", cfg.listen_addr))?;

        let socket = TcpSocket::new_v4().context("failed to create socket")?;
        socket.set_reuseaddr(true)?;
        socket
            .bind(addr)
            .with_context(|| format!("failed to bind {addr}"))?;
        let listener = socket
            .listen(cfg.backlog)
            .context("failed to listen")?;

        info!("Listening on {}", listener.local_addr()?);

        Ok(Self {
            listener: Arc::new(listener),
            worker_count: cfg.worker_count,
            store: FileStore::new(
                cfg.root_dir.clone(),
                cfg.index_file.clone(),
                cfg.max_file_size,
            ),
            log: AccessLog::open(cfg.log_file.clone()),
        })
    }

    /// The address the listener actually bound, for callers that bound
    /// port 0.
    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Spawns the worker pool and waits on it.
    ///
    /// Workers accept forever, so this only returns if a worker task fails.
    pub async fn serve(self) -> anyhow::Result<()> {
        let mut workers = Vec::with_capacity(self.worker_count);

        for id in 0..self.worker_count {
            let listener = Arc::clone(&self.listener);
            let store = self.store.clone();
            let log = self.log.clone();
            workers.push(tokio::spawn(accept_loop(id, listener, store, log)));
        }

        for worker in workers {
            worker.await.context("worker task failed")?;
        }

        Ok(())
    }
}

/// One worker: accept connections on the shared listener and hand each off
/// to its own handler task.
///
/// Accept failures are logged and the loop retries; nothing here is fatal.
async fn accept_loop(id: usize, listener: Arc<TcpListener>, store: FileStore, log: AccessLog) {
    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!("worker {id}: accept failed: {e}");
                continue;
            }
        };

        debug!("worker {id}: accepted connection from {peer}");

        let conn = Connection::new(stream, store.clone(), log.clone());
        tokio::spawn(async move {
            // Per-request errors are answered over HTTP inside run(); only
            // transport failures end up here.
            if let Err(e) = conn.run().await {
                error!("Connection error from {peer}: {e}");
            }
        });
    }
}
