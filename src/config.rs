use std::path::PathBuf;

/// Address the server binds when `LISTEN` is not set: IPv4 wildcard, port 8080.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Number of long-lived acceptor tasks sharing the listening socket.
pub const DEFAULT_WORKER_COUNT: usize = 4;

/// Pending-connection backlog passed to listen().
pub const DEFAULT_BACKLOG: u32 = 16;

/// Largest file the server will serve, in bytes (128 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 128 * 1024 * 1024;

/// Document served when the request path is `/`.
pub const DEFAULT_INDEX_FILE: &str = "index.html";

/// Append-only log of response outcomes, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "server.log";

#[derive(Clone)]
pub struct Config {
    pub listen_addr: String,
    pub worker_count: usize,
    pub backlog: u32,
    /// Document root; every served file must resolve under it.
    pub root_dir: PathBuf,
    pub index_file: String,
    pub max_file_size: u64,
    pub log_file: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        let listen_addr =
            std::env::var("LISTEN")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        Self {
            listen_addr,
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            worker_count: DEFAULT_WORKER_COUNT,
            backlog: DEFAULT_BACKLOG,
            root_dir: PathBuf::from("."),
            index_file: DEFAULT_INDEX_FILE.to_string(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}
