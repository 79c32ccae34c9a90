//! Path resolution and file access for the document root.

use std::path::{Component, Path, PathBuf};

use tokio::fs::File;

/// Why a request could not be served from the file store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServeError {
    /// The path escapes the document root.
    Traversal,
    /// The file does not exist or cannot be opened.
    NotFound,
    /// The file exists but its metadata could not be read.
    Stat,
    /// The file exceeds the configured size ceiling.
    TooLarge,
}

/// An open file ready to be streamed, with its size already checked.
pub struct ServedFile {
    pub file: File,
    pub len: u64,
}

/// Maps request paths to files under a document root and enforces the
/// maximum servable size.
#[derive(Clone)]
pub struct FileStore {
    root: PathBuf,
    index_file: String,
    max_file_size: u64,
}

impl FileStore {
    pub fn new(root: PathBuf, index_file: String, max_file_size: u64) -> Self {
        Self {
            root,
            index_file,
            max_file_size,
        }
    }

    /// Resolves a request path to a filesystem path under the root.
    ///
    /// One leading slash is stripped and an empty remainder becomes the
    /// index file. Absolute, root or parent-directory components are
    /// rejected so the resolved path cannot escape the document root.
    pub fn resolve(&self, request_path: &str) -> Result<PathBuf, ServeError> {
        let relative = request_path.strip_prefix('/').unwrap_or(request_path);
        let relative = if relative.is_empty() {
            self.index_file.as_str()
        } else {
            relative
        };

        let candidate = Path::new(relative);
        for component in candidate.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                _ => return Err(ServeError::Traversal),
            }
        }

        Ok(self.root.join(candidate))
    }

    /// Resolves and opens a file read-only, checking its size.
    ///
    /// The returned handle lives only for the current request; dropping it
    /// closes the file on every exit path.
    pub async fn open(&self, request_path: &str) -> Result<ServedFile, ServeError> {
        let path = self.resolve(request_path)?;

        let file = File::open(&path)
            .await
            .map_err(|_| ServeError::NotFound)?;

        let metadata = file.metadata().await.map_err(|_| ServeError::Stat)?;

        if metadata.is_dir() {
            return Err(ServeError::NotFound);
        }
        if metadata.len() > self.max_file_size {
            return Err(ServeError::TooLarge);
        }

        Ok(ServedFile {
            file,
            len: metadata.len(),
        })
    }
}
