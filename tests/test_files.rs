use std::path::PathBuf;

use staticd::files::{FileStore, ServeError};

fn store(root: &str) -> FileStore {
    FileStore::new(PathBuf::from(root), "index.html".to_string(), 1024)
}

#[test]
fn test_resolve_root_path_becomes_index_file() {
    let resolved = store("/srv/www").resolve("/").unwrap();
    assert_eq!(resolved, PathBuf::from("/srv/www/index.html"));
}

#[test]
fn test_resolve_strips_leading_slash() {
    let resolved = store("/srv/www").resolve("/page.html").unwrap();
    assert_eq!(resolved, PathBuf::from("/srv/www/page.html"));
}

#[test]
fn test_resolve_nested_path() {
    let resolved = store("/srv/www").resolve("/docs/a/b.html").unwrap();
    assert_eq!(resolved, PathBuf::from("/srv/www/docs/a/b.html"));
}

#[test]
fn test_resolve_path_without_leading_slash() {
    let resolved = store("/srv/www").resolve("page.html").unwrap();
    assert_eq!(resolved, PathBuf::from("/srv/www/page.html"));
}

#[test]
fn test_resolve_allows_current_dir_components() {
    let resolved = store("/srv/www").resolve("/./page.html").unwrap();
    assert_eq!(resolved, PathBuf::from("/srv/www/page.html"));
}

#[test]
fn test_resolve_rejects_parent_dir_components() {
    assert_eq!(
        store("/srv/www").resolve("/../etc/passwd"),
        Err(ServeError::Traversal)
    );
    assert_eq!(
        store("/srv/www").resolve("/docs/../../etc/passwd"),
        Err(ServeError::Traversal)
    );
}

#[test]
fn test_resolve_rejects_absolute_remainder() {
    // Stripping one slash from "//etc/passwd" leaves an absolute path.
    assert_eq!(
        store("/srv/www").resolve("//etc/passwd"),
        Err(ServeError::Traversal)
    );
}

mod open {
    use super::*;

    use tokio::fs;

    async fn temp_root(name: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!(
            "staticd-files-{}-{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&root).await.unwrap();
        root
    }

    #[tokio::test]
    async fn test_open_existing_file() {
        let root = temp_root("existing").await;
        fs::write(root.join("index.html"), b"hello world").await.unwrap();

        let store = FileStore::new(root, "index.html".to_string(), 1024);
        let served = store.open("/").await.unwrap();

        assert_eq!(served.len, 11);
    }

    #[tokio::test]
    async fn test_open_missing_file() {
        let root = temp_root("missing").await;

        let store = FileStore::new(root, "index.html".to_string(), 1024);
        let result = store.open("/nope.html").await;

        assert!(matches!(result, Err(ServeError::NotFound)));
    }

    #[tokio::test]
    async fn test_open_directory_is_not_found() {
        let root = temp_root("dir").await;
        fs::create_dir_all(root.join("sub")).await.unwrap();

        let store = FileStore::new(root, "index.html".to_string(), 1024);
        let result = store.open("/sub").await;

        assert!(matches!(result, Err(ServeError::NotFound)));
    }

    #[tokio::test]
    async fn test_open_file_over_the_ceiling() {
        let root = temp_root("ceiling").await;
        fs::write(root.join("big.html"), b"0123456789").await.unwrap();

        let store = FileStore::new(root, "index.html".to_string(), 9);
        let result = store.open("/big.html").await;

        assert!(matches!(result, Err(ServeError::TooLarge)));
    }

    #[tokio::test]
    async fn test_open_file_exactly_at_the_ceiling() {
        let root = temp_root("at-ceiling").await;
        fs::write(root.join("big.html"), b"0123456789").await.unwrap();

        let store = FileStore::new(root, "index.html".to_string(), 10);
        let served = store.open("/big.html").await.unwrap();

        assert_eq!(served.len, 10);
    }
}
