use std::path::PathBuf;

use staticd::config::{
    Config, DEFAULT_BACKLOG, DEFAULT_LISTEN_ADDR, DEFAULT_MAX_FILE_SIZE, DEFAULT_WORKER_COUNT,
};

// Env manipulation is process-global, so the default and override cases run
// inside one test to keep them from racing each other.
#[test]
fn test_config_listen_address() {
    // When LISTEN env var is not set, should use default
    unsafe {
        std::env::remove_var("LISTEN");
    }
    let cfg = Config::load();
    assert_eq!(cfg.listen_addr, DEFAULT_LISTEN_ADDR);
    assert_eq!(cfg.listen_addr, "0.0.0.0:8080");

    // When LISTEN env var is set, should use it
    unsafe {
        std::env::set_var("LISTEN", "127.0.0.1:3000");
    }
    let cfg = Config::load();
    assert_eq!(cfg.listen_addr, "127.0.0.1:3000");
    unsafe {
        std::env::remove_var("LISTEN");
    }
}

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.worker_count, DEFAULT_WORKER_COUNT);
    assert_eq!(cfg.worker_count, 4);
    assert_eq!(cfg.backlog, DEFAULT_BACKLOG);
    assert_eq!(cfg.backlog, 16);
    assert_eq!(cfg.max_file_size, DEFAULT_MAX_FILE_SIZE);
    assert_eq!(cfg.max_file_size, 128 * 1024 * 1024);
    assert_eq!(cfg.root_dir, PathBuf::from("."));
    assert_eq!(cfg.index_file, "index.html");
    assert_eq!(cfg.log_file, PathBuf::from("server.log"));
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.listen_addr, cfg2.listen_addr);
    assert_eq!(cfg1.worker_count, cfg2.worker_count);
}
