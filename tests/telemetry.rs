use std::fs;

use tempfile::TempDir;
use viewstate::telemetry::{init_tracing, LOG_ENV};

#[test]
fn log_env_writes_to_pid_suffixed_file() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("viewstate.log");
    std::env::set_var(LOG_ENV, &base);

    init_tracing();
    tracing::warn!(screen = "login", "telemetry smoke");

    let file = dir
        .path()
        .join(format!("viewstate.log.{}", std::process::id()));
    assert!(file.exists());
    let logged = fs::read_to_string(&file).unwrap();
    assert!(logged.contains("telemetry smoke"));

    // A second init leaves the installed subscriber in place.
    init_tracing();
}
