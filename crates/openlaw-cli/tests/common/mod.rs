#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

/// Run the CLI with an isolated data directory, pointed at `root`.
pub fn run_cli_with_env(args: &[&str], home: &Path, root: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_openlaw"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.env("OPENLAW_ROOT", root);
    cmd.env_remove("OPENLAW_BASIC_USER");
    cmd.env_remove("OPENLAW_BASIC_PASSWORD");
    cmd.env_remove("RUST_LOG");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI with an isolated data directory and expect success.
pub fn run_cli_with_env_success(args: &[&str], home: &Path, root: &str) -> String {
    let output = run_cli_with_env(args, home, root);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI off the async runtime, so a mock server can answer it.
pub async fn run_async(args: &[&str], home: &Path, root: &str) -> Output {
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    let home = home.to_path_buf();
    let root = root.to_string();
    tokio::task::spawn_blocking(move || {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        run_cli_with_env(&args, &home, &root)
    })
    .await
    .expect("CLI task panicked")
}

pub async fn run_async_success(args: &[&str], home: &Path, root: &str) -> String {
    let output = run_async(args, home, root).await;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}
