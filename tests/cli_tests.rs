//! CLI tests
//!
//! Runs the `jobscout` binary in its headless modes (`--check`, `--export`)
//! against a local axum server. `HOME` and `XDG_CONFIG_HOME` point into a
//! temp dir so the user's own config is never read or written.

use anyhow::Result;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;
use tokio::net::TcpListener;

async fn spawn_backend() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let app = Router::new()
        .route(
            "/api/health",
            get(|| async { Json(json!({"status": "healthy", "service": "job-scraper"})) }),
        )
        .route(
            "/api/search",
            post(|| async {
                Json(json!({
                    "total": 2,
                    "search_query": "rust",
                    "location": "Berlin",
                    "jobs": [
                        {"title": "<script>alert(1)</script>", "company": "Acme", "work_from_home": true},
                        {"title": "Platform Engineer", "company": "Initech", "salary": "80k"}
                    ]
                }))
            }),
        );
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

/// Run the binary with an isolated home directory.
async fn run(home: &Path, args: Vec<String>) -> Result<Output> {
    let home = home.to_path_buf();
    let output = tokio::task::spawn_blocking(move || {
        Command::new(env!("CARGO_BIN_EXE_jobscout"))
            .args(&args)
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join("config"))
            .env("XDG_DATA_HOME", home.join("data"))
            .env("NO_PROXY", "127.0.0.1,localhost")
            .env_remove("JOBSCOUT_SERVER")
            .output()
    })
    .await??;
    Ok(output)
}

fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| (*s).to_string()).collect()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_help_lists_flags() -> Result<()> {
    let home = TempDir::new()?;
    let output = run(home.path(), strings(&["--help"])).await?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    for flag in ["--server", "--query", "--location", "--remote", "--export", "--check"] {
        assert!(stdout.contains(flag), "missing {flag} in help");
    }
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_against_healthy_backend() -> Result<()> {
    let base = spawn_backend().await?;
    let home = TempDir::new()?;
    let output = run(home.path(), strings(&["--server", &base, "--check"])).await?;

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("job-scraper: healthy"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_check_against_unreachable_backend_fails() -> Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let home = TempDir::new()?;
    let output = run(
        home.path(),
        vec!["--server".to_string(), format!("http://{addr}"), "--check".to_string()],
    )
    .await?;

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Health check failed"));
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_export_writes_escaped_cards() -> Result<()> {
    let base = spawn_backend().await?;
    let home = TempDir::new()?;
    let out = home.path().join("jobs.html");
    let log = home.path().join("jobscout.log");

    let output = run(
        home.path(),
        vec![
            "--server".to_string(),
            base,
            "-q".to_string(),
            "rust".to_string(),
            "-l".to_string(),
            "Berlin".to_string(),
            "--export".to_string(),
            out.display().to_string(),
            "--log-file".to_string(),
            log.display().to_string(),
        ],
    )
    .await?;

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let html = std::fs::read_to_string(&out)?;
    assert_eq!(html.matches("class=\"job-card\"").count(), 2);
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("Showing results for &quot;rust&quot; in Berlin"));
    assert!(log.exists());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_export_without_location_fails_validation() -> Result<()> {
    let home = TempDir::new()?;
    let out = home.path().join("jobs.html");
    let output = run(
        home.path(),
        vec![
            "-q".to_string(),
            "rust".to_string(),
            "--export".to_string(),
            out.display().to_string(),
        ],
    )
    .await?;

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("Please enter both job title and location"));
    assert!(!out.exists());
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_theme_is_rejected() -> Result<()> {
    let home = TempDir::new()?;
    let output = run(home.path(), strings(&["--theme", "Solarized", "--check"])).await?;

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown theme"));
    Ok(())
}
