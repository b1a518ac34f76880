// Exit status of the command-line tool
//
// Runs the built binary; the stub backend serves from the test runtime.

use anyhow::Result;
use meeting_desk::config::ApiConfig;
use meeting_desk::stub::{create_router, StubState};
use meeting_desk::{CreateMeetingRequest, MeetingApi, MeetingClient};
use std::process::{Output, Stdio};
use tokio::net::TcpListener;
use tokio::process::Command;

async fn run(args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_meeting-desk"))
        .arg("--config")
        .arg("does/not/exist/meeting-desk")
        .args(args)
        .stdin(Stdio::null())
        .output()
        .await?;
    Ok(output)
}

async fn start_stub() -> Result<String> {
    // No analysis worker: meetings stay in processing
    let (state, _queue) = StubState::new();
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, create_router(state)).await.ok();
    });
    Ok(format!("http://{}", addr))
}

async fn closed_port() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{}", addr))
}

#[tokio::test]
async fn test_create_with_blank_title_fails() -> Result<()> {
    let api_url = closed_port().await?;
    let output = run(&[
        "--api-url",
        &api_url,
        "create",
        "--title",
        "   ",
        "--content",
        "Anna: Hallo",
    ])
    .await?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Titel ist erforderlich"), "stderr: {}", stderr);

    Ok(())
}

#[tokio::test]
async fn test_create_against_unreachable_server_fails() -> Result<()> {
    let api_url = closed_port().await?;
    let output = run(&[
        "--api-url",
        &api_url,
        "create",
        "--title",
        "Weekly",
        "--content",
        "Anna: Hallo",
    ])
    .await?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Verbindung zum Server fehlgeschlagen"),
        "stderr: {}",
        stderr
    );

    Ok(())
}

#[tokio::test]
async fn test_delete_of_missing_meeting_fails() -> Result<()> {
    let api_url = start_stub().await?;
    let output = run(&["--api-url", &api_url, "delete", "missing", "--yes"]).await?;

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Meeting nicht gefunden"), "stderr: {}", stderr);

    Ok(())
}

#[tokio::test]
async fn test_declined_and_confirmed_delete_succeed() -> Result<()> {
    let api_url = start_stub().await?;
    let api = MeetingClient::new(&ApiConfig {
        base_url: api_url.clone(),
        timeout_secs: 5,
    })?;
    let created = api
        .create(&CreateMeetingRequest {
            title: "Weekly".to_string(),
            content: "Anna: Hallo".to_string(),
        })
        .await?;

    // No answer on stdin declines the prompt
    let output = run(&["--api-url", &api_url, "delete", &created.id]).await?;
    assert!(output.status.success());
    assert_eq!(api.list_all().await?.len(), 1);

    let output = run(&["--api-url", &api_url, "delete", &created.id, "--yes"]).await?;
    assert!(output.status.success());
    assert!(api.list_all().await?.is_empty());

    Ok(())
}
