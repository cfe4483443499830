//! Serve command implementation
//!
//! Reads one JSON request per line from stdin and writes one JSON response
//! per line to stdout. Ctrl+C stops the loop and cancels any check in flight.

use crate::config::Settings;
use crate::output::{to_json_line, ErrorOutput};
use crate::runner::ExpiryRunner;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

/// Answer a single request body with a JSON line
pub async fn handle_request(runner: &ExpiryRunner, body: &str) -> anyhow::Result<String> {
    match runner.check_request(body).await {
        Ok(result) => to_json_line(&result),
        Err(e) => to_json_line(&ErrorOutput::new(e.to_string())),
    }
}

/// Run the serve command
pub async fn run_serve(settings: &Settings) -> anyhow::Result<()> {
    let runner = ExpiryRunner::from_settings(settings);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    info!("Reading requests from stdin");

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => break,
        };
        let Some(line) = line else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let response = tokio::select! {
            response = handle_request(&runner, &line) => response?,
            _ = tokio::signal::ctrl_c() => break,
        };

        stdout.write_all(response.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    Ok(())
}
