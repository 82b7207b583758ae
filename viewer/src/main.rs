//! Job Details Viewer
//!
//! Loads one job posting with its similar jobs and renders every state of
//! the screen to the terminal. A failed load can be retried interactively.

mod render;

use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use loader::{
    AuthToken, HttpJobDetailsClient, JobDetailController, JobDetailsSource, JobId, LoadStatus,
    LoaderConfig,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "jobby-view", version, about = "Show a job posting and similar jobs")]
struct Cli {
    /// Id of the job to show
    job_id: String,
    #[arg(
        long,
        env = "JOBBY_JWT_TOKEN",
        hide_env_values = true,
        help = "Bearer token for the jobs API"
    )]
    token: String,
    #[arg(long, help = "Jobs API base URL (default: $JOBBY_API_BASE_URL or https://apis.ccbp.in)")]
    base_url: Option<String>,
    #[arg(long, help = "Request timeout in seconds")]
    timeout_secs: Option<u64>,
    #[arg(long, help = "Print each state as one JSON line")]
    json: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(cli: &Cli) -> anyhow::Result<LoaderConfig> {
    let mut config = LoaderConfig::from_env().context("invalid loader configuration")?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url)?;
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    Ok(config)
}

fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "retry"
    )
}

/// Asks on stderr so stdout only ever carries the rendered view.
async fn ask_retry<R>(input: &mut Lines<R>) -> anyhow::Result<bool>
where
    R: AsyncBufRead + Unpin,
{
    eprint!("retry? [y/N] ");
    std::io::stderr().flush()?;
    Ok(input.next_line().await?.is_some_and(|line| is_affirmative(&line)))
}

/// Loads the job, re-renders on every state change and offers a retry after
/// each failure. Returns the status the screen settled on.
async fn drive_view<S, R, W>(
    mut controller: JobDetailController<S>,
    input: R,
    out: &mut W,
    json: bool,
) -> anyhow::Result<LoadStatus>
where
    S: JobDetailsSource + 'static,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut updates = controller.subscribe();
    let (retry_tx, mut retry_rx) = mpsc::channel::<()>(1);

    let driver = tokio::spawn(async move {
        controller.load().await;
        while controller.status() == LoadStatus::Failure && retry_rx.recv().await.is_some() {
            controller.retry().await;
        }
        controller.status()
    });

    let mut input = input.lines();

    while updates.changed().await.is_ok() {
        let state = updates.borrow_and_update().clone();
        if json {
            render::render_json(out, &state)?;
        } else {
            render::render_text(out, &state)?;
        }
        out.flush()?;

        match state.status() {
            LoadStatus::Success => break,
            LoadStatus::Failure => {
                if !ask_retry(&mut input).await? {
                    break;
                }
                retry_tx.send(()).await?;
            }
            LoadStatus::Idle | LoadStatus::Loading => {}
        }
    }

    drop(retry_tx);
    Ok(driver.await?)
}

async fn run(cli: Cli) -> anyhow::Result<LoadStatus> {
    let config = build_config(&cli)?;
    let job_id = JobId::new(cli.job_id)?;
    let client = HttpJobDetailsClient::new(config)?;
    info!(base_url = %client.config().base_url, %job_id, "using jobs API");

    let controller = JobDetailController::new(client, job_id, AuthToken::new(cli.token));
    let input = BufReader::new(tokio::io::stdin());
    drive_view(controller, input, &mut std::io::stdout(), cli.json).await
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let status = run(cli).await?;

    Ok(if status == LoadStatus::Success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
