use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use curate_core::config::{resolve_with_base, Config};
use curate_core::logging;
use curate_core::types::FetchTrigger;
use curate_jobs::{FetchJobsStep, HnClient, JsonFileStateStore, NdjsonSink};

/// Fetch job postings from the Hacker News "Who is hiring" thread.
///
/// Each parsed posting is written to stdout as one JSON line; the run's
/// status is recorded in the state file.
#[derive(Parser, Debug)]
#[command(name = "curate-fetch-jobs", version)]
struct Cli {
    /// Source named by the trigger; only "hackernews" and "all" do any work
    #[arg(long, default_value = "hackernews")]
    source: String,

    /// Mark the run as manually triggered
    #[arg(long)]
    manual: bool,

    /// Full trigger payload as JSON, e.g. '{"source":"all"}'
    #[arg(long, conflicts_with_all = ["source", "manual"])]
    trigger: Option<String>,

    /// State file (defaults to state.path from config)
    #[arg(long)]
    state: Option<String>,

    /// Thread id to process instead of the configured list (repeatable)
    #[arg(long = "thread")]
    threads: Vec<u64>,

    /// Extra TOML config layered over config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();
    let config = Config::load_from(Path::new("."), cli.config.as_deref()).map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;

    let mut settings = config.hackernews()?;
    if !cli.threads.is_empty() {
        settings.thread_ids = cli.threads.clone();
    }
    let state_path = match cli.state {
        Some(path) => resolve_with_base(&env::current_dir()?, path),
        None => resolve_with_base(&env::current_dir()?, config.state()?.path),
    };
    let trigger = match cli.trigger {
        Some(raw) => serde_json::from_str::<FetchTrigger>(&raw)?,
        None => FetchTrigger {
            source: cli.source,
            manual: cli.manual.then_some(true),
        },
    };

    let timeout = Duration::from_secs(settings.timeout_secs);
    let client = HnClient::new(&settings.api_base, timeout)?;
    let store = JsonFileStateStore::new(state_path);
    let state_display = store.path().display().to_string();
    let step = FetchJobsStep::new(
        Arc::new(client),
        Arc::new(store),
        Arc::new(NdjsonSink::stdout()),
        settings,
    );

    match step.run(&trigger).await? {
        Some(status) => info!(
            job_count = status.job_count,
            status = ?status.status,
            state = %state_display,
            "Recorded source status"
        ),
        None => info!(source = %trigger.source, "No work for this source"),
    }
    Ok(())
}
