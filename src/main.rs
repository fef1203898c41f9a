//! # ticketboard
//!
//! Fetches users and tickets once and prints them as kanban columns.

mod cli;
mod output;

use anyhow::{bail, Context};
use clap::Parser;
use ticketboard::{BoardView, Dashboard, DataSource, FileSource, HttpSource, RefreshOutcome};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.file {
        Some(path) => {
            let view = cli.apply_view(BoardView::default());
            show(FileSource::new(path), view, cli.json).await
        }
        None => {
            let config = cli.http_config()?;
            let source = HttpSource::with_timeout(config.fetch_url.clone(), config.request_timeout)?;
            show(source, config.view, cli.json).await
        }
    }
}

async fn show<S: DataSource>(source: S, view: BoardView, json: bool) -> anyhow::Result<()> {
    let location = source.describe();
    let dashboard = Dashboard::new(source, view);

    let snapshot = match dashboard.refresh().await {
        RefreshOutcome::Applied(snapshot) => snapshot,
        RefreshOutcome::Failed(err) => {
            return Err(err).with_context(|| format!("could not load board from {}", location))
        }
        RefreshOutcome::Superseded => bail!("board refresh was superseded"),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(snapshot.as_ref())?);
    } else {
        print!("{}", output::render_board(&snapshot));
    }
    Ok(())
}
