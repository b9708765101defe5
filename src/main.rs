use anyhow::Result;
use chrono::Local;
use reqwest::Client;
use std::sync::Arc;
use tokio::time::interval;
use tracing::{error, info, warn};

use taproom_board::board::{Board, MenuPipeline};
use taproom_board::config::Config;
use taproom_board::render::write_pages;
use taproom_board::snapshot::{capture_all, targets_for, HeadlessChrome, SnapshotRenderer};
use taproom_board::utils::http::{create_client, fetch_table};

struct Context {
    config: Arc<Config>,
    client: Client,
    pipeline: MenuPipeline,
    renderer: Box<dyn SnapshotRenderer>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("taproom_board=info".parse()?),
        )
        .init();

    info!("Starting Taproom Board");

    // Load configuration
    let config = Arc::new(Config::load()?);

    let ctx = Context {
        client: create_client(&config.source)?,
        pipeline: MenuPipeline::new(&config),
        renderer: Box::new(HeadlessChrome::new(config.snapshot.clone())),
        config: config.clone(),
    };

    let mut interval = interval(config.refresh_interval());

    loop {
        interval.tick().await;

        info!("--- Starting board refresh at {} ---", Local::now().format("%Y-%m-%d %H:%M:%S"));

        if let Err(e) = refresh(&ctx).await {
            error!("Board refresh failed: {:#}", e);
        }

        if config.run_once {
            info!("Single refresh requested, exiting");
            return Ok(());
        }

        info!("Refresh completed, waiting {} seconds", config.refresh_interval_seconds);
    }
}

async fn refresh(ctx: &Context) -> Result<()> {
    let config = &ctx.config;

    // A fetch failure still rewrites the pages, with empty containers
    let (board, fetched) = match fetch_table(&ctx.client, &config.source).await {
        Ok(text) => (ctx.pipeline.build_board(&text), true),
        Err(e) => {
            error!("Failed to load menu sheet: {}", e);
            (Board::default(), false)
        }
    };

    info!(
        "Board has {} items over {} pages",
        board.item_count(),
        board.page_count()
    );

    let pages = write_pages(&board, &config.board, &config.output)?;

    if !fetched {
        warn!("Skipping snapshots; previous images stay on screen");
        return Ok(());
    }

    if !config.snapshot.enabled {
        return Ok(());
    }

    let targets = targets_for(&pages, &config.snapshot, &config.output.dir)?;
    let report = capture_all(ctx.renderer.as_ref(), &targets).await;

    if report.is_complete() {
        info!("Captured {} screens", report.captured.len());
    } else {
        warn!(
            "Captured {} screens, {} failed",
            report.captured.len(),
            report.failed.len()
        );
    }

    Ok(())
}
