use std::time::Duration;

use anyhow::Result;
use tokio::sync::{mpsc, watch};
use tracing::info;

use pagewire_core::{AppConfig, FrameScheduler, PageCommand, PageRuntime};

pub async fn run(config: AppConfig, duration_ms: Option<u64>) -> Result<()> {
    let runtime = PageRuntime::from_config(&config, Duration::ZERO)?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    // Kept open so the scheduler only stops on shutdown
    let (_command_tx, command_rx) = mpsc::channel::<PageCommand>(16);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let scheduler = FrameScheduler::new(runtime, &config.ui).with_event_sender(event_tx);
    let handle = tokio::spawn(scheduler.run(command_rx, shutdown_rx));

    let printer = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            match serde_json::to_string(&event) {
                Ok(line) => println!("{}", line),
                Err(e) => eprintln!("Failed to encode event: {}", e),
            }
        }
    });

    match duration_ms {
        Some(ms) => tokio::time::sleep(Duration::from_millis(ms)).await,
        None => tokio::signal::ctrl_c().await?,
    }

    info!("Stopping page");
    let _ = shutdown_tx.send(true);
    let runtime = handle.await?;
    // The scheduler dropped its sender, so the printer drains and ends
    printer.await?;

    for group in runtime.tab_groups() {
        info!(group = group.name(), active = ?group.marked_index(), "Final tab state");
    }
    Ok(())
}
