use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::config::UiConfig;
use crate::runtime::{PageCommand, PageEvent, PageRuntime};

/// Drives a [`PageRuntime`] on a fixed frame interval
pub struct FrameScheduler {
    runtime: PageRuntime,
    frame: Duration,
    /// Page time zero; the runtime must have been built at page time zero
    origin: Instant,
    event_tx: Option<mpsc::UnboundedSender<PageEvent>>,
}

impl FrameScheduler {
    pub fn new(runtime: PageRuntime, ui: &UiConfig) -> Self {
        let fps = ui.animation_fps.max(1) as u64;
        Self {
            runtime,
            frame: Duration::from_micros(1_000_000 / fps),
            origin: Instant::now(),
            event_tx: None,
        }
    }

    /// Set the sender page events are forwarded to
    pub fn with_event_sender(mut self, tx: mpsc::UnboundedSender<PageEvent>) -> Self {
        self.event_tx = Some(tx);
        self
    }

    pub fn frame(&self) -> Duration {
        self.frame
    }

    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn send_event(&self, event: PageEvent) {
        if let Some(ref tx) = self.event_tx {
            if tx.send(event).is_err() {
                warn!("Failed to send page event: receiver dropped");
            }
        }
    }

    /// Run frames and apply commands until shutdown, then hand the runtime back
    pub async fn run(
        mut self,
        mut commands: mpsc::Receiver<PageCommand>,
        mut shutdown: watch::Receiver<bool>,
    ) -> PageRuntime {
        info!("Frame scheduler started: frame={:?}", self.frame);

        let mut interval = tokio::time::interval(self.frame);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                result = shutdown.changed() => {
                    if result.is_err() || *shutdown.borrow() {
                        info!("Frame scheduler received shutdown signal");
                        break;
                    }
                }

                command = commands.recv() => {
                    let Some(command) = command else {
                        debug!("Command channel closed");
                        break;
                    };
                    let now = self.now();
                    if let Err(e) = self.runtime.dispatch(command, now) {
                        warn!("Page command failed: {}", e);
                    }
                }

                _ = interval.tick() => {
                    let now = self.now();
                    for event in self.runtime.tick(now) {
                        self.send_event(event);
                    }
                }
            }
        }

        info!("Frame scheduler stopped");
        self.runtime
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::tabs::{SwitchCause, TabEvent};

    fn start() -> (
        mpsc::Sender<PageCommand>,
        mpsc::UnboundedReceiver<PageEvent>,
        watch::Sender<bool>,
        tokio::task::JoinHandle<PageRuntime>,
    ) {
        let config = AppConfig::default();
        let runtime = PageRuntime::from_config(&config, Duration::ZERO).unwrap();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (command_tx, command_rx) = mpsc::channel(16);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let scheduler = FrameScheduler::new(runtime, &config.ui).with_event_sender(event_tx);
        let handle = tokio::spawn(scheduler.run(command_rx, shutdown_rx));
        (command_tx, event_rx, shutdown_tx, handle)
    }

    fn switches(rx: &mut mpsc::UnboundedReceiver<PageEvent>) -> Vec<(usize, SwitchCause, u64)> {
        let mut found = Vec::new();
        while let Ok(event) = rx.try_recv() {
            if let PageEvent::Tab {
                event: TabEvent::SwitchStarted { to, cause, at_ms, .. },
                ..
            } = event
            {
                found.push((to, cause, at_ms));
            }
        }
        found
    }

    #[tokio::test(start_paused = true)]
    async fn test_autoplay_on_frame_clock() {
        let (_commands, mut events, shutdown, handle) = start();

        tokio::time::sleep(Duration::from_millis(6500)).await;
        shutdown.send(true).unwrap();
        let runtime = handle.await.unwrap();

        assert_eq!(
            switches(&mut events),
            vec![(0, SwitchCause::Initial, 0), (1, SwitchCause::AutoAdvance, 6100)]
        );
        assert_eq!(runtime.tab_groups()[0].marked_index(), Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_commands_are_applied() {
        let (commands, mut events, shutdown, handle) = start();

        tokio::time::sleep(Duration::from_millis(2000)).await;
        commands
            .send(PageCommand::ClickTab { group: 0, index: 2 })
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;
        shutdown.send(true).unwrap();
        handle.await.unwrap();

        let found = switches(&mut events);
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].0, 2);
        assert_eq!(found[1].1, SwitchCause::UserClick);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_when_commands_close() {
        let (commands, _events, _shutdown, handle) = start();
        drop(commands);
        let result = tokio::time::timeout(Duration::from_secs(1), handle).await;
        assert!(result.is_ok());
    }

    #[test]
    fn test_frame_from_fps() {
        let config = AppConfig::default();
        let runtime = PageRuntime::from_config(&config, Duration::ZERO).unwrap();
        let scheduler = FrameScheduler::new(runtime, &config.ui);
        assert_eq!(scheduler.frame(), Duration::from_micros(16_666));
    }
}
