//! Background task turning daemon events into screen refreshes.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::EventLog;
use crate::models::DaemonEvent;
use crate::traits::{CancelToken, Refresh};

/// Consumes the daemon event subscription and requests a refresh for every
/// event, until the subscription is cancelled or its stream ends.
#[derive(Debug)]
pub struct EventPipeline {
    handle: JoinHandle<usize>,
}

impl EventPipeline {
    /// Start consuming `events` on a new task.
    pub fn spawn(
        events: mpsc::Receiver<DaemonEvent>,
        cancel: CancelToken,
        refresher: Arc<dyn Refresh>,
        log: Arc<EventLog>,
    ) -> Self {
        let handle = tokio::spawn(run(events, cancel, refresher, log));
        Self { handle }
    }

    /// Wait for the task to stop; returns how many events it handled.
    pub async fn join(self) -> usize {
        match self.handle.await {
            Ok(handled) => handled,
            Err(e) => {
                tracing::warn!("Event pipeline task failed: {}", e);
                0
            }
        }
    }

    pub(crate) fn abort(&self) {
        self.handle.abort();
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

async fn run(
    mut events: mpsc::Receiver<DaemonEvent>,
    mut cancel: CancelToken,
    refresher: Arc<dyn Refresh>,
    log: Arc<EventLog>,
) -> usize {
    tracing::info!("Event pipeline started");
    let mut handled = 0;

    loop {
        tokio::select! {
            biased;

            _ = cancel.cancelled() => {
                tracing::info!("Event pipeline cancelled after {} events", handled);
                break;
            }

            event = events.recv() => match event {
                Some(event) => {
                    tracing::debug!(
                        "Daemon event: {} {} {}",
                        event.kind,
                        event.action,
                        event.actor_id
                    );
                    log.push(event);
                    refresher.refresh();
                    handled += 1;
                }
                None => {
                    tracing::info!("Daemon event stream ended after {} events", handled);
                    break;
                }
            },
        }
    }

    handled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::RecordingRefresher;
    use crate::traits::CancelHandle;
    use std::time::Duration;

    fn setup() -> (
        mpsc::Sender<DaemonEvent>,
        CancelHandle,
        Arc<RecordingRefresher>,
        Arc<EventLog>,
        EventPipeline,
    ) {
        let (tx, rx) = mpsc::channel(16);
        let (cancel, token) = CancelHandle::new();
        let refresher = Arc::new(RecordingRefresher::new());
        let log = Arc::new(EventLog::default());
        let pipeline = EventPipeline::spawn(rx, token, refresher.clone(), Arc::clone(&log));
        (tx, cancel, refresher, log, pipeline)
    }

    #[tokio::test]
    async fn test_every_event_triggers_refresh() {
        let (tx, cancel, refresher, log, pipeline) = setup();

        for action in ["create", "start", "die"] {
            tx.send(DaemonEvent::new("container", action, "abc"))
                .await
                .unwrap();
        }
        refresher.wait_for(3).await;
        assert_eq!(log.len(), 3);

        cancel.cancel();
        assert_eq!(pipeline.join().await, 3);
    }

    #[tokio::test]
    async fn test_stops_when_stream_ends() {
        let (tx, _cancel, refresher, _log, pipeline) = setup();

        tx.send(DaemonEvent::new("image", "pull", "img"))
            .await
            .unwrap();
        drop(tx);

        let handled = tokio::time::timeout(Duration::from_secs(1), pipeline.join())
            .await
            .expect("pipeline should stop when the stream ends");
        assert_eq!(handled, 1);
        assert_eq!(refresher.count(), 1);
    }

    #[tokio::test]
    async fn test_stops_when_cancelled_while_idle() {
        let (_tx, cancel, refresher, _log, pipeline) = setup();

        cancel.cancel();
        let handled = tokio::time::timeout(Duration::from_secs(1), pipeline.join())
            .await
            .expect("pipeline should stop after cancel");
        assert_eq!(handled, 0);
        assert_eq!(refresher.count(), 0);
    }

    #[tokio::test]
    async fn test_abort_finishes_task() {
        let (_tx, _cancel, _refresher, _log, pipeline) = setup();
        pipeline.abort();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(pipeline.is_finished());
    }
}
