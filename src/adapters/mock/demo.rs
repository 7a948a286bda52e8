//! Synthetic daemon activity for the demo binary.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use super::MockDaemon;
use crate::models::DaemonEvent;
use crate::traits::DaemonGateway;

const DEMO_ACTIONS: [(&str, &str); 4] = [
    ("container", "exec_start"),
    ("container", "health_status"),
    ("network", "connect"),
    ("image", "pull"),
];

/// Inject an event into `daemon` every `interval`, cycling through a few
/// kinds of activity, until the returned task is aborted.
pub fn spawn_demo_events(daemon: Arc<MockDaemon>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval.max(Duration::from_millis(10)));
        ticker.tick().await;

        for (kind, action) in DEMO_ACTIONS.iter().cycle() {
            ticker.tick().await;
            let actor = match daemon.containers().await {
                Ok(containers) => containers
                    .first()
                    .map(|c| c.id.clone())
                    .unwrap_or_default(),
                Err(_) => String::new(),
            };
            if !daemon.inject_event(DaemonEvent::new(*kind, *action, actor)) {
                tracing::trace!("Demo event dropped: no subscriber");
            }
        }
    })
}
