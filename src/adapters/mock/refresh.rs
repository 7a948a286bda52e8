//! Refresh double that records how often it was triggered.

use tokio::sync::watch;

use crate::traits::Refresh;

/// Counts refreshes.
///
/// # Example
///
/// ```ignore
/// let refresher = Arc::new(RecordingRefresher::new());
/// // ... hand a clone to the dashboard, trigger events ...
/// refresher.wait_for(2).await;
/// assert!(refresher.count() >= 2);
/// ```
#[derive(Debug)]
pub struct RecordingRefresher {
    count: watch::Sender<usize>,
}

impl RecordingRefresher {
    pub fn new() -> Self {
        let (count, _) = watch::channel(0);
        Self { count }
    }

    pub fn count(&self) -> usize {
        *self.count.borrow()
    }

    /// Wait until at least `n` refreshes have been recorded.
    pub async fn wait_for(&self, n: usize) {
        let mut rx = self.count.subscribe();
        // The sender lives as long as `self`, so this cannot fail.
        let _ = rx.wait_for(|count| *count >= n).await;
    }
}

impl Default for RecordingRefresher {
    fn default() -> Self {
        Self::new()
    }
}

impl Refresh for RecordingRefresher {
    fn refresh(&self) {
        self.count.send_modify(|count| *count += 1);
    }
}
