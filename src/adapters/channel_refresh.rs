//! Refresh side effect backed by a coalescing channel.

use tokio::sync::mpsc;

use crate::traits::Refresh;

/// Signals the render loop that it should redraw.
///
/// The channel holds at most one pending signal: a refresh requested while
/// another is still pending is folded into it, and requesting a refresh
/// never blocks.
///
/// # Example
///
/// ```ignore
/// let (refresher, mut redraw_rx) = ChannelRefresher::new();
/// refresher.refresh();
/// redraw_rx.recv().await; // redraw now
/// ```
#[derive(Debug, Clone)]
pub struct ChannelRefresher {
    tx: mpsc::Sender<()>,
}

impl ChannelRefresher {
    pub fn new() -> (Self, mpsc::Receiver<()>) {
        let (tx, rx) = mpsc::channel(1);
        (Self { tx }, rx)
    }
}

impl Refresh for ChannelRefresher {
    fn refresh(&self) {
        // Full: a redraw is already pending. Closed: the renderer is gone.
        let _ = self.tx.try_send(());
    }
}
