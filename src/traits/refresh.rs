//! Screen refresh side effect.

/// Asks the renderer to redraw from the current state and snapshots.
///
/// Implementations must not block: refreshes are triggered from command
/// handlers and from the event pipeline.
pub trait Refresh: Send + Sync {
    fn refresh(&self);
}

impl<F> Refresh for F
where
    F: Fn() + Send + Sync,
{
    fn refresh(&self) {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_closure_is_refresh() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let refresher = move || {
            counter.fetch_add(1, Ordering::SeqCst);
        };
        refresher.refresh();
        refresher.refresh();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
