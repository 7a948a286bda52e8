//! Best-effort channel of status-line messages.
//!
//! Producers never wait. A message reaches the consumer only if the consumer
//! is waiting in [`OutboxReceiver::recv`] at that moment, or if there is
//! room in the backlog. Otherwise the new message is dropped; it is never
//! handed to a consumer that arrives later. With a backlog capacity of zero
//! the channel is a strict rendezvous.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;

use crate::lock;

/// What happened to an emitted message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitOutcome {
    /// Handed to the waiting consumer. If that receive is abandoned before
    /// it returns, the message waits for the next one.
    Delivered,
    /// Kept in the backlog for the next receive.
    Queued,
    /// Lost: no consumer was waiting and the backlog was full, or the
    /// outbox is closed.
    Dropped,
}

#[derive(Debug)]
struct Shared {
    waiter: Option<oneshot::Sender<String>>,
    backlog: VecDeque<String>,
    capacity: usize,
    closed: bool,
}

/// Create an outbox with room for `capacity` undelivered messages.
pub fn channel(capacity: usize) -> (Outbox, OutboxReceiver) {
    let shared = Arc::new(Mutex::new(Shared {
        waiter: None,
        backlog: VecDeque::with_capacity(capacity),
        capacity,
        closed: false,
    }));
    (
        Outbox {
            shared: Arc::clone(&shared),
        },
        OutboxReceiver { shared },
    )
}

/// Producing side; cheap to clone.
#[derive(Debug, Clone)]
pub struct Outbox {
    shared: Arc<Mutex<Shared>>,
}

impl Outbox {
    /// Offer `message` to the consumer without blocking.
    pub fn emit(&self, message: impl Into<String>) -> EmitOutcome {
        let message = message.into();
        let mut shared = lock::lock(&self.shared);
        if shared.closed {
            tracing::trace!("Outbox closed, dropping message: {}", message);
            return EmitOutcome::Dropped;
        }

        let message = match shared.waiter.take() {
            Some(waiter) => match waiter.send(message) {
                Ok(()) => return EmitOutcome::Delivered,
                // The consumer stopped waiting.
                Err(message) => message,
            },
            None => message,
        };

        if shared.backlog.len() < shared.capacity {
            shared.backlog.push_back(message);
            EmitOutcome::Queued
        } else {
            tracing::trace!("No consumer ready, dropping message: {}", message);
            EmitOutcome::Dropped
        }
    }

    /// Stop accepting messages and end the consumer's stream once the
    /// backlog is drained. Idempotent.
    pub fn close(&self) {
        let mut shared = lock::lock(&self.shared);
        shared.closed = true;
        // Dropping the waiter wakes a pending `recv`.
        shared.waiter = None;
    }

    pub fn is_closed(&self) -> bool {
        lock::lock(&self.shared).closed
    }
}

/// Consuming side. There is exactly one.
#[derive(Debug)]
pub struct OutboxReceiver {
    shared: Arc<Mutex<Shared>>,
}

impl OutboxReceiver {
    /// Wait for the next message. Returns `None` once the outbox is closed
    /// and the backlog is empty.
    ///
    /// Cancel safe: a message handed over while this future is dropped is
    /// put back at the front of the backlog for the next receive.
    pub async fn recv(&mut self) -> Option<String> {
        loop {
            let mut waiter = {
                let mut shared = lock::lock(&self.shared);
                if let Some(message) = shared.backlog.pop_front() {
                    return Some(message);
                }
                if shared.closed {
                    return None;
                }
                let (tx, rx) = oneshot::channel();
                shared.waiter = Some(tx);
                Waiter {
                    rx,
                    shared: Arc::clone(&self.shared),
                }
            };

            match (&mut waiter.rx).await {
                Ok(message) => return Some(message),
                // Woken by close; re-check.
                Err(_) => continue,
            }
        }
    }

    /// Take a backlogged message without waiting.
    pub fn try_recv(&mut self) -> Option<String> {
        lock::lock(&self.shared).backlog.pop_front()
    }
}

/// A parked [`OutboxReceiver::recv`].
///
/// On drop it withdraws from the outbox and requeues a message that arrived
/// after the last poll.
struct Waiter {
    rx: oneshot::Receiver<String>,
    shared: Arc<Mutex<Shared>>,
}

impl Drop for Waiter {
    fn drop(&mut self) {
        // Producers send under this lock, so nothing can arrive past it.
        let mut shared = lock::lock(&self.shared);
        shared.waiter = None;
        self.rx.close();
        if let Ok(message) = self.rx.try_recv() {
            tracing::trace!("Requeueing message from abandoned receive: {}", message);
            shared.backlog.push_front(message);
        }
    }
}

impl Drop for OutboxReceiver {
    fn drop(&mut self) {
        let mut shared = lock::lock(&self.shared);
        shared.waiter = None;
        shared.backlog.clear();
        // Nobody can receive anymore.
        shared.capacity = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    async fn wait_until_waiting(outbox: &Outbox) {
        for _ in 0..100 {
            if lock::lock(&outbox.shared).waiter.is_some() {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("consumer never started waiting");
    }

    #[tokio::test]
    async fn test_emit_without_consumer_is_dropped_and_not_redelivered() {
        let (outbox, mut rx) = channel(0);

        assert_eq!(outbox.emit("lost"), EmitOutcome::Dropped);

        let consumer = tokio::spawn(async move { rx.recv().await });
        wait_until_waiting(&outbox).await;
        assert_eq!(outbox.emit("kept"), EmitOutcome::Delivered);

        assert_eq!(consumer.await.unwrap(), Some("kept".to_string()));
    }

    #[tokio::test]
    async fn test_emit_does_not_block_without_consumer() {
        let (outbox, _rx) = channel(0);
        let emitted = tokio::time::timeout(Duration::from_secs(1), async {
            for i in 0..1000 {
                outbox.emit(format!("message {}", i));
            }
        })
        .await;
        assert!(emitted.is_ok());
    }

    #[tokio::test]
    async fn test_backlog_keeps_first_messages_and_drops_newest() {
        let (outbox, mut rx) = channel(2);

        assert_eq!(outbox.emit("one"), EmitOutcome::Queued);
        assert_eq!(outbox.emit("two"), EmitOutcome::Queued);
        assert_eq!(outbox.emit("three"), EmitOutcome::Dropped);

        assert_eq!(rx.recv().await, Some("one".to_string()));
        assert_eq!(rx.try_recv(), Some("two".to_string()));
        assert_eq!(rx.try_recv(), None);
    }

    #[tokio::test]
    async fn test_abandoned_recv_does_not_receive() {
        let (outbox, mut rx) = channel(0);

        // Starts waiting, then gives up.
        let timed_out = tokio::time::timeout(Duration::from_millis(10), rx.recv()).await;
        assert!(timed_out.is_err());

        assert_eq!(outbox.emit("late"), EmitOutcome::Dropped);
    }

    #[tokio::test]
    async fn test_message_delivered_to_dropped_recv_is_kept() {
        let (outbox, mut rx) = channel(0);

        let mut pending = Box::pin(rx.recv());
        assert!(futures::poll!(&mut pending).is_pending());
        assert_eq!(outbox.emit("status"), EmitOutcome::Delivered);
        drop(pending);

        let later = tokio::time::timeout(Duration::from_millis(20), rx.recv())
            .await
            .expect("requeued message should be received");
        assert_eq!(later, Some("status".to_string()));
        assert_eq!(rx.try_recv(), None);
    }

    #[tokio::test]
    async fn test_dropped_recv_withdraws_waiter() {
        let (outbox, mut rx) = channel(0);

        let mut pending = Box::pin(rx.recv());
        assert!(futures::poll!(&mut pending).is_pending());
        assert!(lock::lock(&outbox.shared).waiter.is_some());
        drop(pending);

        assert!(lock::lock(&outbox.shared).waiter.is_none());
        assert_eq!(outbox.emit("late"), EmitOutcome::Dropped);
    }

    #[tokio::test]
    async fn test_close_wakes_consumer_and_drops_later_emits() {
        let (outbox, mut rx) = channel(0);

        let consumer = tokio::spawn(async move { rx.recv().await });
        wait_until_waiting(&outbox).await;
        outbox.close();

        assert_eq!(consumer.await.unwrap(), None);
        assert_eq!(outbox.emit("after close"), EmitOutcome::Dropped);
        assert!(outbox.is_closed());
    }

    #[tokio::test]
    async fn test_close_is_idempotent_and_drains_backlog() {
        let (outbox, mut rx) = channel(1);
        outbox.emit("queued");

        outbox.close();
        outbox.close();

        assert_eq!(rx.recv().await, Some("queued".to_string()));
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_emit_after_receiver_dropped_is_dropped() {
        let (outbox, rx) = channel(4);
        drop(rx);
        assert_eq!(outbox.emit("nobody"), EmitOutcome::Dropped);
    }

    #[tokio::test]
    async fn test_concurrent_producers_never_block() {
        let (outbox, mut rx) = channel(0);
        let consumer = tokio::spawn(async move {
            let mut received = 0;
            while rx.recv().await.is_some() {
                received += 1;
            }
            received
        });

        let producers: Vec<_> = (0..4)
            .map(|_| {
                let outbox = outbox.clone();
                tokio::spawn(async move {
                    let mut delivered = 0;
                    for i in 0..50 {
                        if outbox.emit(format!("m{}", i)) == EmitOutcome::Delivered {
                            delivered += 1;
                        }
                        tokio::task::yield_now().await;
                    }
                    delivered
                })
            })
            .collect();

        let mut delivered = 0;
        for producer in producers {
            delivered += producer.await.unwrap();
        }
        outbox.close();

        assert_eq!(consumer.await.unwrap(), delivered);
    }
}
