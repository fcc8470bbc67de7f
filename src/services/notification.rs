use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::domain::error::NotifyError;
use crate::domain::gateways::{GatewayError, NotificationGateway};
use crate::domain::models::account::Notification;

use super::{DeadlineError, with_deadline};

pub type NotificationWorker = JoinHandle<()>;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchStats {
    pub delivered: u64,
    pub failed: u64,
    pub dropped: u64,
}

#[derive(Default)]
struct Counters {
    delivered: AtomicU64,
    failed: AtomicU64,
    dropped: AtomicU64,
}

/// Handle to the background worker that delivers best-effort notifications.
///
/// The worker stops once every handle has been dropped and the queue is empty.
#[derive(Clone)]
pub struct NotificationDispatcher {
    sender: mpsc::Sender<Notification>,
    counters: Arc<Counters>,
}

impl NotificationDispatcher {
    pub fn spawn(
        gateway: Arc<dyn NotificationGateway>,
        capacity: usize,
        timeout: Duration,
    ) -> (Self, NotificationWorker) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        let counters = Arc::new(Counters::default());

        let worker = tokio::spawn(deliver(gateway, receiver, timeout, counters.clone()));

        (Self { sender, counters }, worker)
    }

    pub fn dispatch(&self, notification: Notification) -> Result<(), NotifyError> {
        self.sender.try_send(notification).map_err(|err| {
            self.counters.dropped.fetch_add(1, Ordering::Relaxed);
            match err {
                TrySendError::Full(_) => NotifyError::QueueFull,
                TrySendError::Closed(_) => NotifyError::Closed,
            }
        })
    }

    pub fn stats(&self) -> DispatchStats {
        DispatchStats {
            delivered: self.counters.delivered.load(Ordering::Relaxed),
            failed: self.counters.failed.load(Ordering::Relaxed),
            dropped: self.counters.dropped.load(Ordering::Relaxed),
        }
    }
}

impl From<DeadlineError<GatewayError>> for NotifyError {
    fn from(error: DeadlineError<GatewayError>) -> Self {
        match error {
            DeadlineError::Elapsed(_) => NotifyError::TimedOut,
            DeadlineError::Failed(error) => NotifyError::Failed(error.to_string()),
        }
    }
}

async fn deliver(
    gateway: Arc<dyn NotificationGateway>,
    mut receiver: mpsc::Receiver<Notification>,
    timeout: Duration,
    counters: Arc<Counters>,
) {
    while let Some(notification) = receiver.recv().await {
        let sent = with_deadline(
            timeout,
            gateway.send(&notification.destination, &notification.body),
        )
        .await
        .map_err(NotifyError::from);

        match sent {
            Ok(()) => {
                counters.delivered.fetch_add(1, Ordering::Relaxed);
                info!("notification delivered");
            }
            Err(error) => {
                counters.failed.fetch_add(1, Ordering::Relaxed);
                warn!(%error, "notification failed");
            }
        }
    }

    debug!("notification queue closed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::gateways::notification::mock::NotificationGatewayImpl;

    fn welcome() -> Notification {
        Notification::welcome("+27821234567", "Thandi")
    }

    #[tokio::test]
    async fn test_delivers_queued_notifications() {
        let gateway = Arc::new(NotificationGatewayImpl::default());
        let (dispatcher, worker) =
            NotificationDispatcher::spawn(gateway.clone(), 8, Duration::from_secs(1));

        dispatcher.dispatch(welcome()).unwrap();

        let counters = dispatcher.counters.clone();
        drop(dispatcher);
        worker.await.unwrap();

        assert_eq!(gateway.messages().await.len(), 1);
        assert_eq!(counters.delivered.load(Ordering::Relaxed), 1);
        assert_eq!(counters.failed.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn test_failures_are_counted_not_raised() {
        let gateway = Arc::new(NotificationGatewayImpl::failing());
        let (dispatcher, worker) =
            NotificationDispatcher::spawn(gateway.clone(), 8, Duration::from_secs(1));

        assert!(dispatcher.dispatch(welcome()).is_ok());
        assert!(dispatcher.dispatch(welcome()).is_ok());

        let counters = dispatcher.counters.clone();
        drop(dispatcher);
        worker.await.unwrap();

        assert_eq!(gateway.messages().await.len(), 2);
        assert_eq!(counters.failed.load(Ordering::Relaxed), 2);
        assert_eq!(counters.delivered.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn test_slow_gateway_times_out() {
        let gateway = Arc::new(NotificationGatewayImpl {
            delay: Some(Duration::from_millis(500)),
            ..Default::default()
        });
        let (dispatcher, worker) =
            NotificationDispatcher::spawn(gateway, 8, Duration::from_millis(20));

        dispatcher.dispatch(welcome()).unwrap();

        let counters = dispatcher.counters.clone();
        drop(dispatcher);
        worker.await.unwrap();

        assert_eq!(counters.failed.load(Ordering::Relaxed), 1);
    }

    #[tokio::test]
    async fn test_full_queue_drops_notification() {
        let gateway = Arc::new(NotificationGatewayImpl {
            delay: Some(Duration::from_millis(200)),
            ..Default::default()
        });
        let (dispatcher, worker) =
            NotificationDispatcher::spawn(gateway, 1, Duration::from_secs(1));

        // Current-thread runtime: the worker has not polled yet, so the single slot fills up.
        dispatcher.dispatch(welcome()).unwrap();
        assert_eq!(dispatcher.dispatch(welcome()), Err(NotifyError::QueueFull));
        assert_eq!(dispatcher.stats().dropped, 1);

        drop(dispatcher);
        worker.await.unwrap();
    }
}
