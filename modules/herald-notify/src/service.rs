use std::sync::Arc;

use tokio::sync::Mutex;

use crate::content::Render;
use crate::dispatcher::{Dispatcher, Subscriber};

/// Process-wide entry point for sending notifications.
///
/// Constructed once during bootstrap and shared via [`Arc`]; there is no
/// hidden global instance. The dispatcher sits behind one coarse mutex, so
/// concurrent sends serialize and each fan-out completes before the next
/// begins.
pub struct NotificationService {
    dispatcher: Mutex<Dispatcher>,
}

impl NotificationService {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher: Mutex::new(dispatcher),
        }
    }

    /// Set `content` as the current notification and fan it out to every
    /// subscriber before returning.
    pub async fn send_notification(&self, content: impl Render + 'static) -> anyhow::Result<()> {
        self.dispatcher
            .lock()
            .await
            .set_notification(Arc::new(content))
            .await
    }

    /// Register a subscriber. Intended for bootstrap-time wiring.
    pub async fn subscribe(&self, subscriber: Arc<dyn Subscriber>) {
        self.dispatcher.lock().await.add_subscriber(subscriber);
    }

    /// Remove a previously registered subscriber.
    pub async fn unsubscribe(&self, subscriber: &Arc<dyn Subscriber>) {
        self.dispatcher.lock().await.remove_subscriber(subscriber);
    }

    /// Handle to the most recently sent notification, if any.
    pub async fn last_notification(&self) -> Option<Arc<dyn Render>> {
        self.dispatcher.lock().await.current().cloned()
    }
}
