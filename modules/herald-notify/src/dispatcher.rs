//! Observer dispatch: the current notification plus an ordered subscriber
//! list, notified synchronously on every update.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::content::Render;

/// Receives each newly set notification.
#[async_trait]
pub trait Subscriber: Send + Sync {
    async fn on_notify(&self, content: &dyn Render) -> anyhow::Result<()>;
}

/// Holds the current notification and the subscriber list.
///
/// Subscribers are shared handles; whoever constructs them keeps ownership.
/// Registration order is notification order.
pub struct Dispatcher {
    current: Option<Arc<dyn Render>>,
    subscribers: Vec<Arc<dyn Subscriber>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            current: None,
            subscribers: Vec::new(),
        }
    }

    /// Append a subscriber. Duplicate registration is allowed and results in
    /// duplicate notification.
    pub fn add_subscriber(&mut self, subscriber: Arc<dyn Subscriber>) {
        self.subscribers.push(subscriber);
    }

    /// Remove the first registration pointing at the same allocation.
    /// No-op when the subscriber was never registered.
    pub fn remove_subscriber(&mut self, subscriber: &Arc<dyn Subscriber>) {
        if let Some(pos) = self
            .subscribers
            .iter()
            .position(|s| Arc::ptr_eq(s, subscriber))
        {
            self.subscribers.remove(pos);
        }
    }

    /// Store `content` as the current notification, then notify every
    /// subscriber in registration order. All subscriber side effects complete
    /// before this returns.
    ///
    /// A subscriber failure aborts the sweep for the remaining subscribers.
    pub async fn set_notification(&mut self, content: Arc<dyn Render>) -> anyhow::Result<()> {
        self.current = Some(Arc::clone(&content));
        debug!(
            subscribers = self.subscribers.len(),
            "Notifying subscribers"
        );
        for subscriber in &self.subscribers {
            subscriber.on_notify(content.as_ref()).await?;
        }
        Ok(())
    }

    /// The most recently set notification, if any.
    pub fn current(&self) -> Option<&Arc<dyn Render>> {
        self.current.as_ref()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
