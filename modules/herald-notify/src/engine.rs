use async_trait::async_trait;
use tracing::debug;

use crate::channel::DeliveryChannel;
use crate::content::Render;
use crate::dispatcher::Subscriber;

/// Subscriber that forwards each notification to its delivery channels.
///
/// The content is rendered once per notification; channels receive the same
/// text in registration order. A channel failure aborts the remaining
/// deliveries and surfaces to the dispatcher.
pub struct DeliveryEngine {
    channels: Vec<Box<dyn DeliveryChannel>>,
}

impl DeliveryEngine {
    pub fn new() -> Self {
        Self {
            channels: Vec::new(),
        }
    }

    /// Append a channel. Channels cannot be removed once registered.
    pub fn add_channel(&mut self, channel: impl DeliveryChannel + 'static) {
        self.channels.push(Box::new(channel));
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }
}

impl Default for DeliveryEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Subscriber for DeliveryEngine {
    async fn on_notify(&self, content: &dyn Render) -> anyhow::Result<()> {
        let text = content.render();
        for channel in &self.channels {
            debug!(channel = channel.name(), "Dispatching to channel");
            channel.deliver(&text).await?;
        }
        Ok(())
    }
}
