use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::content::Render;
use crate::dispatcher::Subscriber;
use crate::sink::NotifySink;

/// Subscriber that records every notification to the sink under a fixed
/// header line.
pub struct LogSubscriber {
    sink: Arc<dyn NotifySink>,
}

impl LogSubscriber {
    pub fn new(sink: Arc<dyn NotifySink>) -> Self {
        Self { sink }
    }
}

#[async_trait]
impl Subscriber for LogSubscriber {
    async fn on_notify(&self, content: &dyn Render) -> anyhow::Result<()> {
        debug!("Logging notification");
        self.sink
            .write(&format!("Logging New Notification:\n{}", content.render()));
        Ok(())
    }
}
