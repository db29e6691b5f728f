use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::DeliveryChannel;
use crate::sink::NotifySink;

/// Simulated on-screen popup. Displays the rendered text as-is; there is no
/// destination to configure.
pub struct PopupChannel {
    sink: Arc<dyn NotifySink>,
}

impl PopupChannel {
    pub fn new(sink: Arc<dyn NotifySink>) -> Self {
        Self { sink }
    }
}

#[async_trait]
impl DeliveryChannel for PopupChannel {
    fn name(&self) -> &'static str {
        "popup"
    }

    async fn deliver(&self, text: &str) -> anyhow::Result<()> {
        debug!("Displaying popup notification");
        self.sink.write(text);
        Ok(())
    }
}
