use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use herald_common::HeraldError;

use super::DeliveryChannel;
use crate::sink::NotifySink;

/// Simulated email delivery to a fixed address.
pub struct EmailChannel {
    address: String,
    sink: Arc<dyn NotifySink>,
}

impl std::fmt::Debug for EmailChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailChannel")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

impl EmailChannel {
    /// The address must be non-empty and contain an `@`.
    pub fn new(
        address: impl Into<String>,
        sink: Arc<dyn NotifySink>,
    ) -> Result<Self, HeraldError> {
        let address = address.into().trim().to_string();
        if address.is_empty() {
            return Err(HeraldError::InvalidDestination(
                "email address is empty".to_string(),
            ));
        }
        if !address.contains('@') {
            return Err(HeraldError::InvalidDestination(format!(
                "email address '{address}' has no '@'"
            )));
        }
        Ok(Self { address, sink })
    }
}

#[async_trait]
impl DeliveryChannel for EmailChannel {
    fn name(&self) -> &'static str {
        "email"
    }

    async fn deliver(&self, text: &str) -> anyhow::Result<()> {
        debug!(to = %self.address, "Delivering email notification");
        self.sink.write(&format!(
            "Sending email Notification to: {}\n{}",
            self.address, text
        ));
        Ok(())
    }
}
