use async_trait::async_trait;

use super::DeliveryChannel;

/// No-op delivery channel for wiring without configured destinations and for
/// testing.
pub struct NoopChannel;

#[async_trait]
impl DeliveryChannel for NoopChannel {
    fn name(&self) -> &'static str {
        "noop"
    }

    async fn deliver(&self, _text: &str) -> anyhow::Result<()> {
        Ok(())
    }
}
