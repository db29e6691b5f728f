use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use herald_common::HeraldError;

use super::DeliveryChannel;
use crate::sink::NotifySink;

/// Simulated SMS delivery to a fixed phone number.
pub struct SmsChannel {
    number: String,
    sink: Arc<dyn NotifySink>,
}

impl std::fmt::Debug for SmsChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmsChannel")
            .field("number", &self.number)
            .finish_non_exhaustive()
    }
}

impl SmsChannel {
    /// The phone number must be non-empty.
    pub fn new(number: impl Into<String>, sink: Arc<dyn NotifySink>) -> Result<Self, HeraldError> {
        let number = number.into().trim().to_string();
        if number.is_empty() {
            return Err(HeraldError::InvalidDestination(
                "phone number is empty".to_string(),
            ));
        }
        Ok(Self { number, sink })
    }
}

#[async_trait]
impl DeliveryChannel for SmsChannel {
    fn name(&self) -> &'static str {
        "sms"
    }

    async fn deliver(&self, text: &str) -> anyhow::Result<()> {
        debug!(to = %self.number, "Delivering SMS notification");
        self.sink.write(&format!(
            "Sending SMS Notification to: {}\n{}",
            self.number, text
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    #[test]
    fn empty_number_is_rejected() {
        let err = SmsChannel::new(" ", Arc::new(MemorySink::new())).unwrap_err();
        assert!(matches!(err, HeraldError::InvalidDestination(_)));
    }

    #[tokio::test]
    async fn deliver_writes_the_addressed_block() {
        let sink = Arc::new(MemorySink::new());
        let channel = SmsChannel::new("+919876543210", sink.clone()).unwrap();

        channel.deliver("hello").await.unwrap();

        assert_eq!(
            sink.blocks(),
            vec!["Sending SMS Notification to: +919876543210\nhello"]
        );
    }
}
