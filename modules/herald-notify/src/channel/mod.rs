use async_trait::async_trait;

pub mod email;
pub mod noop;
pub mod popup;
pub mod sms;

pub use email::EmailChannel;
pub use noop::NoopChannel;
pub use popup::PopupChannel;
pub use sms::SmsChannel;

/// Pluggable delivery strategy for rendered notification text.
#[async_trait]
pub trait DeliveryChannel: Send + Sync {
    /// Short channel identifier used in diagnostics.
    fn name(&self) -> &'static str;

    /// Format and transmit one rendered notification.
    async fn deliver(&self, text: &str) -> anyhow::Result<()>;
}
