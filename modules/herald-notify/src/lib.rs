//! Composable notification pipeline: renderable content wrapped by
//! presentation decorators, fanned out through an observer dispatcher to
//! channel-specific delivery strategies.
//!
//! Delivery is simulated: every channel formats one text block and writes it
//! to a [`NotifySink`]. No network I/O, no retries, no persistence.

pub mod channel;
pub mod content;
pub mod dispatcher;
pub mod engine;
pub mod logger;
pub mod service;
pub mod sink;

pub use channel::{DeliveryChannel, EmailChannel, NoopChannel, PopupChannel, SmsChannel};
pub use content::{PlainText, Render, RenderExt, Signed, Timestamped};
pub use dispatcher::{Dispatcher, Subscriber};
pub use engine::DeliveryEngine;
pub use logger::LogSubscriber;
pub use service::NotificationService;
pub use sink::{ConsoleSink, MemorySink, NotifySink};
