use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use herald_common::Config;
use herald_notify::{
    ConsoleSink, DeliveryEngine, Dispatcher, EmailChannel, LogSubscriber, NoopChannel,
    NotificationService, NotifySink, PlainText, PopupChannel, RenderExt, SmsChannel,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("herald=info".parse()?)
                .add_directive("herald_common=info".parse()?)
                .add_directive("herald_notify=info".parse()?),
        )
        .init();

    info!("Herald starting...");

    // Load config
    let config = Config::from_env();
    config.log_redacted();

    let sink: Arc<dyn NotifySink> = Arc::new(ConsoleSink);

    // Build delivery channels from config; fall back to a no-op channel so
    // the engine still completes a sweep when nothing is configured.
    let mut engine = DeliveryEngine::new();
    if let Some(address) = &config.email_to {
        engine.add_channel(EmailChannel::new(address.as_str(), Arc::clone(&sink))?);
    }
    if let Some(number) = &config.sms_to {
        engine.add_channel(SmsChannel::new(number.as_str(), Arc::clone(&sink))?);
    }
    if config.popup_enabled {
        engine.add_channel(PopupChannel::new(Arc::clone(&sink)));
    }
    if engine.channel_count() == 0 {
        info!("No delivery channels configured, deliveries are dropped");
        engine.add_channel(NoopChannel);
    }

    // Logger first, engine second: the log block precedes channel output.
    let mut dispatcher = Dispatcher::new();
    dispatcher.add_subscriber(Arc::new(LogSubscriber::new(Arc::clone(&sink))));
    dispatcher.add_subscriber(Arc::new(engine));

    let service = NotificationService::new(dispatcher);

    // Message from CLI args, or a demo message.
    let args: Vec<String> = std::env::args().skip(1).collect();
    let message = if args.is_empty() {
        "Your order has been shipped!".to_string()
    } else {
        args.join(" ")
    };

    let content = PlainText::new(message).timestamped_now();
    match &config.signature {
        Some(signature) => {
            service
                .send_notification(content.signed(signature.as_str()))
                .await?
        }
        None => service.send_notification(content).await?,
    }

    info!("Notification sent");
    Ok(())
}
