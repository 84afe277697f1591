//! Notifier trait for delivering status messages

use async_trait::async_trait;

/// Trait for sending plain-text notifications to a fixed destination
#[async_trait]
pub trait Notifier: Send + Sync + std::fmt::Debug {
    /// Get the notifier type name (e.g. "telegram")
    fn type_name(&self) -> &str;

    /// Send `text` to the destination
    async fn send_message(&self, text: &str) -> crate::Result<()>;
}

/// Deliver `text`, logging the outcome. Delivery failures never propagate.
pub async fn notify(notifier: &dyn Notifier, text: &str) {
    match notifier.send_message(text).await {
        Ok(()) => tracing::info!("Sent via '{}': {}", notifier.type_name(), text),
        Err(e) => tracing::error!(
            "Failed to send message via '{}': {}",
            notifier.type_name(),
            e
        ),
    }
}
