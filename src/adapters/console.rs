use crate::core::{Acknowledgement, Notification, Notifier};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::io::Write;

/// Writes notifications to stdout (predictions) or stderr (errors).
/// There is nobody to dismiss them, so every notification counts as acknowledged.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn render(notification: &Notification) -> String {
        format!("{}: {}", notification.kind.title(), notification.message)
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify(&self, notification: &Notification) -> Result<Acknowledgement> {
        let line = Self::render(notification);
        if notification.kind.is_error() {
            writeln!(std::io::stderr(), "❌ {}", line)?;
        } else {
            writeln!(std::io::stdout(), "✅ {}", line)?;
        }
        Ok(Acknowledgement::Acknowledged)
    }
}
