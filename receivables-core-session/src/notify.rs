use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

/// User-facing message raised by a session operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// Sink for user-facing notifications (toasts)
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);

    fn success(&self, message: &str) {
        self.notify(Notification {
            level: NotificationLevel::Success,
            message: message.to_string(),
        });
    }

    fn error(&self, message: &str) {
        self.notify(Notification {
            level: NotificationLevel::Error,
            message: message.to_string(),
        });
    }

    fn info(&self, message: &str) {
        self.notify(Notification {
            level: NotificationLevel::Info,
            message: message.to_string(),
        });
    }
}

/// Writes notifications to the tracing log only
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Error => tracing::error!(text = %notification.message, "notification"),
            NotificationLevel::Success | NotificationLevel::Info => {
                tracing::info!(text = %notification.message, "notification")
            }
        }
    }
}

/// Holds the toast currently on screen; a newer toast replaces the older one
pub struct ToastNotifier {
    current: watch::Sender<Option<Notification>>,
}

impl ToastNotifier {
    pub fn new() -> Self {
        let (current, _) = watch::channel(None);
        Self { current }
    }

    pub fn current(&self) -> Option<Notification> {
        self.current.borrow().clone()
    }

    /// Dropping the receiver unsubscribes
    pub fn subscribe(&self) -> watch::Receiver<Option<Notification>> {
        self.current.subscribe()
    }

    pub fn dismiss(&self) {
        self.current.send_replace(None);
    }
}

impl Default for ToastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        self.current.send_replace(Some(notification));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_toast_replaces_and_notifies() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let toasts = ToastNotifier::new();
        let mut rx = toasts.subscribe();

        toasts.success("Customer added successfully.");
        rx.changed().await?;
        assert_eq!(
            rx.borrow_and_update().as_ref().map(|n| n.level),
            Some(NotificationLevel::Success)
        );

        toasts.error("Failed to add customer.");
        assert_eq!(toasts.current().unwrap().message, "Failed to add customer.");

        toasts.dismiss();
        assert!(toasts.current().is_none());
        Ok(())
    }
}
