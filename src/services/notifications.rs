//! Toast notifications
//!
//! Toasts are transient advisory messages shown over the main window. When
//! desktop notifications are enabled each toast is also handed to the OS.

use notify_rust::{Notification, Timeout};
use std::time::{Duration, Instant};

/// A transient notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub shown_at: Instant,
}

/// Toasts currently on screen, oldest first
pub struct ToastQueue {
    toasts: Vec<Toast>,
    lifetime: Duration,
    desktop_mirror: bool,
}

impl ToastQueue {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            lifetime,
            desktop_mirror: false,
        }
    }

    /// Also show every toast as a desktop notification
    pub fn with_desktop_mirror(mut self, enabled: bool) -> Self {
        self.desktop_mirror = enabled;
        self
    }

    /// Show a toast
    pub fn push(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.push_at(title, description, Instant::now());
    }

    pub fn push_at(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        now: Instant,
    ) {
        let toast = Toast {
            title: title.into(),
            description: description.into(),
            shown_at: now,
        };
        tracing::info!("Toast: {} ({})", toast.title, toast.description);

        if self.desktop_mirror {
            if let Err(e) = notify_desktop(&toast.title, &toast.description, self.lifetime) {
                tracing::warn!("Desktop notification failed: {}", e);
            }
        }

        self.toasts.push(toast);
    }

    /// Drop toasts that have been visible for longer than the lifetime
    pub fn prune(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.shown_at) < lifetime);
    }

    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn dismiss(&mut self, index: usize) {
        if index < self.toasts.len() {
            self.toasts.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}

/// Send a desktop notification mirroring a toast
fn notify_desktop(title: &str, body: &str, lifetime: Duration) -> anyhow::Result<()> {
    let millis = u32::try_from(lifetime.as_millis()).unwrap_or(u32::MAX);

    Notification::new()
        .appname("Messenger")
        .summary(title)
        .body(body)
        .timeout(Timeout::Milliseconds(millis))
        .show()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_latest() {
        let mut toasts = ToastQueue::new(Duration::from_secs(4));
        assert!(toasts.visible().last().is_none());

        toasts.push("Настройки сохранены", "Ваши настройки приватности обновлены");
        let latest = toasts.visible().last().unwrap();
        assert_eq!(latest.title, "Настройки сохранены");
        assert_eq!(latest.description, "Ваши настройки приватности обновлены");
    }

    #[test]
    fn test_prune_expires_old_toasts() {
        let start = Instant::now();
        let mut toasts = ToastQueue::new(Duration::from_secs(4));
        toasts.push_at("first", "", start);
        toasts.push_at("second", "", start + Duration::from_secs(3));

        toasts.prune(start + Duration::from_secs(2));
        assert_eq!(toasts.visible().len(), 2);

        toasts.prune(start + Duration::from_secs(5));
        assert_eq!(toasts.visible().len(), 1);
        assert_eq!(toasts.visible()[0].title, "second");

        toasts.prune(start + Duration::from_secs(10));
        assert!(toasts.visible().is_empty());
    }

    #[test]
    fn test_dismiss_out_of_range_is_noop() {
        let mut toasts = ToastQueue::new(Duration::from_secs(4));
        toasts.push("a", "b");
        toasts.dismiss(3);
        assert_eq!(toasts.visible().len(), 1);
        toasts.dismiss(0);
        assert!(toasts.visible().is_empty());
    }
}
