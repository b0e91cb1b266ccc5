//! Status message management for TUI views.

use std::time::{Duration, Instant};

/// Manages temporary status messages with optional auto-clear.
///
/// Used for short notices such as "PEM copied to clipboard".
#[derive(Debug, Clone, Default)]
pub struct StatusMessage {
    message: Option<String>,
    set_at: Option<Instant>,
    /// Auto-clear duration (None = no auto-clear)
    auto_clear_after: Option<Duration>,
}

impl StatusMessage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a status message manager with auto-clear after duration.
    #[must_use]
    pub const fn with_auto_clear(duration: Duration) -> Self {
        Self {
            message: None,
            set_at: None,
            auto_clear_after: Some(duration),
        }
    }

    pub fn set(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.set_at = Some(Instant::now());
    }

    pub fn clear(&mut self) {
        self.message = None;
        self.set_at = None;
    }

    /// Drop the message once its auto-clear duration has passed.
    pub fn expire(&mut self) {
        if let (Some(set_at), Some(duration)) = (self.set_at, self.auto_clear_after) {
            if set_at.elapsed() >= duration {
                self.clear();
            }
        }
    }

    /// Current message without checking auto-clear.
    #[must_use]
    pub fn peek(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub const fn has_message(&self) -> bool {
        self.message.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_status_message_set_clear() {
        let mut status = StatusMessage::new();
        assert!(!status.has_message());

        status.set("Copied");
        assert_eq!(status.peek(), Some("Copied"));

        status.clear();
        assert!(status.peek().is_none());
    }

    #[test]
    fn test_status_message_auto_clear() {
        let mut status = StatusMessage::with_auto_clear(Duration::from_millis(30));
        status.set("Auto clear message");
        status.expire();
        assert!(status.has_message());

        thread::sleep(Duration::from_millis(40));
        status.expire();
        assert!(!status.has_message());
    }

    #[test]
    fn test_no_auto_clear_by_default() {
        let mut status = StatusMessage::new();
        status.set("Sticky");
        status.expire();
        assert!(status.has_message());
    }
}
