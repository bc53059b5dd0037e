//! # Notifications
//!
//! Transient user notifications ("toasts") raised by the providers and NFT
//! operations. Notifications are queued in memory, mirrored to the log, and
//! drained by the front-end (the CLI prints them after each command).

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::fmt;
use std::future::Future;
use tracing::{error, info, warn};
use uuid::Uuid;

/// Oldest notifications are dropped beyond this many.
pub const DEFAULT_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NotificationLevel::Success => "success",
            NotificationLevel::Info => "info",
            NotificationLevel::Warning => "warning",
            NotificationLevel::Error => "error",
        })
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Messages shown while an operation is pending and once it settles.
#[derive(Debug, Clone)]
pub struct ProgressMessages {
    pub pending: String,
    pub success: String,
    pub error: String,
}

/// Notification manager for the application
pub struct NotificationCenter {
    queue: Mutex<VecDeque<Notification>>,
    capacity: usize,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&self, level: NotificationLevel, message: impl Into<String>) {
        let message = message.into();
        match level {
            NotificationLevel::Success | NotificationLevel::Info => info!(%level, "[TOAST] {}", message),
            NotificationLevel::Warning => warn!(%level, "[TOAST] {}", message),
            NotificationLevel::Error => error!(%level, "[TOAST] {}", message),
        }

        let mut queue = self.queue.lock();
        if queue.len() == self.capacity {
            queue.pop_front();
        }
        queue.push_back(Notification {
            id: Uuid::new_v4(),
            level,
            message,
            created_at: Utc::now(),
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NotificationLevel::Success, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(NotificationLevel::Info, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(NotificationLevel::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NotificationLevel::Error, message);
    }

    /// Run `operation`, raising the pending message first and then the
    /// success or error message depending on the outcome.
    pub async fn track<T, E, F>(&self, messages: ProgressMessages, operation: F) -> Result<T, E>
    where
        E: fmt::Display,
        F: Future<Output = Result<T, E>>,
    {
        self.info(messages.pending);
        let result = operation.await;
        match &result {
            Ok(_) => self.success(messages.success),
            Err(e) => {
                error!("{}: {}", messages.error, e);
                self.error(messages.error);
            }
        }
        result
    }

    /// Remove and return everything queued, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.queue.lock().drain(..).collect()
    }

    /// Copy of the queue, oldest first.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.queue.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }

    /// Number of queued notifications at `level`.
    pub fn count(&self, level: NotificationLevel) -> usize {
        self.queue.lock().iter().filter(|n| n.level == level).count()
    }

    /// Whether any queued notification has `level` and exactly `message`.
    pub fn contains(&self, level: NotificationLevel, message: &str) -> bool {
        self.queue
            .lock()
            .iter()
            .any(|n| n.level == level && n.message == message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_bounded() {
        let center = NotificationCenter::with_capacity(2);
        center.info("one");
        center.info("two");
        center.error("three");

        let all = center.drain();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].message, "two");
        assert_eq!(all[1].level, NotificationLevel::Error);
        assert!(center.is_empty());
    }

    #[tokio::test]
    async fn test_track_success_and_error() {
        let center = NotificationCenter::new();
        let messages = ProgressMessages {
            pending: "Minting...".to_string(),
            success: "Minted!".to_string(),
            error: "Failed to mint".to_string(),
        };

        let ok: Result<u8, String> = center.track(messages.clone(), async { Ok(1) }).await;
        assert_eq!(ok.unwrap(), 1);
        assert!(center.contains(NotificationLevel::Info, "Minting..."));
        assert!(center.contains(NotificationLevel::Success, "Minted!"));

        let err: Result<u8, String> = center.track(messages, async { Err("boom".to_string()) }).await;
        assert!(err.is_err());
        assert!(center.contains(NotificationLevel::Error, "Failed to mint"));
        assert_eq!(center.count(NotificationLevel::Success), 1);
    }
}
