//! Short-lived toasts shown over the bottom of the screen

use std::time::{Duration, Instant};

use super::commands::NotificationLevel;

const DEFAULT_TTL: Duration = Duration::from_secs(5);
const MAX_NOTIFICATIONS: usize = 20;

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: usize,
    pub timestamp: Instant,
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
    pub ttl: Duration,
}

impl Notification {
    fn is_live(&self, now: Instant) -> bool {
        now.duration_since(self.timestamp) < self.ttl
    }
}

#[derive(Debug, Default)]
pub struct NotificationManager {
    notifications: Vec<Notification>,
    next_id: usize,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) -> usize {
        self.push(NotificationLevel::Error, title.into(), message.into())
    }

    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>) -> usize {
        self.push(NotificationLevel::Success, title.into(), message.into())
    }

    pub fn warning(&mut self, title: impl Into<String>, message: impl Into<String>) -> usize {
        self.push(NotificationLevel::Warning, title.into(), message.into())
    }

    pub fn info(&mut self, title: impl Into<String>, message: impl Into<String>) -> usize {
        self.push(NotificationLevel::Info, title.into(), message.into())
    }

    pub fn push(&mut self, level: NotificationLevel, title: String, message: String) -> usize {
        let id = self.next_id;
        self.next_id += 1;

        self.notifications.push(Notification {
            id,
            timestamp: Instant::now(),
            level,
            title,
            message,
            ttl: DEFAULT_TTL,
        });

        if self.notifications.len() > MAX_NOTIFICATIONS {
            self.notifications.remove(0);
        }

        id
    }

    /// Newest first
    pub fn get_active(&self) -> Vec<&Notification> {
        let now = Instant::now();
        self.notifications
            .iter()
            .rev()
            .filter(|n| n.is_live(now))
            .collect()
    }

    pub fn cleanup_expired(&mut self) {
        let now = Instant::now();
        self.notifications.retain(|n| n.is_live(now));
    }
}
