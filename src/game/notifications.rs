//! Transient user-facing messages
//!
//! Each notification gets its own expiry when it is posted. Expiry is never
//! cancelled or extended, and nothing in the game waits on it.

/// Visual category of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub text: String,
    pub style: MessageStyle,
    pub expires_at_ms: u64,
}

/// Live notifications, oldest first
#[derive(Debug, Clone)]
pub struct Notifications {
    items: Vec<Notification>,
    next_id: u64,
    ttl_ms: u64,
}

impl Notifications {
    #[must_use]
    pub fn new(ttl_ms: u64) -> Self {
        Self {
            items: Vec::new(),
            next_id: 0,
            ttl_ms,
        }
    }

    /// Post a message; returns its id
    pub fn push(&mut self, now_ms: u64, text: impl Into<String>, style: MessageStyle) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            text: text.into(),
            style,
            expires_at_ms: now_ms.saturating_add(self.ttl_ms),
        });
        id
    }

    /// Drop everything that has expired by `now_ms`
    pub fn expire(&mut self, now_ms: u64) {
        self.items.retain(|n| n.expires_at_ms > now_ms);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Notification> {
        self.items.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifications_expire_independently() {
        let mut notifications = Notifications::new(2500);
        let first = notifications.push(0, "Not enough letters", MessageStyle::Error);
        let second = notifications.push(1000, "Not in word list", MessageStyle::Error);
        assert_ne!(first, second);

        notifications.expire(2499);
        assert_eq!(notifications.items().len(), 2);

        notifications.expire(2500);
        assert_eq!(notifications.items().len(), 1);
        assert_eq!(notifications.items()[0].id, second);

        notifications.expire(3500);
        assert!(notifications.items().is_empty());
    }

    #[test]
    fn ids_keep_increasing_after_clear() {
        let mut notifications = Notifications::new(100);
        let a = notifications.push(0, "a", MessageStyle::Info);
        notifications.clear();
        let b = notifications.push(0, "b", MessageStyle::Success);
        assert!(b > a);
        assert_eq!(notifications.latest().map(|n| n.text.as_str()), Some("b"));
    }
}
