use std::time::{Duration, Instant};

/// A transient notification shown in the top-right corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn expires_at(&self) -> Instant {
        self.created_at + self.duration
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at()
    }

    /// Fraction of the display time still left, from 1.0 down to 0.0.
    pub fn remaining_ratio(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.created_at);
        let remaining = self.duration.saturating_sub(elapsed);
        (remaining.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }
}

/// Stack of toasts, oldest first. Each one expires on its own clock.
#[derive(Debug, Default)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastStack {
    pub const fn new() -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
        }
    }

    pub fn notify(&mut self, message: impl Into<String>, duration: Duration, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            created_at: now,
            duration,
        });
        id
    }

    /// Drops every toast whose time is up and returns how many went.
    pub fn expire(&mut self, now: Instant) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|toast| !toast.is_expired(now));
        before - self.toasts.len()
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        before != self.toasts.len()
    }

    pub fn dismiss_latest(&mut self) -> bool {
        self.toasts.pop().is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

pub fn high_risk_message(city: &str) -> String {
    format!("⚠️ High Risk Alert in {city}!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_independently() {
        let start = Instant::now();
        let mut stack = ToastStack::new();
        stack.notify("first", Duration::from_millis(1000), start);
        stack.notify("second", Duration::from_millis(3000), start + Duration::from_millis(500));

        assert_eq!(stack.expire(start + Duration::from_millis(999)), 0);
        assert_eq!(stack.expire(start + Duration::from_millis(1000)), 1);

        let left: Vec<_> = stack.iter().map(|toast| toast.message.as_str()).collect();
        assert_eq!(left, vec!["second"]);

        assert_eq!(stack.expire(start + Duration::from_millis(3500)), 1);
        assert!(stack.is_empty());
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let now = Instant::now();
        let mut stack = ToastStack::new();
        let first = stack.notify("a", Duration::from_secs(5), now);
        stack.notify("b", Duration::from_secs(5), now);

        assert!(stack.dismiss(first));
        assert!(!stack.dismiss(first));
        assert_eq!(stack.len(), 1);

        assert!(stack.dismiss_latest());
        assert!(!stack.dismiss_latest());
    }

    #[test]
    fn remaining_ratio_counts_down() {
        let now = Instant::now();
        let toast = Toast {
            id: 0,
            message: String::new(),
            created_at: now,
            duration: Duration::from_millis(4000),
        };

        assert!((toast.remaining_ratio(now) - 1.0).abs() < 1e-9);
        assert!((toast.remaining_ratio(now + Duration::from_millis(1000)) - 0.75).abs() < 1e-9);
        assert!(toast.remaining_ratio(now + Duration::from_secs(10)).abs() < 1e-9);
    }
}
