//! Transient toast notifications

use super::timer::Countdown;
use std::time::{Duration, Instant};

/// How long a notification stays up unless dismissed
pub const NOTIFICATION_DURATION: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Holds at most one notification and its auto-dismiss countdown.
///
/// Raising a new notification replaces the previous countdown, so a
/// superseded countdown can never hide the newer toast.
#[derive(Debug, Default)]
pub struct Notifier {
    current: Option<Notification>,
    countdown: Option<Countdown>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a notification, replacing any visible one
    pub fn raise(&mut self, kind: NotificationKind, message: impl Into<String>, now: Instant) {
        let notification = Notification {
            kind,
            message: message.into(),
        };
        tracing::debug!(?kind, message = %notification.message, "notification raised");
        self.current = Some(notification);
        self.countdown = Some(Countdown::start(now, NOTIFICATION_DURATION));
    }

    pub fn success(&mut self, message: impl Into<String>, now: Instant) {
        self.raise(NotificationKind::Success, message, now);
    }

    pub fn error(&mut self, message: impl Into<String>, now: Instant) {
        self.raise(NotificationKind::Error, message, now);
    }

    /// Close the notification now, cancelling its countdown
    pub fn dismiss(&mut self) {
        self.current = None;
        if let Some(countdown) = self.countdown.as_mut() {
            countdown.cancel();
        }
    }

    /// Auto-dismiss once the countdown runs out
    pub fn tick(&mut self, now: Instant) {
        if self
            .countdown
            .as_ref()
            .is_some_and(|countdown| countdown.is_expired(now))
        {
            self.current = None;
            self.countdown = None;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Progress bar value: 100 when raised, 0 when it is about to close
    pub fn remaining_percent(&self, now: Instant) -> f64 {
        match (&self.current, &self.countdown) {
            (Some(_), Some(countdown)) => countdown.remaining_percent(now),
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_starts_hidden() {
        let notifier = Notifier::new();
        assert!(!notifier.is_visible());
        assert!(notifier.current().is_none());
        assert_eq!(notifier.remaining_percent(Instant::now()), 0.0);
    }

    #[test]
    fn test_raise_shows_notification() {
        let t0 = Instant::now();
        let mut notifier = Notifier::new();
        notifier.error("falhou", t0);
        assert_eq!(
            notifier.current(),
            Some(&Notification {
                kind: NotificationKind::Error,
                message: "falhou".to_string()
            })
        );
        assert_eq!(notifier.remaining_percent(t0), 100.0);
    }

    #[test]
    fn test_auto_dismiss_after_duration() {
        let t0 = Instant::now();
        let mut notifier = Notifier::new();
        notifier.success("ok", t0);

        notifier.tick(t0 + Duration::from_millis(4999));
        assert!(notifier.is_visible());

        notifier.tick(t0 + NOTIFICATION_DURATION);
        assert!(!notifier.is_visible());
    }

    #[test]
    fn test_new_notification_restarts_countdown() {
        let t0 = Instant::now();
        let mut notifier = Notifier::new();
        notifier.error("primeira", t0);
        notifier.success("segunda", t0 + Duration::from_millis(3000));

        // The first countdown would have fired here
        notifier.tick(t0 + NOTIFICATION_DURATION);
        assert!(notifier.is_visible());
        assert_eq!(notifier.current().unwrap().message, "segunda");
        assert_eq!(notifier.current().unwrap().kind, NotificationKind::Success);

        notifier.tick(t0 + Duration::from_millis(8000));
        assert!(!notifier.is_visible());
    }

    #[test]
    fn test_manual_dismiss_hides_immediately() {
        let t0 = Instant::now();
        let mut notifier = Notifier::new();
        notifier.error("x", t0);
        notifier.dismiss();
        assert!(!notifier.is_visible());
        assert!(notifier.countdown.as_ref().unwrap().is_cancelled());
        assert_eq!(notifier.remaining_percent(t0), 0.0);

        // Nothing left to fire
        notifier.tick(t0 + NOTIFICATION_DURATION);
        assert!(!notifier.is_visible());
    }

    #[test]
    fn test_dismiss_when_hidden_is_noop() {
        let mut notifier = Notifier::new();
        notifier.dismiss();
        assert!(!notifier.is_visible());
    }

    #[test]
    fn test_progress_decreases_over_lifetime() {
        let t0 = Instant::now();
        let mut notifier = Notifier::new();
        notifier.success("ok", t0);
        let early = notifier.remaining_percent(t0 + Duration::from_millis(1000));
        let late = notifier.remaining_percent(t0 + Duration::from_millis(4000));
        assert!(early > late);
        assert!((early - 80.0).abs() < 1e-9);
    }
}
