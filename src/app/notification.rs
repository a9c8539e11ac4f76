// ABOUTME: Notification center for displaying transient toast messages
// Owns at most one active notification; drives its lifecycle from the app tick

use std::time::{Duration, Instant};

/// Default time a notification stays fully visible before fading.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(4000);
/// Fixed length of the fade-out transition.
pub const FADE_DURATION: Duration = Duration::from_millis(300);

/// Category of a notification, controlling its icon and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

/// Lifecycle of a displayed notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Fully visible, counting down toward auto-dismissal.
    Visible,
    /// Fading out; removed once the fade window elapses.
    Fading,
}

/// A single transient message shown to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub duration: Duration,
    created_at: Instant,
    phase: NotificationPhase,
    fade_started: Option<Instant>,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind, duration: Duration) -> Self {
        Self {
            message: message.into(),
            kind,
            duration,
            created_at: Instant::now(),
            phase: NotificationPhase::Visible,
            fade_started: None,
        }
    }

    pub fn phase(&self) -> NotificationPhase {
        self.phase
    }

    /// Whether the visible window has run out and the fade should begin.
    fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    fn begin_fade(&mut self) {
        if self.phase == NotificationPhase::Visible {
            self.phase = NotificationPhase::Fading;
            self.fade_started = Some(Instant::now());
        }
    }

    fn fade_finished(&self, fade_duration: Duration) -> bool {
        match self.fade_started {
            Some(started) => started.elapsed() >= fade_duration,
            None => false,
        }
    }
}

/// Presents one notification at a time. A new notification replaces the
/// current one outright; auto-dismissal and manual dismissal both go through
/// the fade phase, and only `Visible` notifications are auto-dismissed, so
/// the two triggers cannot race into a double removal.
#[derive(Debug)]
pub struct NotificationCenter {
    current: Option<Notification>,
    default_duration: Duration,
    fade_duration: Duration,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            current: None,
            default_duration: DEFAULT_DURATION,
            fade_duration: FADE_DURATION,
        }
    }

    /// Override timing policy; used by tests.
    pub fn with_durations(default_duration: Duration, fade_duration: Duration) -> Self {
        Self {
            current: None,
            default_duration,
            fade_duration,
        }
    }

    /// Show a notification with the default duration, replacing any current
    /// one immediately.
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.notify_for(message, kind, self.default_duration);
    }

    /// Show a notification with an explicit duration. Replacing the current
    /// notification drops it together with its pending auto-dismissal; the
    /// old deadline can never fire against the new notification.
    pub fn notify_for(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        duration: Duration,
    ) {
        self.current = Some(Notification::new(message, kind, duration));
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Success);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Error);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Info);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Warning);
    }

    /// Manually dismiss the current notification. Starts the fade; a
    /// notification already fading is left alone.
    pub fn dismiss(&mut self) {
        if let Some(ref mut notification) = self.current {
            notification.begin_fade();
        }
    }

    /// Advance the lifecycle: expire visible notifications into the fade,
    /// remove faded ones.
    pub fn tick(&mut self) {
        if let Some(ref mut notification) = self.current {
            if notification.phase == NotificationPhase::Visible && notification.is_expired() {
                notification.begin_fade();
            }
            if notification.fade_finished(self.fade_duration) {
                self.current = None;
            }
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}
