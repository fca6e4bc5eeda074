// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A notification carries an i18n key plus interpolation arguments; the text
//! is resolved when the toast is rendered so a language switch applies to
//! toasts already on screen.

use crate::error::{GeolocationError, SubmitError};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Key prefix shared by every submission failure message.
pub const SUBMIT_ERROR_PREFIX: &str = "error-submit-";

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green, 3s duration).
    #[default]
    Success,
    /// Informational message (blue, 3s duration).
    Info,
    /// Warning that doesn't block operation (orange, 5s duration).
    Warning,
    /// Error requiring attention (red, manual dismiss).
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Text glyph shown at the start of the toast.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Info => "i",
            Severity::Warning | Severity::Error => "!",
        }
    }

    /// Returns the auto-dismiss duration for this severity.
    /// Returns `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    created_at: Instant,
    custom_dismiss_duration: Option<Duration>,
}

impl Notification {
    /// Creates a new notification with the given severity and message key.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            created_at: Instant::now(),
            custom_dismiss_duration: None,
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Error toast for a failed submission.
    ///
    /// HTTP failures carry the status code as the `status` argument, other
    /// failures their description as `detail`.
    #[must_use]
    pub fn submit_failed(error: &SubmitError) -> Self {
        let notification = Self::error(error.i18n_key());
        match error {
            SubmitError::Status(code) => notification.with_arg("status", code.to_string()),
            SubmitError::Timeout => notification,
            SubmitError::InvalidUrl(detail)
            | SubmitError::InvalidPayload(detail)
            | SubmitError::Network(detail) => notification.with_arg("detail", detail.clone()),
        }
    }

    /// Warning toast for a failed position lookup.
    #[must_use]
    pub fn location_failed(error: &GeolocationError) -> Self {
        Self::warning(error.i18n_key())
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    /// Sets a custom auto-dismiss duration, overriding the severity default.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.custom_dismiss_duration = Some(duration);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Returns whether this notification reports a failed submission.
    #[must_use]
    pub fn is_submit_error(&self) -> bool {
        self.message_key.starts_with(SUBMIT_ERROR_PREFIX)
    }

    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    #[must_use]
    pub fn should_auto_dismiss(&self) -> bool {
        // Custom duration takes precedence over severity default
        self.custom_dismiss_duration
            .or_else(|| self.severity.auto_dismiss_duration())
            .is_some_and(|duration| self.age() >= duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn error_severity_has_no_auto_dismiss() {
        assert!(Severity::Error.auto_dismiss_duration().is_none());
        assert!(!Notification::error("x").should_auto_dismiss());
    }

    #[test]
    fn warning_duration_is_longer_than_success() {
        let success_duration = Severity::Success.auto_dismiss_duration().unwrap();
        let warning_duration = Severity::Warning.auto_dismiss_duration().unwrap();
        assert!(warning_duration > success_duration);
    }

    #[test]
    fn zero_custom_duration_dismisses_immediately() {
        let notification = Notification::warning("x").auto_dismiss(Duration::ZERO);
        assert!(notification.should_auto_dismiss());
    }

    #[test]
    fn status_failure_carries_the_code() {
        let notification = Notification::submit_failed(&SubmitError::Status(500));
        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(notification.message_key(), "error-submit-status");
        assert_eq!(
            notification.message_args(),
            &[("status".to_string(), "500".to_string())]
        );
        assert!(notification.is_submit_error());
    }

    #[test]
    fn network_failure_carries_the_detail() {
        let notification =
            Notification::submit_failed(&SubmitError::Network("connection refused".into()));
        assert_eq!(notification.message_key(), "error-submit-network");
        assert_eq!(notification.message_args()[0].0, "detail");
    }

    #[test]
    fn location_failure_is_a_warning() {
        let notification =
            Notification::location_failed(&GeolocationError::Network("offline".into()));
        assert_eq!(notification.severity(), Severity::Warning);
        assert!(!notification.is_submit_error());
    }
}
