//! Typed messages flowing from screens to application state
//!
//! Components never reach into shared state directly; they publish an
//! [`AppEvent`] to an [`EventSink`] and raise user-facing messages through a
//! [`Notifier`].

use derive_more::Display;

use crate::core::session::Session;

/// Which authentication screen the application shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum AuthScreen {
    #[display("login")]
    Login,
    #[default]
    #[display("signup")]
    Signup,
}

/// Application-level state change requested by a screen
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    SessionSet(Session),
    ScreenSelect(AuthScreen),
}

/// Receives [`AppEvent`]s
pub trait EventSink {
    fn publish(&self, event: AppEvent);
}

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Error,
    Info,
}

/// A toast-style message for the user
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub auto_dismiss_ms: Option<u32>,
}

impl Notification {
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            notification_type: NotificationType::Error,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(5000),
        }
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            notification_type: NotificationType::Info,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(3000),
        }
    }
}

/// Shows [`Notification`]s to the user
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_screen_names() {
        assert_eq!(AuthScreen::Login.to_string(), "login");
        assert_eq!(AuthScreen::Signup.to_string(), "signup");
    }

    #[test]
    fn test_default_screen_is_signup() {
        assert_eq!(AuthScreen::default(), AuthScreen::Signup);
    }

    #[test]
    fn test_error_notification_keeps_message_verbatim() {
        let notification = Notification::error("Error", "User already exists");
        assert_eq!(notification.notification_type, NotificationType::Error);
        assert_eq!(notification.title, "Error");
        assert_eq!(notification.message, "User already exists");
        assert!(notification.auto_dismiss_ms.is_some());
    }
}
