//! Session context for the signed-in user and the auth screen selector
//!
//! This module provides the application-level state screens write to:
//! - The current session, restored from localStorage after hydration
//! - Which auth screen (login or signup) is displayed
//!
//! Screens change it by publishing [`AppEvent`]s.

use leptos::prelude::*;

use crate::core::{AppEvent, AuthScreen, EventSink, Notification, Notifier, Session, SessionStore};
use crate::ui::storage::BrowserStorage;

/// Session and screen state shared across the application
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Signed-in user, if any
    pub session: RwSignal<Option<Session>>,
    /// Auth screen shown while signed out
    pub screen: RwSignal<AuthScreen>,
}

impl SessionContext {
    fn new() -> Self {
        Self {
            session: RwSignal::new(None),
            screen: RwSignal::new(AuthScreen::default()),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.with(Option::is_some)
    }

    pub fn select_screen(&self, screen: AuthScreen) {
        self.publish(AppEvent::ScreenSelect(screen));
    }

    /// Forget the session locally and return to the login screen
    pub fn sign_out(&self, notifier: &impl Notifier) {
        if let Err(e) = SessionStore::new(BrowserStorage).clear() {
            leptos::logging::warn!("Failed to clear stored session: {}", e);
        }
        self.session.set(None);
        self.screen.set(AuthScreen::Login);
        notifier.notify(Notification::info("Signed out", "You have been signed out"));
    }
}

impl EventSink for SessionContext {
    fn publish(&self, event: AppEvent) {
        match event {
            AppEvent::SessionSet(session) => self.session.set(Some(session)),
            AppEvent::ScreenSelect(screen) => {
                leptos::logging::log!("Showing {} screen", screen);
                self.screen.set(screen);
            }
        }
    }
}

/// Provide session context to the component tree
pub fn provide_session_context() -> SessionContext {
    // Start signed out on both server and client to avoid hydration mismatch
    let ctx = SessionContext::new();

    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| match SessionStore::new(BrowserStorage).load() {
            Ok(Some(session)) => ctx.session.set(Some(session)),
            Ok(None) => {}
            Err(e) => leptos::logging::warn!("Ignoring stored session: {}", e),
        });
    }

    provide_context(ctx);
    ctx
}

/// Get session context from the component tree
pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NotificationType;
    use serde_json::json;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNotifier {
        notifications: RefCell<Vec<Notification>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.notifications.borrow_mut().push(notification);
        }
    }

    #[test]
    fn test_session_set_event_signs_in() {
        Owner::new().with(|| {
            let ctx = SessionContext::new();
            let session: Session = serde_json::from_value(json!({"_id": "1", "username": "b"})).unwrap();

            ctx.publish(AppEvent::SessionSet(session.clone()));

            assert_eq!(ctx.session.get_untracked(), Some(session));
        })
    }

    #[test]
    fn test_screen_select_event_switches_screen() {
        Owner::new().with(|| {
            let ctx = SessionContext::new();
            assert_eq!(ctx.screen.get_untracked(), AuthScreen::Signup);

            ctx.select_screen(AuthScreen::Login);
            assert_eq!(ctx.screen.get_untracked(), AuthScreen::Login);
        })
    }

    #[test]
    fn test_sign_out_returns_to_login() {
        Owner::new().with(|| {
            let ctx = SessionContext::new();
            ctx.publish(AppEvent::SessionSet(
                serde_json::from_value(json!({"_id": "1"})).unwrap(),
            ));

            let notifier = RecordingNotifier::default();
            ctx.sign_out(&notifier);

            assert_eq!(ctx.session.get_untracked(), None);
            assert_eq!(ctx.screen.get_untracked(), AuthScreen::Login);

            let notifications = notifier.notifications.borrow();
            assert_eq!(notifications.len(), 1);
            assert_eq!(notifications[0].notification_type, NotificationType::Info);
        })
    }
}
