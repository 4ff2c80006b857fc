//! Core signup logic shared by the server and the browser client

#[cfg(feature = "ssr")]
pub mod config;
pub mod events;
pub mod form;
pub mod lifecycle;
pub mod scroll;
pub mod session;
pub mod signup;
#[cfg(feature = "ssr")]
pub mod users;

pub use events::{AppEvent, AuthScreen, EventSink, Notification, NotificationType, Notifier};
pub use form::{FormField, FormInputs, PasswordVisibility};
pub use lifecycle::{CancelToken, RequestPhase, SubmitGate};
pub use scroll::{OverflowTarget, ScrollLock};
pub use session::{KeyValueStore, SESSION_STORAGE_KEY, Session, SessionStore, StorageError};
pub use signup::{SIGNUP_ENDPOINT, SignupApi, SignupController, SignupError, SignupResponse, SubmitOutcome};
