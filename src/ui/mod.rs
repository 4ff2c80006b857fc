pub mod api;
pub mod auth;
pub mod common;
pub mod icon;
pub mod notifications;
pub mod pages;
pub mod scroll;
pub mod session;
pub mod storage;

pub use api::FetchSignupApi;
pub use icon::{Icon, icons};
pub use notifications::{NotificationManager, NotificationsContainer, provide_notifications, use_notifications};
pub use scroll::{BodyOverflow, use_scroll_lock};
pub use session::{SessionContext, provide_session_context, use_session_context};
pub use storage::BrowserStorage;
