//! Body overflow adapter for [`ScrollLock`](crate::core::ScrollLock)

use crate::core::OverflowTarget;

/// The document body's inline `overflow` style
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyOverflow;

#[cfg(not(feature = "ssr"))]
fn document_body() -> Option<web_sys::HtmlElement> {
    web_sys::window()?.document()?.body()
}

impl OverflowTarget for BodyOverflow {
    fn overflow(&self) -> String {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(body) = document_body() {
                return body
                    .style()
                    .get_property_value("overflow")
                    .unwrap_or_default();
            }
        }
        String::new()
    }

    fn set_overflow(&self, value: &str) {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(body) = document_body() {
                let _ = body.style().set_property("overflow", value);
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = value;
        }
    }
}

/// Suspend page scrolling while the calling component is mounted
pub fn use_scroll_lock() {
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::ScrollLock;
        use leptos::prelude::on_cleanup;

        let lock = ScrollLock::acquire(BodyOverflow);
        on_cleanup(move || drop(lock));
    }
}
