//! Inline SVG icons
//!
//! Icons are rendered inline so they inherit `currentColor` and need no
//! static files.

use leptos::prelude::*;

/// Stroke path data for a 24x24 icon
pub type IconPaths = &'static [&'static str];

#[component]
pub fn Icon(
    /// Path data from [`icons`]
    icon: IconPaths,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon.iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}

pub mod icons {
    use super::IconPaths;

    pub const EYE: IconPaths = &[
        "M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z",
        "M12 9a3 3 0 1 0 0 6a3 3 0 1 0 0-6z",
    ];
    pub const EYE_CLOSED: IconPaths = &[
        "M17.94 17.94A10.07 10.07 0 0 1 12 20c-7 0-11-8-11-8a18.45 18.45 0 0 1 5.06-5.94",
        "M9.9 4.24A9.12 9.12 0 0 1 12 4c7 0 11 8 11 8a18.5 18.5 0 0 1-2.16 3.19",
        "M14.12 14.12a3 3 0 1 1-4.24-4.24",
        "M1 1l22 22",
    ];
    pub const LOADER: IconPaths = &["M21 12a9 9 0 1 1-6.219-8.56"];
    pub const ALERT_CIRCLE: IconPaths = &["M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z"];
    pub const USER: IconPaths = &[
        "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2",
        "M12 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
    ];
}
