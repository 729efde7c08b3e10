//! App layout view component
//!
//! Provides the overall page structure with a slot for the header bar.

use dioxus::prelude::*;

/// App layout view (pure, props-based)
#[component]
pub fn AppLayoutView(
    /// Main content (typically the router outlet)
    children: Element,
    /// Optional header bar at the top
    #[props(default)]
    header: Option<Element>,
) -> Element {
    rsx! {
        div { class: "min-h-screen flex flex-col bg-gray-50",
            if let Some(hd) = header {
                {hd}
            }
            div { class: "flex-1", {children} }
        }
    }
}
