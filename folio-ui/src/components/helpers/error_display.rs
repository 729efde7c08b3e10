//! Error display component

use dioxus::prelude::*;

/// Generic error display box
#[component]
pub fn ErrorDisplay(message: String) -> Element {
    rsx! {
        div { class: "bg-red-50 border border-red-300 text-red-700 px-4 py-3 rounded-md mb-4",
            p { "{message}" }
        }
    }
}
