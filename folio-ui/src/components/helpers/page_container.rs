//! Page container component

use dioxus::prelude::*;

/// Standard page container with consistent padding
#[component]
pub fn PageContainer(children: Element) -> Element {
    rsx! {
        div { class: "container mx-auto mt-8 px-4", {children} }
    }
}
