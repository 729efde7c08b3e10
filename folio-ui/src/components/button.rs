//! Reusable button component

use dioxus::prelude::*;

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Indigo background - for primary actions
    Primary,
    /// No background - text only with hover
    Ghost,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    /// Smaller padding, text-xs
    Small,
    /// Standard padding
    Medium,
}

/// Reusable button component with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let base = "inline-flex items-center gap-2 font-semibold rounded transition-colors";

    let sizing = match size {
        ButtonSize::Small => "text-xs py-1 px-2",
        ButtonSize::Medium => "text-sm py-2 px-4",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => {
            "bg-indigo-500 hover:bg-indigo-700 text-white disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Ghost => "text-gray-600 hover:text-gray-900 hover:bg-gray-100",
    };

    let computed_class = match &class {
        Some(extra) => format!("{base} {sizing} {variant_class} {extra}"),
        None => format!("{base} {sizing} {variant_class}"),
    };

    rsx! {
        button {
            class: "{computed_class}",
            disabled,
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}
