//! Book card component - pure view with callbacks

use crate::components::utils::format_published;
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::display_types::Book;
use dioxus::prelude::*;

/// Shown when a book record carries no cover image
pub const PLACEHOLDER_COVER_URL: &str =
    "https://cdn.pixabay.com/photo/2015/10/05/22/37/blank-profile-picture-973460_960_720.png";

/// Individual book card component
///
/// Pure view component - displays book info with a details action.
/// Navigation is handled via on_click callback, not direct router calls.
#[component]
pub fn BookCard(
    book: Book,
    // Navigation callback - called with book_id when the card is clicked
    on_click: EventHandler<String>,
) -> Element {
    let book_id = book.id.clone();
    let cover_url = book
        .cover_url
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_COVER_URL.to_string());
    let published = format_published(book.published);

    rsx! {
        div {
            class: "bg-white p-4 rounded-lg shadow-md transition duration-300 ease-in-out hover:scale-105 hover:shadow-lg cursor-pointer",
            "data-testid": "book-card",
            onclick: {
                let book_id = book_id.clone();
                move |_| on_click.call(book_id.clone())
            },
            img {
                src: "{cover_url}",
                alt: "Cover for {book.title}",
                class: "h-48 w-full object-contain mb-4 rounded-md",
            }
            h3 {
                class: "text-lg font-semibold text-black truncate",
                title: "{book.title}",
                "{book.title}"
            }
            p { class: "mt-2 text-sm text-gray-700", "by {book.author}" }
            p { class: "mt-2 text-xs text-gray-600", "Genre: {book.genre}" }
            p { class: "mt-1 text-xs text-gray-600", "Published: {published}" }
            div { class: "mt-4 flex justify-end",
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Small,
                    onclick: {
                        let book_id = book_id.clone();
                        move |evt: MouseEvent| {
                            evt.stop_propagation();
                            on_click.call(book_id.clone());
                        }
                    },
                    "Click for details"
                }
            }
        }
    }
}
