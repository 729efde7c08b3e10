//! Book detail view component - pure view with callbacks

use crate::components::book_card::PLACEHOLDER_COVER_URL;
use crate::components::helpers::BackButton;
use crate::components::utils::format_published;
use crate::display_types::Book;
use dioxus::prelude::*;

/// Detail view for a single book
#[component]
pub fn BookDetailView(book: Book, on_back: EventHandler<()>) -> Element {
    let cover_url = book
        .cover_url
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_COVER_URL.to_string());
    let published = format_published(book.published);

    rsx! {
        div { class: "max-w-3xl mx-auto",
            BackButton { on_click: on_back }
            div { class: "bg-white rounded-lg shadow-md p-6 md:flex md:gap-8",
                img {
                    src: "{cover_url}",
                    alt: "Cover for {book.title}",
                    class: "h-64 w-48 object-contain rounded-md mx-auto md:mx-0 flex-shrink-0",
                }
                div { class: "mt-6 md:mt-0",
                    h1 { class: "text-3xl font-semibold text-slate-800", "{book.title}" }
                    p { class: "mt-2 text-lg text-gray-700", "by {book.author}" }
                    span { class: "inline-block mt-4 bg-indigo-100 text-indigo-700 text-xs font-semibold px-2.5 py-1 rounded-full",
                        "{book.genre}"
                    }
                    p { class: "mt-4 text-sm text-gray-600", "Published: {published}" }
                }
            }
        }
    }
}
