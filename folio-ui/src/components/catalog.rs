//! Catalog view component - pure rendering, no data fetching
//!
//! Renders exactly one of: loading indicator, error message, empty state,
//! or the full catalog (filter sidebar + card grid + show-more control).
//! All selections and navigation flow back through callbacks; the page
//! owning the state decides what changes.

use crate::components::book_card::BookCard;
use crate::components::filter_sidebar::FilterSidebar;
use crate::components::helpers::{ErrorDisplay, LoadingSpinner};
use crate::components::icons::BookOpenIcon;
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::display_types::{Book, GenreFilter, SortMode};
use crate::stores::browse::{genre_options, BrowseState};
use crate::stores::catalog::CatalogState;
use dioxus::prelude::*;

/// Catalog view component - pure rendering, no data fetching
#[component]
pub fn CatalogView(
    state: CatalogState,
    browse: BrowseState,
    on_genre_change: EventHandler<GenreFilter>,
    on_sort_change: EventHandler<SortMode>,
    /// Called with the current match count when "Show More" is activated
    on_show_more: EventHandler<usize>,
    // Navigation callback - called with book_id when a card is clicked
    on_book_click: EventHandler<String>,
) -> Element {
    let CatalogState {
        books,
        loading,
        error,
    } = state;

    rsx! {
        div { class: "container mx-auto mt-8 px-4",
            if loading {
                LoadingSpinner { message: "Loading books...".to_string() }
            } else if let Some(err) = error {
                ErrorDisplay { message: err }
                p { class: "text-sm mt-2 text-center text-gray-500",
                    "An error occurred while loading the catalog."
                }
            } else if books.is_empty() {
                div { class: "text-center py-12",
                    div { class: "text-gray-400 mb-4",
                        BookOpenIcon { class: "w-16 h-16 mx-auto" }
                    }
                    h2 { class: "text-2xl font-bold text-gray-600 mb-2", "No books in the catalog yet" }
                    p { class: "text-gray-500", "Books added to the collection will show up here." }
                }
            } else {
                div { class: "flex",
                    FilterSidebar {
                        genres: genre_options(&books),
                        genre: browse.genre.clone(),
                        sort: browse.sort,
                        on_genre_change,
                        on_sort_change,
                    }
                    CatalogGrid { books, browse, on_show_more, on_book_click }
                }
            }
        }
    }
}

/// Grid of visible cards plus the show-more control
#[component]
fn CatalogGrid(
    books: Vec<Book>,
    browse: BrowseState,
    on_show_more: EventHandler<usize>,
    on_book_click: EventHandler<String>,
) -> Element {
    let page = browse.page(&books);
    let exhausted = page.is_exhausted();
    let total_matching = page.total_matching;

    rsx! {
        div { class: "flex-1",
            h1 { class: "text-3xl font-semibold border-b p-3 text-slate-700 mt-5", "Latest Books:" }
            div { class: "grid grid-cols-1 md:grid-cols-3 gap-10",
                for book in page.books {
                    BookCard { key: "{book.id}", book, on_click: on_book_click }
                }
            }
            div { class: "mt-6 flex justify-center",
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    disabled: exhausted,
                    onclick: move |_| on_show_more.call(total_matching),
                    if exhausted {
                        "No More Books"
                    } else {
                        "Show More"
                    }
                }
            }
        }
    }
}
