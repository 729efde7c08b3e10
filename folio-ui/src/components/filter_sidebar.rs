//! Filter sidebar component - genre and sort selection
//!
//! Uses native `<select>` elements; selections are reported back through
//! callbacks so the page owning the browse state decides what changes.

use crate::display_types::{GenreFilter, SortMode};
use dioxus::prelude::*;

const SELECT_CLASS: &str = "mt-1 block w-full border border-gray-300 rounded-md py-1 px-2 bg-white focus:outline-none focus:ring-2 focus:ring-indigo-500";

/// Sidebar with the genre filter and publish-date sort dropdowns
#[component]
pub fn FilterSidebar(
    /// Genre options, "All" first
    genres: Vec<String>,
    /// Currently selected genre
    genre: GenreFilter,
    /// Currently selected sort mode
    sort: SortMode,
    on_genre_change: EventHandler<GenreFilter>,
    on_sort_change: EventHandler<SortMode>,
) -> Element {
    let selected_genre = genre.label().to_string();

    rsx! {
        div { class: "mr-6 self-start bg-gradient-to-b from-purple-100 to-blue-100 shadow-lg rounded-lg border border-gray-200 p-7",
            label { class: "font-semibold block text-slate-800", r#for: "genre", "Filter by Genre:" }
            select {
                id: "genre",
                class: "{SELECT_CLASS}",
                value: "{selected_genre}",
                onchange: move |evt| on_genre_change.call(GenreFilter::from_label(&evt.value())),
                for option_label in genres.iter() {
                    option {
                        key: "{option_label}",
                        value: "{option_label}",
                        selected: *option_label == selected_genre,
                        "{option_label}"
                    }
                }
            }

            label { class: "font-semibold block mt-4 text-slate-800", r#for: "published", "Sort by Published Date:" }
            select {
                id: "published",
                class: "{SELECT_CLASS}",
                value: "{sort.value()}",
                onchange: move |evt| on_sort_change.call(SortMode::from_value(&evt.value())),
                for mode in [SortMode::Any, SortMode::MostRecent] {
                    option {
                        key: "{mode.value()}",
                        value: "{mode.value()}",
                        selected: mode == sort,
                        "{mode.display_name()}"
                    }
                }
            }
        }
    }
}
