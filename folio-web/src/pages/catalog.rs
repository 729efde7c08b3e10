use crate::api;
use crate::Route;
use dioxus::prelude::*;
use folio_ui::stores::{BrowseState, CatalogState};
use folio_ui::CatalogView;

#[component]
pub fn Catalog() -> Element {
    let data = use_resource(api::fetch_books);
    let read = data.read();

    let state = match &*read {
        None => CatalogState {
            books: vec![],
            loading: true,
            error: None,
        },
        Some(Ok(books)) => CatalogState {
            books: books.clone(),
            loading: false,
            error: None,
        },
        Some(Err(e)) => {
            tracing::error!("failed to fetch books: {e}");
            CatalogState {
                books: vec![],
                loading: false,
                error: Some(e.clone()),
            }
        }
    };
    drop(read);

    let mut browse = use_signal(BrowseState::default);

    rsx! {
        CatalogView {
            state,
            browse: browse(),
            on_genre_change: move |genre| browse.write().select_genre(genre),
            on_sort_change: move |sort| browse.write().select_sort(sort),
            on_show_more: move |total_matching| browse.write().show_more(total_matching),
            on_book_click: move |book_id: String| {
                navigator().push(Route::BookDetail { book_id });
            },
        }
    }
}
