use crate::api;
use crate::Route;
use dioxus::prelude::*;
use folio_ui::display_types::Book;
use folio_ui::{BackButton, BookDetailView, ErrorDisplay, LoadingSpinner, PageContainer};

#[component]
pub fn BookDetail(book_id: String) -> Element {
    let id = book_id.clone();
    let data = use_resource(move || {
        let id = id.clone();
        async move { api::fetch_book(&id).await }
    });
    let read = data.read();

    let result: Result<Book, String> = match &*read {
        Some(Ok(book)) => Ok(book.clone()),
        Some(Err(e)) => Err(e.clone()),
        None => {
            return rsx! {
                PageContainer {
                    LoadingSpinner { message: "Loading book...".to_string() }
                }
            };
        }
    };
    drop(read);

    match result {
        Ok(book) => rsx! {
            PageContainer {
                BookDetailView {
                    book,
                    on_back: move |_| {
                        navigator().push(Route::Catalog {});
                    },
                }
            }
        },
        Err(e) => {
            tracing::error!("failed to fetch book {book_id}: {e}");
            rsx! {
                PageContainer {
                    BackButton {
                        on_click: move |_| {
                            navigator().push(Route::Catalog {});
                        },
                    }
                    ErrorDisplay { message: e }
                }
            }
        }
    }
}
