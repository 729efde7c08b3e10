use crate::Route;
use dioxus::prelude::*;
use folio_ui::AppLayoutView;

#[component]
pub fn AppLayout() -> Element {
    rsx! {
        AppLayoutView {
            header: rsx! {
                header { class: "bg-white border-b border-gray-200 shadow-sm",
                    div { class: "container mx-auto px-4 py-3 flex items-center justify-between",
                        button {
                            class: "text-xl font-bold text-slate-800 hover:text-indigo-600 transition-colors",
                            onclick: move |_| {
                                navigator().push(Route::Catalog {});
                            },
                            "Folio"
                        }
                        span { class: "text-sm text-gray-500", "Browse the collection" }
                    }
                }
            },
            Outlet::<Route> {}
        }
    }
}
