//! Shared UI components

pub mod app_layout;
pub mod book_card;
pub mod book_detail;
pub mod button;
pub mod catalog;
pub mod filter_sidebar;
pub mod helpers;
pub mod icons;
pub mod utils;

pub use app_layout::AppLayoutView;
pub use book_card::{BookCard, PLACEHOLDER_COVER_URL};
pub use book_detail::BookDetailView;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use catalog::CatalogView;
pub use filter_sidebar::FilterSidebar;
pub use helpers::{BackButton, ErrorDisplay, LoadingSpinner, PageContainer};
pub use icons::BookOpenIcon;
pub use utils::format_published;
