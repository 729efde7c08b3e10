mod book_detail;
mod catalog;
mod layout;

pub use book_detail::BookDetail;
pub use catalog::Catalog;
pub use layout::AppLayout;
