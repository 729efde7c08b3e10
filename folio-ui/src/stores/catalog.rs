//! Catalog state store

use crate::display_types::Book;

/// State for the catalog view
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogState {
    /// Books fetched from the API, in API order
    pub books: Vec<Book>,
    /// Whether the catalog is loading
    pub loading: bool,
    /// Error message if loading failed
    pub error: Option<String>,
}
