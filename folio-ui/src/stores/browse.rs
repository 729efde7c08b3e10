//! Browse state and the filter/sort/window pipeline
//!
//! Pure logic over an already-fetched book list, no I/O. The page owns a
//! `BrowseState` signal; every render recomputes the visible window from it.

use crate::display_types::{Book, GenreFilter, SortMode};

/// How many cards are revealed initially and per "show more" activation
pub const PAGE_SIZE: usize = 9;

/// Filter, sort, and pagination selections for the catalog
#[derive(Clone, Debug, PartialEq)]
pub struct BrowseState {
    pub genre: GenreFilter,
    pub sort: SortMode,
    /// Size of the reveal window into the filtered list
    pub visible_count: usize,
}

impl Default for BrowseState {
    fn default() -> Self {
        BrowseState {
            genre: GenreFilter::All,
            sort: SortMode::Any,
            visible_count: PAGE_SIZE,
        }
    }
}

impl BrowseState {
    /// Select a genre. Always resets the reveal window.
    pub fn select_genre(&mut self, genre: GenreFilter) {
        self.genre = genre;
        self.visible_count = PAGE_SIZE;
    }

    /// Select a sort mode. Always resets the reveal window.
    pub fn select_sort(&mut self, sort: SortMode) {
        self.sort = sort;
        self.visible_count = PAGE_SIZE;
    }

    /// Grow the reveal window by one page. No-op once every matching
    /// book is already visible.
    pub fn show_more(&mut self, total_matching: usize) {
        if self.visible_count < total_matching {
            self.visible_count += PAGE_SIZE;
        }
    }

    /// Run the pipeline: filter by genre, sort, then truncate to the
    /// reveal window. The source list is never touched; sorting happens
    /// on the freshly filtered copy.
    pub fn page(&self, books: &[Book]) -> BrowsePage {
        let mut matching: Vec<Book> = books
            .iter()
            .filter(|b| self.genre.matches(b))
            .cloned()
            .collect();

        if self.sort == SortMode::MostRecent {
            // Descending by publish date; `None` compares lowest so
            // undated books land at the end. Stable, so ties keep
            // API order.
            matching.sort_by(|a, b| b.published.cmp(&a.published));
        }

        let total_matching = matching.len();
        matching.truncate(self.visible_count);

        BrowsePage {
            books: matching,
            total_matching,
        }
    }
}

/// One visible window into the filtered catalog
#[derive(Clone, Debug, PartialEq)]
pub struct BrowsePage {
    /// Books currently revealed, at most `visible_count`
    pub books: Vec<Book>,
    /// Match count before truncation
    pub total_matching: usize,
}

impl BrowsePage {
    /// True once every matching book is revealed; the show-more control
    /// flips to its terminal label and stops responding.
    pub fn is_exhausted(&self) -> bool {
        self.books.len() >= self.total_matching
    }
}

/// Distinct genres of the fetched list in first-appearance order,
/// prefixed with the reserved "All" option.
pub fn genre_options(books: &[Book]) -> Vec<String> {
    let mut options = vec!["All".to_string()];
    for book in books {
        if !options.contains(&book.genre) {
            options.push(book.genre.clone());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn book(id: &str, genre: &str, published: Option<&str>) -> Book {
        Book {
            id: id.to_string(),
            title: format!("Book {id}"),
            author: "Author".to_string(),
            genre: genre.to_string(),
            published: published.map(|d| d.parse::<NaiveDate>().unwrap()),
            cover_url: None,
        }
    }

    fn ids(page: &BrowsePage) -> Vec<&str> {
        page.books.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_genre_options_distinct_all_first() {
        let books = vec![
            book("1", "Fiction", None),
            book("2", "Fantasy", None),
            book("3", "Fiction", None),
            book("4", "History", None),
        ];
        assert_eq!(genre_options(&books), vec!["All", "Fiction", "Fantasy", "History"]);
    }

    #[test]
    fn test_genre_options_empty_list() {
        assert_eq!(genre_options(&[]), vec!["All"]);
    }

    #[test]
    fn test_filter_keeps_exactly_matching_subset() {
        let books = vec![
            book("1", "Fiction", None),
            book("2", "Fantasy", None),
            book("3", "Fiction", None),
        ];
        let mut state = BrowseState::default();
        state.select_genre(GenreFilter::Genre("Fiction".to_string()));

        let page = state.page(&books);
        assert_eq!(ids(&page), vec!["1", "3"]);
        assert!(page.books.iter().all(|b| b.genre == "Fiction"));
    }

    #[test]
    fn test_most_recent_sorts_descending_with_undated_last() {
        let books = vec![
            book("old", "Fiction", Some("2001-05-01")),
            book("undated", "Fiction", None),
            book("new", "Fiction", Some("2021-03-15")),
            book("mid", "Fiction", Some("2010-12-31")),
        ];
        let mut state = BrowseState::default();
        state.select_sort(SortMode::MostRecent);

        let page = state.page(&books);
        assert_eq!(ids(&page), vec!["new", "mid", "old", "undated"]);
    }

    #[test]
    fn test_most_recent_ties_keep_source_order() {
        let books = vec![
            book("a", "Fiction", Some("2020-01-01")),
            book("b", "Fiction", Some("2020-01-01")),
            book("c", "Fiction", Some("2020-01-01")),
        ];
        let mut state = BrowseState::default();
        state.select_sort(SortMode::MostRecent);

        assert_eq!(ids(&state.page(&books)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_does_not_touch_source_list() {
        let books = vec![
            book("a", "Fiction", Some("2001-01-01")),
            book("b", "Fiction", Some("2021-01-01")),
        ];
        let mut state = BrowseState::default();
        state.select_sort(SortMode::MostRecent);
        state.page(&books);

        assert_eq!(books[0].id, "a");
        assert_eq!(books[1].id, "b");
    }

    #[test]
    fn test_window_is_min_of_visible_and_matching() {
        let books: Vec<Book> = (0..20).map(|i| book(&i.to_string(), "Fiction", None)).collect();
        let state = BrowseState::default();

        let page = state.page(&books);
        assert_eq!(page.books.len(), PAGE_SIZE);
        assert_eq!(page.total_matching, 20);
        assert!(!page.is_exhausted());
    }

    #[test]
    fn test_show_more_reveals_tail_then_exhausts() {
        // 20 books, all one genre: 9 -> 18 -> 20 (exhausted)
        let books: Vec<Book> = (0..20).map(|i| book(&i.to_string(), "Fiction", None)).collect();
        let mut state = BrowseState::default();

        state.show_more(state.page(&books).total_matching);
        let page = state.page(&books);
        assert_eq!(page.books.len(), 18);
        assert!(!page.is_exhausted());

        state.show_more(page.total_matching);
        let page = state.page(&books);
        assert_eq!(page.books.len(), 20);
        assert!(page.is_exhausted());

        // Further activations change nothing
        state.show_more(page.total_matching);
        assert_eq!(state.page(&books).books.len(), 20);
    }

    #[test]
    fn test_small_filtered_set_is_exhausted_immediately() {
        // 12 Fiction + 8 Fantasy: selecting Fantasy shows all 8 at once
        let mut books: Vec<Book> = (0..12).map(|i| book(&format!("fi{i}"), "Fiction", None)).collect();
        books.extend((0..8).map(|i| book(&format!("fa{i}"), "Fantasy", None)));

        let mut state = BrowseState::default();
        state.select_genre(GenreFilter::Genre("Fantasy".to_string()));

        let page = state.page(&books);
        assert_eq!(page.books.len(), 8);
        assert!(page.is_exhausted());
    }

    #[test]
    fn test_selection_change_resets_window() {
        let books: Vec<Book> = (0..30).map(|i| book(&i.to_string(), "Fiction", None)).collect();
        let mut state = BrowseState::default();

        state.show_more(30);
        state.show_more(30);
        assert_eq!(state.visible_count, 27);

        state.select_genre(GenreFilter::All);
        assert_eq!(state.visible_count, PAGE_SIZE);
        assert!(!state.page(&books).is_exhausted());

        state.show_more(30);
        state.select_sort(SortMode::MostRecent);
        assert_eq!(state.visible_count, PAGE_SIZE);
    }

    #[test]
    fn test_empty_catalog_page_is_exhausted() {
        let state = BrowseState::default();
        let page = state.page(&[]);
        assert_eq!(page.books.len(), 0);
        assert!(page.is_exhausted());
    }

    #[test]
    fn test_filter_then_sort_order() {
        // Sort applies to the filtered copy, not the whole list
        let books = vec![
            book("f1", "Fiction", Some("2022-01-01")),
            book("h1", "History", Some("2023-01-01")),
            book("f2", "Fiction", Some("2024-01-01")),
        ];
        let mut state = BrowseState::default();
        state.select_genre(GenreFilter::Genre("Fiction".to_string()));
        state.select_sort(SortMode::MostRecent);

        assert_eq!(ids(&state.page(&books)), vec!["f2", "f1"]);
    }
}
