//! Display types for UI components
//!
//! Lightweight versions of the API records, containing only the fields
//! needed for display. They enable props-based components that can work
//! with either real or fixture data.

use chrono::NaiveDate;

/// Book display info
#[derive(Clone, Debug, PartialEq)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    /// Publish date; `None` when the API record is missing one or it
    /// could not be parsed. Sorts as earliest under `MostRecent`.
    pub published: Option<NaiveDate>,
    pub cover_url: Option<String>,
}

/// Sort mode for the catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Keep the order the API returned
    #[default]
    Any,
    /// Most recently published first
    MostRecent,
}

impl SortMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortMode::Any => "Any",
            SortMode::MostRecent => "Most Recent",
        }
    }

    /// Stable value used by the sort dropdown
    pub fn value(&self) -> &'static str {
        match self {
            SortMode::Any => "Any",
            SortMode::MostRecent => "MostRecent",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "MostRecent" => SortMode::MostRecent,
            _ => SortMode::Any,
        }
    }
}

/// Genre constraint for the catalog
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum GenreFilter {
    /// No constraint
    #[default]
    All,
    /// Only books whose genre equals the label
    Genre(String),
}

impl GenreFilter {
    /// Label shown in the filter dropdown. "All" is reserved as the
    /// unfiltered option.
    pub fn label(&self) -> &str {
        match self {
            GenreFilter::All => "All",
            GenreFilter::Genre(g) => g,
        }
    }

    /// Inverse of [`label`](Self::label), used when a dropdown reports
    /// its selected value back as a string.
    pub fn from_label(label: &str) -> Self {
        if label == "All" {
            GenreFilter::All
        } else {
            GenreFilter::Genre(label.to_string())
        }
    }

    pub fn matches(&self, book: &Book) -> bool {
        match self {
            GenreFilter::All => true,
            GenreFilter::Genre(g) => book.genre == *g,
        }
    }
}
