//! Utility functions for UI components

use chrono::NaiveDate;

/// Format a publish date for display, e.g. "Mar 15, 2021".
/// Undated books show "Unknown".
pub fn format_published(published: Option<NaiveDate>) -> String {
    match published {
        Some(date) => date.format("%b %d, %Y").to_string(),
        None => "Unknown".to_string(),
    }
}
