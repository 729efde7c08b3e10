//! HTTP client for the book API
//!
//! Wire types live here; everything past this module works with
//! [`Book`] display values.

use chrono::{DateTime, NaiveDate};
use folio_ui::display_types::Book;
use serde::Deserialize;

/// Origin of the backend API; cover paths resolve relative to it
const API_ORIGIN: &str = "http://localhost:4000";

/// Book record as the API returns it
#[derive(Deserialize)]
struct ApiBook {
    #[serde(rename = "_id")]
    id: String,
    title: String,
    author: String,
    genre: String,
    #[serde(rename = "publishedDate")]
    published_date: Option<String>,
    image: Option<String>,
}

/// Lenient publish-date parse: RFC 3339 first (what the backend stores),
/// then a plain calendar date. Anything else is treated as undated.
fn parse_published(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(date) = raw.parse::<NaiveDate>() {
        return Some(date);
    }
    tracing::debug!("discarding malformed publishedDate: {raw:?}");
    None
}

fn cover_url_for(image: &Option<String>) -> Option<String> {
    image.as_ref().map(|path| format!("{API_ORIGIN}/{path}"))
}

fn to_display_book(api: ApiBook) -> Book {
    let cover_url = cover_url_for(&api.image);
    Book {
        id: api.id,
        title: api.title,
        author: api.author,
        genre: api.genre,
        published: api.published_date.as_deref().and_then(parse_published),
        cover_url,
    }
}

/// Fetch the full book collection
pub async fn fetch_books() -> Result<Vec<Book>, String> {
    let url = format!("{API_ORIGIN}/api/book/");
    let resp = reqwest::get(&url)
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.status().is_success() {
        return Err(format!("Server error: {}", resp.status()));
    }

    let api_books: Vec<ApiBook> = resp.json().await.map_err(|e| format!("Parse error: {e}"))?;

    Ok(api_books.into_iter().map(to_display_book).collect())
}

/// Fetch a single book by id
pub async fn fetch_book(book_id: &str) -> Result<Book, String> {
    let url = format!("{API_ORIGIN}/api/book/{book_id}");
    let resp = reqwest::get(&url)
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if resp.status() == reqwest::StatusCode::NOT_FOUND {
        return Err("Book not found.".to_string());
    }
    if !resp.status().is_success() {
        return Err(format!("Server error: {}", resp.status()));
    }

    let api_book: ApiBook = resp.json().await.map_err(|e| format!("Parse error: {e}"))?;

    Ok(to_display_book(api_book))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_published_rfc3339() {
        assert_eq!(
            parse_published("2021-03-15T00:00:00.000Z"),
            Some(NaiveDate::from_ymd_opt(2021, 3, 15).unwrap())
        );
    }

    #[test]
    fn test_parse_published_plain_date() {
        assert_eq!(
            parse_published("1999-12-31"),
            Some(NaiveDate::from_ymd_opt(1999, 12, 31).unwrap())
        );
    }

    #[test]
    fn test_parse_published_garbage_is_none() {
        assert_eq!(parse_published("next tuesday"), None);
        assert_eq!(parse_published(""), None);
    }

    #[test]
    fn test_deserialize_and_convert_record() {
        let json = r#"{
            "_id": "64f1c0ffee",
            "title": "The Silent Library",
            "author": "A. Reader",
            "genre": "Mystery",
            "publishedDate": "2020-06-01T12:30:00.000Z",
            "image": "uploads/silent-library.png"
        }"#;

        let api: ApiBook = serde_json::from_str(json).unwrap();
        let book = to_display_book(api);

        assert_eq!(book.id, "64f1c0ffee");
        assert_eq!(book.genre, "Mystery");
        assert_eq!(
            book.published,
            Some(NaiveDate::from_ymd_opt(2020, 6, 1).unwrap())
        );
        assert_eq!(
            book.cover_url.as_deref(),
            Some("http://localhost:4000/uploads/silent-library.png")
        );
    }

    #[test]
    fn test_missing_image_and_date_become_none() {
        let json = r#"{
            "_id": "1",
            "title": "Untitled",
            "author": "Anon",
            "genre": "Fiction"
        }"#;

        let api: ApiBook = serde_json::from_str(json).unwrap();
        let book = to_display_book(api);

        assert_eq!(book.cover_url, None);
        assert_eq!(book.published, None);
    }

    #[test]
    fn test_deserialize_collection() {
        let json = r#"[
            {"_id": "1", "title": "A", "author": "x", "genre": "Fiction",
             "publishedDate": "2019-01-01T00:00:00.000Z", "image": "a.png"},
            {"_id": "2", "title": "B", "author": "y", "genre": "Fantasy",
             "publishedDate": "not a date"}
        ]"#;

        let books: Vec<Book> = serde_json::from_str::<Vec<ApiBook>>(json)
            .unwrap()
            .into_iter()
            .map(to_display_book)
            .collect();

        assert_eq!(books.len(), 2);
        assert_eq!(books[0].cover_url.as_deref(), Some("http://localhost:4000/a.png"));
        assert_eq!(books[1].published, None);
    }
}
