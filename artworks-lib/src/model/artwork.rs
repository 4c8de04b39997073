//! Artwork records as served by the Art Institute of Chicago API.

use serde::Deserialize;
use serde::Serialize;

use super::TableRecord;

/// Fields requested from the API for each artwork.
pub const ARTWORK_FIELDS: &[&str] = &[
    "id",
    "title",
    "place_of_origin",
    "artist_display",
    "inscriptions",
    "date_start",
    "date_end",
];

/// Column headers for the artwork table.
pub const ARTWORK_COLUMNS: &[&str] = &[
    "Title",
    "Origin",
    "Artist",
    "Inscriptions",
    "Start Date",
    "End Date",
];

/// A single artwork.
///
/// Only `id` is guaranteed by the API; every other field may be `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: u64,
    pub title: Option<String>,
    pub place_of_origin: Option<String>,
    pub artist_display: Option<String>,
    pub inscriptions: Option<String>,
    pub date_start: Option<i32>,
    pub date_end: Option<i32>,
}

impl Artwork {
    /// Creates an artwork with only an id and a title.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: Some(title.into()),
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }
}

impl TableRecord for Artwork {
    type Id = u64;

    fn columns() -> &'static [&'static str] {
        ARTWORK_COLUMNS
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn cells(&self) -> Vec<String> {
        fn text(value: &Option<String>) -> String {
            value.as_deref().unwrap_or_default().to_string()
        }
        fn year(value: Option<i32>) -> String {
            value.map(|y| y.to_string()).unwrap_or_default()
        }

        vec![
            text(&self.title),
            text(&self.place_of_origin),
            text(&self.artist_display),
            text(&self.inscriptions),
            year(self.date_start),
            year(self.date_end),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_nulls() {
        let json = r#"{
            "id": 27992,
            "title": "A Sunday on La Grande Jatte — 1884",
            "place_of_origin": "France",
            "artist_display": "Georges Seurat\nFrench, 1859-1891",
            "inscriptions": null,
            "date_start": 1884,
            "date_end": 1886
        }"#;
        let artwork: Artwork = serde_json::from_str(json).unwrap();
        assert_eq!(artwork.id, 27992);
        assert_eq!(artwork.inscriptions, None);
        assert_eq!(artwork.date_end, Some(1886));
    }

    #[test]
    fn test_missing_optional_fields() {
        let artwork: Artwork = serde_json::from_str(r#"{"id": 5}"#).unwrap();
        assert_eq!(artwork.id, 5);
        assert_eq!(artwork.title, None);
    }

    #[test]
    fn test_cells_match_columns() {
        let mut artwork = Artwork::new(1, "Nighthawks");
        artwork.date_start = Some(1942);
        let cells = artwork.cells();
        assert_eq!(cells.len(), Artwork::columns().len());
        assert_eq!(cells[0], "Nighthawks");
        assert_eq!(cells[1], "");
        assert_eq!(cells[4], "1942");
    }
}
