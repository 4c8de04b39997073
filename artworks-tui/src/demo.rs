//! Built-in records for offline mode.

use artworks_lib::Artwork;

const TITLES: &[&str] = &[
    "Study of Light",
    "Harbor at Dusk",
    "Portrait of a Woman",
    "Still Life with Pears",
    "Winter Landscape",
    "Untitled Composition",
    "The Garden Wall",
    "River Crossing",
];

const ARTISTS: &[(&str, &str)] = &[
    ("Claude Monet\nFrench, 1840-1926", "France"),
    ("Mary Cassatt\nAmerican, 1844-1926", "United States"),
    ("Katsushika Hokusai\nJapanese, 1760-1849", "Japan"),
    ("Unknown", "Ancient Egypt"),
    ("Winslow Homer\nAmerican, 1836-1910", "United States"),
];

/// Generates `count` deterministic artworks with ids `1..=count`.
pub fn artworks(count: u64) -> Vec<Artwork> {
    (1..=count)
        .map(|id| {
            let i = id as usize;
            let (artist, origin) = ARTISTS[i % ARTISTS.len()];
            let start = 1800 + (id as i32 * 7) % 150;
            Artwork {
                id,
                title: Some(format!("{} No. {}", TITLES[i % TITLES.len()], id)),
                place_of_origin: Some(origin.to_string()),
                artist_display: Some(artist.to_string()),
                inscriptions: (id % 3 == 0).then(|| "Signed lower right".to_string()),
                date_start: Some(start),
                date_end: Some(start + (id as i32 % 4)),
            }
        })
        .collect()
}
