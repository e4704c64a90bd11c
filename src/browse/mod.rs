//! Genre catalog and browse paths.
//!
//! The genre set is fixed and ordered; menu entries render in this order.
//! Identifiers are lowercase and double as URL path segments.

/// Base path for genre browsing pages.
pub const BROWSE: &str = "/browse";

/// Dashboard page path.
pub const DASHBOARD: &str = "/dashboard";

/// Ordered genre catalog.
pub const GENRES: &[&str] = &[
    "alternativerock",
    "ambient",
    "classical",
    "country",
    "deephouse",
    "disco",
    "electronic",
    "folk",
    "hiphop",
    "house",
    "jazz",
    "pop",
    "rock",
    "techno",
    "trance",
];

/// Genre substituted when none is selected.
pub const DEFAULT_GENRE: &str = "house";

/// Build the browse link for a genre, falling back to [`DEFAULT_GENRE`]
/// when the input is absent or empty. Total over arbitrary identifiers:
/// unknown genres still produce a navigable path, with the segment
/// percent-encoded.
pub fn genre_link(genre: Option<&str>) -> String {
    let genre = match genre {
        Some(g) if !g.is_empty() => g,
        _ => DEFAULT_GENRE,
    };
    format!("{}/{}", BROWSE, urlencoding::encode(genre))
}
