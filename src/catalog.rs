//! Static result catalog and thumbnail URL construction.
//!
//! The curated results are fixed records, identical for every query. Thumbnails
//! come from a public placeholder service keyed only by the card's position.

use crate::state::{ImageSlot, ResultItem};

/// The eight placeholder results shown after every curation, in display order.
pub const RESULTS: [ResultItem; 8] = [
    ResultItem {
        title: "Neon Dreams",
        artist: "J. Harrison",
        match_score: 94,
    },
    ResultItem {
        title: "Solitude in Blue",
        artist: "Maria Petrova",
        match_score: 91,
    },
    ResultItem {
        title: "Concrete Jungle",
        artist: "Kenji Tanaka",
        match_score: 89,
    },
    ResultItem {
        title: "First Light",
        artist: "Chloe Davis",
        match_score: 88,
    },
    ResultItem {
        title: "Metropolis Glow",
        artist: "Leo Rivera",
        match_score: 85,
    },
    ResultItem {
        title: "Rainy Reflections",
        artist: "Anya Sharma",
        match_score: 82,
    },
    ResultItem {
        title: "Steel & Glass",
        artist: "Omar Fadel",
        match_score: 80,
    },
    ResultItem {
        title: "Dusk Overdrive",
        artist: "Sam Taylor",
        match_score: 78,
    },
];

/// Image shown in place of a thumbnail whose request failed.
pub const FALLBACK_IMAGE_URL: &str =
    "https://placehold.co/800x600/1c1917/f5f5f4?text=Art+Not+Found";

/// Card aspect ratios, cycled by result index.
pub const ASPECTS: [Aspect; 3] = [Aspect::Square, Aspect::Portrait, Aspect::Landscape];

/// Shape of a result card's thumbnail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Aspect {
    /// 1:1
    Square,
    /// 3:4
    Portrait,
    /// 4:3
    Landscape,
}

impl Aspect {
    /// Short ratio label used on the card.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Portrait => "3:4",
            Self::Landscape => "4:3",
        }
    }
}

/// What: Build the primary thumbnail URL for the result at `index`.
///
/// Inputs:
/// - `index`: Zero-based position of the card in the results grid.
///
/// Output:
/// - Placeholder photo URL parameterized only by `index`.
#[must_use]
pub fn image_url(index: usize) -> String {
    format!("https://picsum.photos/800/600?random={index}")
}

/// URL a card currently displays, given which slot it is on.
#[must_use]
pub fn slot_url(index: usize, slot: ImageSlot) -> String {
    match slot {
        ImageSlot::Primary => image_url(index),
        ImageSlot::Fallback => FALLBACK_IMAGE_URL.to_string(),
    }
}

/// Aspect ratio of the card at `index`.
#[must_use]
pub const fn aspect_for(index: usize) -> Aspect {
    ASPECTS[index % ASPECTS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: The catalog is the fixed eight-record sequence in display order.
    ///
    /// Inputs:
    /// - `RESULTS` constant.
    ///
    /// Output:
    /// - First and last titles plus descending match scores are as published.
    fn catalog_is_fixed_and_ordered() {
        assert_eq!(RESULTS.len(), 8);
        assert_eq!(RESULTS[0].title, "Neon Dreams");
        assert_eq!(RESULTS[0].artist, "J. Harrison");
        assert_eq!(RESULTS[7].title, "Dusk Overdrive");
        assert_eq!(RESULTS[7].match_score, 78);
        assert!(RESULTS.windows(2).all(|w| w[0].match_score > w[1].match_score));
    }

    #[test]
    /// What: Thumbnail URLs depend on the position only and switch to the fixed fallback.
    ///
    /// Inputs:
    /// - Indices 0 and 7 on both slots.
    ///
    /// Output:
    /// - Primary URLs carry the index; fallback URLs are identical for every index.
    fn urls_are_keyed_by_index() {
        assert_eq!(image_url(0), "https://picsum.photos/800/600?random=0");
        assert_eq!(
            slot_url(7, ImageSlot::Primary),
            "https://picsum.photos/800/600?random=7"
        );
        assert_eq!(slot_url(0, ImageSlot::Fallback), FALLBACK_IMAGE_URL);
        assert_eq!(slot_url(7, ImageSlot::Fallback), FALLBACK_IMAGE_URL);
    }

    #[test]
    /// What: Aspect ratios cycle square, portrait, landscape.
    ///
    /// Inputs:
    /// - Indices 0 through 4.
    ///
    /// Output:
    /// - The pattern repeats every three cards.
    fn aspects_cycle() {
        assert_eq!(aspect_for(0), Aspect::Square);
        assert_eq!(aspect_for(1), Aspect::Portrait);
        assert_eq!(aspect_for(2), Aspect::Landscape);
        assert_eq!(aspect_for(3), Aspect::Square);
        assert_eq!(aspect_for(4).label(), "3:4");
    }
}
