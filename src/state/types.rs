//! Core value types used by the Curate view state.

use std::time::Duration;

/// Which of the two mutually exclusive views is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageMode {
    /// Marketing landing page with the features, process and gallery sections.
    #[default]
    Landing,
    /// Prompt entry view that shows the curated results.
    Input,
}

/// A static placeholder record standing in for a real recommendation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResultItem {
    /// Artwork title.
    pub title: &'static str,
    /// Artist display name.
    pub artist: &'static str,
    /// Match percentage shown on the card (0-100).
    pub match_score: u8,
}

/// Which URL a result thumbnail currently points at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageSlot {
    /// The indexed placeholder photo.
    #[default]
    Primary,
    /// The fixed "Art Not Found" graphic, used after the primary request failed.
    Fallback,
}

/// Navigation entries listed in the slide-in menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavSection {
    /// "Features" section of the landing page.
    Features,
    /// "How It Works" section of the landing page.
    HowItWorks,
    /// "Gallery" section of the landing page.
    Gallery,
}

impl NavSection {
    /// All entries in menu order.
    pub const ALL: [Self; 3] = [Self::Features, Self::HowItWorks, Self::Gallery];

    /// Menu label for the entry.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Features => "Features",
            Self::HowItWorks => "How It Works",
            Self::Gallery => "Gallery",
        }
    }

    /// Anchor identifier of the section the entry links to.
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Features => "features",
            Self::HowItWorks => "how-it-works",
            Self::Gallery => "gallery",
        }
    }

    /// Position of the entry in [`NavSection::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Features => 0,
            Self::HowItWorks => 1,
            Self::Gallery => 2,
        }
    }

    /// Entry at `index` in menu order, if any.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// A curation request handed to the delay worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurationRequest {
    /// Generation id of the submission; completions are matched against it.
    pub id: u64,
    /// Query text as submitted.
    pub query: String,
    /// Simulated latency before the results appear.
    pub delay: Duration,
}

/// Completion message emitted once a request's delay elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurationDone {
    /// Generation id copied from the originating [`CurationRequest`].
    pub id: u64,
}

/// Screen rectangle stored as `(x, y, width, height)` for mouse hit-testing.
pub type Rect4 = (u16, u16, u16, u16);
