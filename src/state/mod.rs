//! View state for Curate.
//!
//! [`AppState`] is the single view controller: every interaction mutates it
//! through the operations in `crate::logic`, and the renderer only reads it
//! (apart from recording hit-test rectangles).

pub mod app_state;
pub mod types;

pub use app_state::AppState;
pub use types::{
    CurationDone, CurationRequest, ImageSlot, NavSection, PageMode, Rect4, ResultItem,
};
