//! View-controller operations on [`crate::state::AppState`].
//!
//! Each function is a single user-visible action; the event layer maps input
//! onto them and the runtime feeds timer completions back in.

pub mod capture;
pub mod clock;
pub mod curation;
pub mod editing;
pub mod navigation;

pub use capture::{capture_landing_keystroke, printable_char};
pub use clock::{format_clock, tick_clock};
pub use curation::{complete_curation, mark_image_failed, submit_curation};
pub use navigation::{
    activate_nav, close_menu, go_to_landing, move_menu_selection, open_menu, scroll_landing,
    scroll_landing_to, scroll_results,
};
