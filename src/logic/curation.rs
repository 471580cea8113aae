//! Submitting prompts and applying simulated curation results.

use tokio::sync::mpsc;

use crate::catalog::RESULTS;
use crate::state::{AppState, CurationDone, CurationRequest, ImageSlot, PageMode};

/// What: Submit the current prompt for curation.
///
/// Inputs:
/// - `app`: Mutable view state; `input` holds the prompt.
/// - `curation_tx`: Channel to the delay worker.
///
/// Output:
/// - `true` when a request was started; `false` for an empty or whitespace-only prompt
///   (state untouched).
///
/// Details:
/// - Hides any previous results, raises `loading` and allocates a new generation id.
/// - Every submission starts its own timer; only the latest generation may complete.
pub fn submit_curation(
    app: &mut AppState,
    curation_tx: &mpsc::UnboundedSender<CurationRequest>,
) -> bool {
    if app.input.trim().is_empty() {
        tracing::debug!("ignoring empty curation prompt");
        return false;
    }
    app.results_visible = false;
    app.loading = true;
    app.results_scroll = 0;
    app.curation_generation += 1;
    let request = CurationRequest {
        id: app.curation_generation,
        query: app.input.clone(),
        delay: app.curation_delay(),
    };
    tracing::info!(
        id = request.id,
        query = %request.query,
        delay_ms = app.settings.curation_delay_ms,
        "curation started"
    );
    let _ = curation_tx.send(request);
    true
}

/// What: Apply a completed curation delay.
///
/// Inputs:
/// - `app`: Mutable view state.
/// - `done`: Completion carrying the generation id of its submission.
///
/// Output:
/// - `true` when the results were revealed; `false` for a stale completion.
///
/// Details:
/// - Completions from superseded submissions, or from before a return to the landing
///   view, are ignored so they cannot flip `loading`/`results_visible`.
/// - Revealed cards start on their primary thumbnails again.
pub fn complete_curation(app: &mut AppState, done: CurationDone) -> bool {
    if done.id != app.curation_generation || !app.loading || app.page != PageMode::Input {
        tracing::debug!(
            id = done.id,
            current = app.curation_generation,
            "dropping stale curation completion"
        );
        return false;
    }
    app.loading = false;
    app.results_visible = true;
    app.results_scroll = 0;
    app.thumbnails = [ImageSlot::Primary; RESULTS.len()];
    tracing::info!(id = done.id, results = RESULTS.len(), "curation finished");
    true
}

/// What: Record that a result thumbnail failed to load.
///
/// Inputs:
/// - `app`: Mutable view state.
/// - `index`: Card position in the results grid.
///
/// Output:
/// - `true` when the card switched to the fallback image; `false` when it already showed it
///   or `index` is out of range.
///
/// Details:
/// - No retry: the fallback stays until the next curation reveals the grid again.
pub fn mark_image_failed(app: &mut AppState, index: usize) -> bool {
    match app.thumbnails.get_mut(index) {
        Some(slot @ ImageSlot::Primary) => {
            *slot = ImageSlot::Fallback;
            tracing::debug!(index, "thumbnail failed; using fallback image");
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FALLBACK_IMAGE_URL, slot_url};
    use crate::logic::navigation::go_to_landing;

    fn input_app(text: &str) -> AppState {
        let mut app = AppState::default();
        app.page = PageMode::Input;
        app.input = text.to_string();
        app.caret = text.chars().count();
        app
    }

    #[tokio::test]
    /// What: Empty and whitespace-only prompts are silently ignored.
    ///
    /// Inputs:
    /// - Prompts `""` and `"  "`.
    ///
    /// Output:
    /// - No request sent; `loading` and `results_visible` stay `false`.
    async fn submit_ignores_blank_prompt() {
        for text in ["", "  "] {
            let mut app = input_app(text);
            let (tx, mut rx) = mpsc::unbounded_channel();
            assert!(!submit_curation(&mut app, &tx));
            assert!(!app.loading);
            assert!(!app.results_visible);
            assert_eq!(app.curation_generation, 0);
            assert!(rx.try_recv().is_err());
        }
    }

    #[tokio::test]
    /// What: A non-empty prompt starts loading immediately and sends a request.
    ///
    /// Inputs:
    /// - Prompt `"neon city"` with results from an earlier run still visible.
    ///
    /// Output:
    /// - `loading` true, `results_visible` false, request carries id 1, prompt and delay.
    async fn submit_starts_loading_and_sends_request() {
        let mut app = input_app("neon city");
        app.results_visible = true;
        let (tx, mut rx) = mpsc::unbounded_channel();
        assert!(submit_curation(&mut app, &tx));
        assert!(app.loading);
        assert!(!app.results_visible);
        let req = rx.try_recv().expect("request sent");
        assert_eq!(req.id, 1);
        assert_eq!(req.query, "neon city");
        assert_eq!(req.delay, app.curation_delay());
    }

    #[tokio::test]
    /// What: Completion of the current generation reveals the results and nothing else changes.
    ///
    /// Inputs:
    /// - Submitted `"neon city"` followed by its completion.
    ///
    /// Output:
    /// - `loading` false, `results_visible` true, prompt and page untouched, eight primary
    ///   thumbnails keyed by index.
    async fn completion_reveals_results() {
        let mut app = input_app("neon city");
        let (tx, mut rx) = mpsc::unbounded_channel();
        submit_curation(&mut app, &tx);
        let req = rx.try_recv().expect("request");
        assert!(complete_curation(&mut app, CurationDone { id: req.id }));
        assert!(!app.loading);
        assert!(app.results_visible);
        assert_eq!(app.page, PageMode::Input);
        assert_eq!(app.input, "neon city");
        for (i, slot) in app.thumbnails.iter().enumerate() {
            assert_eq!(
                slot_url(i, *slot),
                format!("https://picsum.photos/800/600?random={i}")
            );
        }
    }

    #[tokio::test]
    /// What: Overlapping submissions only let the latest completion apply.
    ///
    /// Inputs:
    /// - Two submissions; the first completion arrives after the second submission.
    ///
    /// Output:
    /// - First completion ignored (still loading); second completion reveals results.
    async fn superseded_completion_is_stale() {
        let mut app = input_app("neon city");
        let (tx, mut rx) = mpsc::unbounded_channel();
        submit_curation(&mut app, &tx);
        submit_curation(&mut app, &tx);
        let first = rx.try_recv().expect("first");
        let second = rx.try_recv().expect("second");
        assert!(!complete_curation(&mut app, CurationDone { id: first.id }));
        assert!(app.loading);
        assert!(!app.results_visible);
        assert!(complete_curation(&mut app, CurationDone { id: second.id }));
        assert!(app.results_visible && !app.loading);
    }

    #[tokio::test]
    /// What: Returning to the landing view invalidates an in-flight curation.
    ///
    /// Inputs:
    /// - Submission, back action, then the pending completion.
    ///
    /// Output:
    /// - Completion ignored; landing state stays fully reset.
    async fn completion_after_back_is_stale() {
        let mut app = input_app("neon city");
        let (tx, mut rx) = mpsc::unbounded_channel();
        submit_curation(&mut app, &tx);
        let req = rx.try_recv().expect("request");
        go_to_landing(&mut app);
        assert!(!complete_curation(&mut app, CurationDone { id: req.id }));
        assert_eq!(app.page, PageMode::Landing);
        assert!(!app.loading);
        assert!(!app.results_visible);
    }

    #[test]
    /// What: A failed thumbnail switches to the fallback once, leaving other cards alone.
    ///
    /// Inputs:
    /// - Failure reported twice for card 3 and once for an out-of-range index.
    ///
    /// Output:
    /// - First report switches, repeats and out-of-range are no-ops.
    fn image_failure_uses_fallback_for_that_card_only() {
        let mut app = input_app("neon city");
        assert!(mark_image_failed(&mut app, 3));
        assert!(!mark_image_failed(&mut app, 3));
        assert!(!mark_image_failed(&mut app, 99));
        assert_eq!(slot_url(3, app.thumbnails[3]), FALLBACK_IMAGE_URL);
        assert_eq!(app.thumbnails[2], ImageSlot::Primary);
        assert_eq!(app.thumbnails[4], ImageSlot::Primary);
    }
}
