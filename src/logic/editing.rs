//! Caret-based editing of the prompt field.

use crate::state::AppState;

/// Byte offset of the char at `caret` (or the end of the string).
fn byte_index(s: &str, caret: usize) -> usize {
    s.char_indices().nth(caret).map_or(s.len(), |(i, _)| i)
}

/// Insert `ch` at the caret and advance it.
pub fn insert_char(app: &mut AppState, ch: char) {
    let at = byte_index(&app.input, app.caret);
    app.input.insert(at, ch);
    app.caret += 1;
}

/// Delete the char before the caret.
pub fn backspace(app: &mut AppState) {
    if app.caret == 0 {
        return;
    }
    let at = byte_index(&app.input, app.caret - 1);
    app.input.remove(at);
    app.caret -= 1;
}

/// Delete the char under the caret.
pub fn delete_forward(app: &mut AppState) {
    if app.caret < app.input.chars().count() {
        let at = byte_index(&app.input, app.caret);
        app.input.remove(at);
    }
}

/// Move the caret by `delta` chars, clamped to the prompt.
pub fn move_caret(app: &mut AppState, delta: isize) {
    let len = app.input.chars().count();
    app.caret = app.caret.saturating_add_signed(delta).min(len);
}

/// Put the caret at the start or the end of the prompt.
pub fn caret_to(app: &mut AppState, to_end: bool) {
    app.caret = if to_end { app.input.chars().count() } else { 0 };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Typing, caret moves and deletions keep prompt and caret consistent.
    ///
    /// Inputs:
    /// - Prompt `"n"` (as left by the landing shortcut) extended and edited.
    ///
    /// Output:
    /// - `"n" -> "neon" -> "nen" -> "xnen" -> "xne"` with the caret tracking each edit.
    fn editing_sequence() {
        let mut app = AppState::default();
        app.input = "n".into();
        app.caret = 1;
        for ch in "eon".chars() {
            insert_char(&mut app, ch);
        }
        assert_eq!(app.input, "neon");
        assert_eq!(app.caret, 4);

        move_caret(&mut app, -1);
        backspace(&mut app);
        assert_eq!(app.input, "nen");
        assert_eq!(app.caret, 2);

        caret_to(&mut app, false);
        backspace(&mut app);
        insert_char(&mut app, 'x');
        assert_eq!(app.input, "xnen");

        caret_to(&mut app, true);
        delete_forward(&mut app);
        move_caret(&mut app, -1);
        delete_forward(&mut app);
        assert_eq!(app.input, "xne");
        assert_eq!(app.caret, 3);

        move_caret(&mut app, 10);
        assert_eq!(app.caret, 3);
        move_caret(&mut app, -10);
        assert_eq!(app.caret, 0);
    }

    #[test]
    /// What: Multi-byte characters are edited as whole chars.
    ///
    /// Inputs:
    /// - Prompt `"café"` with backspace at the end.
    ///
    /// Output:
    /// - `"caf"` without panicking on a char boundary.
    fn editing_handles_multibyte() {
        let mut app = AppState::default();
        app.input = "café".into();
        app.caret = 4;
        backspace(&mut app);
        assert_eq!(app.input, "caf");
        insert_char(&mut app, 'é');
        insert_char(&mut app, '!');
        assert_eq!(app.input, "café!");
    }
}
