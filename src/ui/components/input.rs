//! Cursor-aware editing of text held elsewhere.
//!
//! Cursors count characters, not bytes, so multi-byte input edits cleanly.
//! The text itself stays in the caller's state; each edit applies to it
//! immediately.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn byte_pos(text: &str, cursor: usize) -> usize {
    text.chars().take(cursor).map(char::len_utf8).sum()
}

pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Insert a character at the cursor.
pub fn insert_char(text: &mut String, cursor: &mut usize, c: char) {
    let pos = byte_pos(text, *cursor);
    text.insert(pos, c);
    *cursor += 1;
}

/// Delete the character before the cursor.
pub fn backspace(text: &mut String, cursor: &mut usize) {
    if *cursor > 0 {
        let pos = byte_pos(text, *cursor - 1);
        text.remove(pos);
        *cursor -= 1;
    }
}

/// Delete the character under the cursor.
pub fn delete(text: &mut String, cursor: &mut usize) {
    if *cursor < char_count(text) {
        let pos = byte_pos(text, *cursor);
        text.remove(pos);
    }
}

/// Apply a generic editing key. Returns whether the key was consumed.
pub fn handle_edit_key(text: &mut String, cursor: &mut usize, key: KeyEvent) -> bool {
    *cursor = (*cursor).min(char_count(text));
    match key.code {
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            insert_char(text, cursor, c);
            true
        }
        KeyCode::Backspace => {
            backspace(text, cursor);
            true
        }
        KeyCode::Delete => {
            delete(text, cursor);
            true
        }
        KeyCode::Left => {
            *cursor = cursor.saturating_sub(1);
            true
        }
        KeyCode::Right => {
            *cursor = (*cursor + 1).min(char_count(text));
            true
        }
        KeyCode::Home => {
            *cursor = 0;
            true
        }
        KeyCode::End => {
            *cursor = char_count(text);
            true
        }
        _ => false,
    }
}

/// Text with a block cursor drawn at `cursor`, for rendering focused fields.
pub fn with_cursor(text: &str, cursor: usize) -> String {
    let pos = byte_pos(text, cursor.min(char_count(text)));
    format!("{}█{}", &text[..pos], &text[pos..])
}
