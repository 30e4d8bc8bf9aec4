//! The single-line guess editor.

use unicode_segmentation::UnicodeSegmentation;

/// Longest draft accepted, in grapheme clusters.
pub const DRAFT_CHAR_LIMIT: usize = 156;

/// Handles text editing with proper Unicode grapheme cluster support.
///
/// Single line only: newlines are dropped on insert. Input beyond
/// [`DRAFT_CHAR_LIMIT`] is discarded.
#[derive(Debug, Default, Clone)]
pub struct DraftInput {
    text: String,
    cursor: usize,
}

impl DraftInput {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in graphemes.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn take_text(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor = self.cursor.saturating_add(1).min(self.grapheme_count());
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.grapheme_count();
    }

    pub fn enter_char(&mut self, new_char: char) {
        if matches!(new_char, '\n' | '\r') || self.grapheme_count() >= DRAFT_CHAR_LIMIT {
            return;
        }
        let index = self.byte_index();
        let before = self.grapheme_count();
        self.text.insert(index, new_char);
        // A combining mark merges into the previous grapheme instead of adding one.
        if self.grapheme_count() > before {
            self.move_cursor_right();
        }
    }

    /// Insert pasted text at the cursor, truncated to the remaining capacity.
    pub fn enter_text(&mut self, text: &str) {
        let room = DRAFT_CHAR_LIMIT.saturating_sub(self.grapheme_count());
        let clean: String = text
            .graphemes(true)
            .filter(|g| !g.contains(['\n', '\r']))
            .take(room)
            .collect();
        if clean.is_empty() {
            return;
        }
        let index = self.byte_index();
        self.text.insert_str(index, &clean);
        let inserted = clean.graphemes(true).count();
        self.cursor = self
            .cursor
            .saturating_add(inserted)
            .min(self.grapheme_count());
    }

    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }

        let start = self.byte_index_at(self.cursor - 1);
        let end = self.byte_index_at(self.cursor);
        self.text.replace_range(start..end, "");
        self.move_cursor_left();
    }

    pub fn delete_char_forward(&mut self) {
        if self.cursor >= self.grapheme_count() {
            return;
        }

        let start = self.byte_index_at(self.cursor);
        let end = self.byte_index_at(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    /// Text left of the cursor, for cursor placement.
    #[must_use]
    pub fn before_cursor(&self) -> &str {
        &self.text[..self.byte_index()]
    }

    #[must_use]
    pub fn grapheme_count(&self) -> usize {
        self.text.graphemes(true).count()
    }

    fn byte_index(&self) -> usize {
        self.byte_index_at(self.cursor)
    }

    fn byte_index_at(&self, grapheme_index: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(grapheme_index)
            .map_or(self.text.len(), |(i, _)| i)
    }
}
