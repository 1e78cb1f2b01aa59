use crate::domain::ColorPalette;
use crate::store::{ListStore, ValidationError};

/// Create-list form state: a title and a palette choice
#[derive(Debug, Clone, Default)]
pub struct CreateListForm {
    pub title: String,
    /// Highlighted swatch, an index into the palette
    pub color_cursor: usize,
    /// Chosen palette key
    pub selected: Option<String>,
}

impl CreateListForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn push_char(&mut self, c: char) {
        self.title.push(c);
    }

    pub fn pop_char(&mut self) {
        self.title.pop();
    }

    pub fn next_color(&mut self, palette: &ColorPalette) {
        if !palette.is_empty() {
            self.color_cursor = (self.color_cursor + 1) % palette.len();
        }
    }

    pub fn prev_color(&mut self, palette: &ColorPalette) {
        if !palette.is_empty() {
            self.color_cursor = (self.color_cursor + palette.len() - 1) % palette.len();
        }
    }

    /// Choose the highlighted swatch
    pub fn select_current_color(&mut self, palette: &ColorPalette) {
        self.selected = palette.key_at(self.color_cursor).map(str::to_string);
    }

    /// Try to create the list; the form is cleared whether or not it succeeds.
    ///
    /// Returns the created list's title.
    pub fn submit(&mut self, store: &mut ListStore) -> Result<String, ValidationError> {
        let title = std::mem::take(&mut self.title);
        let color = self.selected.take().unwrap_or_default();
        self.reset();

        store.add_list(&title, &color).map(|list| list.title.clone())
    }
}
