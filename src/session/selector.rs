use std::collections::BTreeSet;

use crate::store::display_to_canonical;

/// Multi-select of lists for batch deletion, by display (reversed) position
#[derive(Debug, Clone, Default)]
pub struct DeleteSelector {
    selected: BTreeSet<usize>,
    cursor: usize,
}

impl DeleteSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.selected.clear();
        self.cursor = 0;
    }

    pub fn cancel(&mut self) {
        self.selected.clear();
        self.cursor = 0;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    /// Flip selection of `display_index`; ignored when out of range
    pub fn toggle(&mut self, display_index: usize, len: usize) {
        if display_index >= len {
            return;
        }
        if !self.selected.remove(&display_index) {
            self.selected.insert(display_index);
        }
    }

    pub fn is_selected(&self, display_index: usize) -> bool {
        self.selected.contains(&display_index)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Translate the selection to creation-order positions and reset
    pub fn confirm(&mut self, len: usize) -> BTreeSet<usize> {
        let canonical = self
            .selected
            .iter()
            .filter_map(|&d| display_to_canonical(len, d))
            .collect();
        self.selected.clear();
        self.cursor = 0;
        canonical
    }
}
