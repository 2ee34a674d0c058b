//! # Modal State Module
//!
//! The filter modal and the draft filters edited inside it. The draft is a
//! snapshot of the committed filters taken when the modal opens; nothing
//! done to it reaches the calendar until it is applied.

use shared::{FilterState, FilterToggle};

/// Filter modal visibility and its in-progress draft
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterModalState {
    /// Whether the filter modal is visible
    pub is_open: bool,

    /// Filters being edited; only meaningful while the modal is open
    pub draft: FilterState,
}

impl FilterModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the modal with a fresh copy of the committed filters,
    /// discarding any draft left over from an earlier session
    pub fn open(&mut self, committed: &FilterState) {
        self.is_open = true;
        self.draft = committed.clone();
        log::info!("🔍 Filter modal opened with {} active value(s)", committed.active_count());
    }

    /// Toggle a value in the draft. Returns false when the modal is closed.
    pub fn toggle(&mut self, toggle: FilterToggle) -> bool {
        if !self.is_open {
            log::warn!("Ignoring filter toggle {:?}: filter modal is closed", toggle);
            return false;
        }
        self.draft.toggle(toggle);
        true
    }

    /// Clear every draft category. Returns false when the modal is closed.
    pub fn reset(&mut self) -> bool {
        if !self.is_open {
            log::warn!("Ignoring filter reset: filter modal is closed");
            return false;
        }
        self.draft.clear();
        true
    }

    /// Close the modal and hand back the draft for committing
    pub fn take_draft(&mut self) -> Option<FilterState> {
        if !self.is_open {
            log::warn!("Ignoring filter apply: filter modal is closed");
            return None;
        }
        self.is_open = false;
        Some(std::mem::take(&mut self.draft))
    }

    /// Close the modal and drop the draft
    pub fn cancel(&mut self) -> bool {
        if !self.is_open {
            log::warn!("Ignoring filter modal close: filter modal is already closed");
            return false;
        }
        self.is_open = false;
        self.draft.clear();
        log::info!("🔍 Filter modal closed, draft discarded");
        true
    }
}
