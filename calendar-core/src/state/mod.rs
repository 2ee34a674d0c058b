//! # View State
//!
//! One explicit state value per calendar instance, changed only through the
//! transitions in [`CalendarAction`]. The renderer reads the flags to decide
//! whether to show the day-detail panel or the filter modal.

pub mod calendar_state;
pub mod modal_state;

pub use calendar_state::*;
pub use modal_state::*;

use chrono::NaiveDate;
use shared::{FilterState, FilterToggle, MonthAnchor};

/// Interaction a calendar instance can receive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarAction {
    /// Move the displayed month; negative goes back
    ChangeMonth(i32),
    GoToToday,
    ClickDate(NaiveDate),
    OpenFilterModal,
    ToggleDraftCategory(FilterToggle),
    ResetDraft,
    ApplyFilters,
    CloseFilterModal,
    CloseDayDetailPanel,
}

/// Complete interaction state of one calendar instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    calendar: CalendarState,
    filter_modal: FilterModalState,
    /// Filters currently shaping the rendered calendar
    committed_filters: FilterState,
}

impl ViewState {
    /// Initial state: `initial_month` shown, nothing selected, no filters, panels closed
    pub fn new(initial_month: MonthAnchor) -> Self {
        Self {
            calendar: CalendarState::new(initial_month),
            filter_modal: FilterModalState::new(),
            committed_filters: FilterState::default(),
        }
    }

    /// Initial state showing the month that contains `today`
    pub fn for_today(today: NaiveDate) -> Self {
        Self::new(MonthAnchor::from_date(today))
    }

    pub fn calendar(&self) -> &CalendarState {
        &self.calendar
    }

    pub fn filter_modal(&self) -> &FilterModalState {
        &self.filter_modal
    }

    /// Filters currently shaping the rendered calendar
    pub fn committed_filters(&self) -> &FilterState {
        &self.committed_filters
    }

    pub fn current_month(&self) -> MonthAnchor {
        self.calendar.current_month
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.calendar.selected_date
    }

    pub fn is_day_detail_open(&self) -> bool {
        self.calendar.day_detail_open
    }

    pub fn is_filter_modal_open(&self) -> bool {
        self.filter_modal.is_open
    }

    /// The draft while the filter modal is open
    pub fn draft_filters(&self) -> Option<&FilterState> {
        self.filter_modal.is_open.then_some(&self.filter_modal.draft)
    }

    /// Apply one transition in place. `today` is only read by `GoToToday`.
    pub fn apply(&mut self, action: CalendarAction, today: NaiveDate) {
        match action {
            CalendarAction::ChangeMonth(delta) => self.calendar.change_month(delta),
            CalendarAction::GoToToday => self.calendar.go_to_today(today),
            CalendarAction::ClickDate(date) => self.calendar.click_date(date),
            CalendarAction::OpenFilterModal => self.filter_modal.open(&self.committed_filters),
            CalendarAction::ToggleDraftCategory(toggle) => {
                self.filter_modal.toggle(toggle);
            }
            CalendarAction::ResetDraft => {
                self.filter_modal.reset();
            }
            CalendarAction::ApplyFilters => {
                if let Some(draft) = self.filter_modal.take_draft() {
                    log::info!(
                        "🔍 Applied filters with {} active value(s)",
                        draft.active_count()
                    );
                    self.committed_filters = draft;
                }
            }
            CalendarAction::CloseFilterModal => {
                self.filter_modal.cancel();
            }
            CalendarAction::CloseDayDetailPanel => self.calendar.close_day_detail_panel(),
        }
    }
}

/// Pure transition function: the state after `action`
pub fn reduce(state: &ViewState, action: CalendarAction, today: NaiveDate) -> ViewState {
    let mut next = state.clone();
    next.apply(action, today);
    next
}
