//! # Calendar State Module
//!
//! Month navigation, day selection and the day-detail panel flag.
//!
//! ## Responsibilities:
//! - Month anchor navigation (relative moves and jump to today)
//! - Selected date
//! - Whether the day-detail panel is open

use chrono::NaiveDate;
use shared::MonthAnchor;

/// Calendar-specific state for month navigation and day selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarState {
    /// Month currently displayed
    pub current_month: MonthAnchor,

    /// Date the user last selected, if any
    pub selected_date: Option<NaiveDate>,

    /// Whether the panel listing the selected day's classes is open
    pub day_detail_open: bool,
}

impl CalendarState {
    /// Create calendar state showing `initial_month` with nothing selected
    pub fn new(initial_month: MonthAnchor) -> Self {
        Self {
            current_month: initial_month,
            selected_date: None,
            day_detail_open: false,
        }
    }

    /// Move the displayed month by `delta` months; selection is kept
    pub fn change_month(&mut self, delta: i32) {
        let previous = self.current_month;
        self.current_month = previous.shift(delta);
        log::info!("📅 Navigated from {} to {} (delta {})", previous, self.current_month, delta);
    }

    pub fn navigate_to_previous_month(&mut self) {
        self.change_month(-1);
    }

    pub fn navigate_to_next_month(&mut self) {
        self.change_month(1);
    }

    /// Show today's month and select today. The day-detail panel keeps its
    /// current open/closed state.
    pub fn go_to_today(&mut self, today: NaiveDate) {
        let delta = self.current_month.months_until(MonthAnchor::from_date(today));
        if delta != 0 {
            self.change_month(delta);
        }
        self.selected_date = Some(today);
        log::info!("📅 Selected today: {}", today);
    }

    /// Clicking the selected day toggles the day-detail panel; clicking any
    /// other day selects it and opens the panel.
    pub fn click_date(&mut self, date: NaiveDate) {
        if self.selected_date == Some(date) {
            self.day_detail_open = !self.day_detail_open;
            log::info!(
                "📅 Day {} clicked again, detail panel {}",
                date,
                if self.day_detail_open { "opened" } else { "closed" }
            );
            return;
        }

        self.selected_date = Some(date);
        self.day_detail_open = true;
        log::info!("📅 Selected day: {}", date);
    }

    pub fn close_day_detail_panel(&mut self) {
        self.day_detail_open = false;
    }
}
