//! Calendar facade for the rendering layer.
//!
//! A `CalendarView` owns the viewed entity, a snapshot of that entity's
//! classes, and the view state. Derived values (filtered classes, grid,
//! day-detail list, dancer choices) are recomputed from those on every call.

use chrono::NaiveDate;
use shared::{CalendarEntity, CalendarGrid, ClassRecord, DancerRef};

use crate::clock::Clock;
use crate::config::CalendarConfig;
use crate::domain::{
    available_dancers, classes_for_entity, classes_on_date, filter_classes, CalendarService,
};
use crate::state::{CalendarAction, ViewState};

#[derive(Debug)]
pub struct CalendarView {
    entity: CalendarEntity,
    /// The entity's classes, unfiltered
    classes: Vec<ClassRecord>,
    state: ViewState,
    clock: Box<dyn Clock>,
    calendar_service: CalendarService,
}

impl CalendarView {
    /// Build a calendar for `entity` from a class list that may include
    /// other studios' or dancers' classes.
    pub fn new(entity: CalendarEntity, classes: &[ClassRecord], config: &CalendarConfig) -> Self {
        let clock = config.clock();
        let initial_month = config.initial_month_for(clock.today());
        let entity_classes = classes_for_entity(&entity, classes);

        log::info!(
            "🗓️ Opening calendar for {} at {} with {} classes",
            entity.display_name(),
            initial_month,
            entity_classes.len()
        );

        Self {
            entity,
            classes: entity_classes,
            state: ViewState::new(initial_month),
            clock,
            calendar_service: CalendarService::new(),
        }
    }

    pub fn entity(&self) -> &CalendarEntity {
        &self.entity
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// The entity's classes before filtering
    pub fn entity_classes(&self) -> &[ClassRecord] {
        &self.classes
    }

    pub fn dispatch(&mut self, action: CalendarAction) {
        let today = self.clock.today();
        self.state.apply(action, today);
    }

    /// Classes passing the committed filters; draft edits have no effect
    pub fn filtered_classes(&self) -> Vec<ClassRecord> {
        filter_classes(&self.classes, self.state.committed_filters())
    }

    /// The 42-cell grid for the current month, with today evaluated now
    pub fn grid(&self) -> CalendarGrid {
        self.calendar_service
            .generate_grid(self.state.current_month(), &self.filtered_classes(), self.clock.today())
    }

    /// Filtered classes on the selected date; empty with no selection
    pub fn selected_day_classes(&self) -> Vec<ClassRecord> {
        match self.state.selected_date() {
            Some(date) => classes_on_date(&self.filtered_classes(), date),
            None => Vec::new(),
        }
    }

    /// Dancer choices for the filter modal
    pub fn available_dancers(&self) -> Vec<DancerRef> {
        available_dancers(&self.entity, &self.classes)
    }
}
