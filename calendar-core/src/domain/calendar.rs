//! Month grid generation for the class calendar.
//!
//! A grid always holds 42 cells (six Sunday-first weeks): overflow days
//! from the previous month, every day of the displayed month, then overflow
//! days from the following month(s). Classes are attached to the cell whose
//! canonical date key equals the class date key.

use chrono::{Duration, NaiveDate};
use shared::{
    format_date_key, CalendarDayCell, CalendarDayType, CalendarGrid, ClassRecord, MonthAnchor,
    GRID_CELL_COUNT,
};
use std::collections::HashMap;

/// Calendar service that builds month grids from an already filtered class list
#[derive(Debug, Clone, Default)]
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    /// Generate the 42-cell grid for `anchor`.
    ///
    /// `today` decides which cell is flagged as today. The flag is fixed at
    /// generation time; regenerate the grid when the date changes.
    pub fn generate_grid(
        &self,
        anchor: MonthAnchor,
        classes: &[ClassRecord],
        today: NaiveDate,
    ) -> CalendarGrid {
        let first_day = anchor.first_day();
        let leading = anchor.leading_days() as i64;
        let days_in_month = anchor.days_in_month() as i64;
        let trailing = GRID_CELL_COUNT as i64 - leading - days_in_month;

        log::debug!(
            "Generating calendar grid for {}: {} leading, {} month, {} trailing days",
            anchor,
            leading,
            days_in_month,
            trailing
        );

        let classes_by_date = self.group_classes_by_date(classes);
        let mut cells = Vec::with_capacity(GRID_CELL_COUNT);

        for offset in (1..=leading).rev() {
            let date = first_day - Duration::days(offset);
            cells.push(self.day_cell(
                date,
                CalendarDayType::PaddingBefore,
                today,
                &classes_by_date,
            ));
        }

        for offset in 0..days_in_month {
            let date = first_day + Duration::days(offset);
            cells.push(self.day_cell(date, CalendarDayType::MonthDay, today, &classes_by_date));
        }

        for offset in 0..trailing {
            let date = first_day + Duration::days(days_in_month + offset);
            cells.push(self.day_cell(date, CalendarDayType::PaddingAfter, today, &classes_by_date));
        }

        let attached: usize = cells.iter().map(|cell| cell.classes.len()).sum();
        log::debug!(
            "Generated {} cells for {} with {} of {} classes attached",
            cells.len(),
            anchor,
            attached,
            classes.len()
        );

        CalendarGrid { anchor, cells }
    }

    /// Group classes by their canonical date key
    fn group_classes_by_date<'a>(
        &self,
        classes: &'a [ClassRecord],
    ) -> HashMap<String, Vec<&'a ClassRecord>> {
        let mut classes_by_date: HashMap<String, Vec<&ClassRecord>> = HashMap::new();
        for class in classes {
            classes_by_date.entry(class.date_key()).or_default().push(class);
        }
        classes_by_date
    }

    fn day_cell(
        &self,
        date: NaiveDate,
        day_type: CalendarDayType,
        today: NaiveDate,
        classes_by_date: &HashMap<String, Vec<&ClassRecord>>,
    ) -> CalendarDayCell {
        let date_string = format_date_key(date);
        let classes = classes_by_date
            .get(&date_string)
            .map(|day_classes| day_classes.iter().map(|class| (*class).clone()).collect())
            .unwrap_or_default();

        CalendarDayCell {
            date,
            date_string,
            day_type,
            is_current_month: day_type == CalendarDayType::MonthDay,
            is_today: date == today,
            classes,
        }
    }
}
