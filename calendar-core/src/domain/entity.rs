//! Selecting the classes that belong to the viewed studio or dancer, and the
//! lists derived from them for the filter modal and day-detail panel.

use chrono::NaiveDate;
use shared::{CalendarEntity, ClassRecord, DancerRef};
use std::collections::HashSet;

/// Classes belonging to the entity: a studio's by studio id, a dancer's by
/// membership in the class's dancer list.
pub fn classes_for_entity(entity: &CalendarEntity, classes: &[ClassRecord]) -> Vec<ClassRecord> {
    let selected: Vec<ClassRecord> = match entity {
        CalendarEntity::Studio(studio) => classes
            .iter()
            .filter(|class| class.studio_id == studio.studio_id)
            .cloned()
            .collect(),
        CalendarEntity::Dancer(dancer) => classes
            .iter()
            .filter(|class| class.has_dancer(&dancer.dancer_id))
            .cloned()
            .collect(),
    };

    log::debug!(
        "Selected {} of {} classes for {}",
        selected.len(),
        classes.len(),
        entity.display_name()
    );

    selected
}

/// Distinct dancers teaching the entity's classes, in first-seen order.
///
/// Only a studio calendar offers a dancer filter; a dancer's own calendar
/// gets an empty list.
pub fn available_dancers(entity: &CalendarEntity, classes: &[ClassRecord]) -> Vec<DancerRef> {
    match entity {
        CalendarEntity::Studio(_) => {
            let mut seen: HashSet<&str> = HashSet::new();
            classes
                .iter()
                .flat_map(|class| class.dancers.iter())
                .filter(|dancer| seen.insert(dancer.dancer_id.as_str()))
                .cloned()
                .collect()
        }
        CalendarEntity::Dancer(_) => Vec::new(),
    }
}

/// Classes on a single day, in input order
pub fn classes_on_date(classes: &[ClassRecord], date: NaiveDate) -> Vec<ClassRecord> {
    classes
        .iter()
        .filter(|class| class.class_date == date)
        .cloned()
        .collect()
}
