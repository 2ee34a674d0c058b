//! Class filtering against the committed calendar filters.
//!
//! Each of the four categories is checked on its own. A category with no
//! selection lets every class through; a non-empty category requires the
//! class to match at least one selected value. A class is kept only when
//! every category passes.

use shared::{ClassRecord, FilterState};

use super::time_slot::classify_time_slot;

/// Whether a class passes every filter category
pub fn passes_filters(class: &ClassRecord, filters: &FilterState) -> bool {
    dancer_matches(class, filters)
        && time_slot_matches(class, filters)
        && genre_matches(class, filters)
        && level_matches(class, filters)
}

/// Classes that pass the filters, in input order
pub fn filter_classes(classes: &[ClassRecord], filters: &FilterState) -> Vec<ClassRecord> {
    if filters.is_empty() {
        return classes.to_vec();
    }

    let filtered: Vec<ClassRecord> = classes
        .iter()
        .filter(|class| passes_filters(class, filters))
        .cloned()
        .collect();

    log::debug!(
        "Filtered classes: {} of {} pass {} active filter value(s)",
        filtered.len(),
        classes.len(),
        filters.active_count()
    );

    filtered
}

fn dancer_matches(class: &ClassRecord, filters: &FilterState) -> bool {
    filters.dancers.is_empty()
        || class
            .dancers
            .iter()
            .any(|dancer| filters.dancers.contains(&dancer.dancer_id))
}

fn time_slot_matches(class: &ClassRecord, filters: &FilterState) -> bool {
    filters.time_slots.is_empty()
        || filters.time_slots.contains(&classify_time_slot(class.start_time))
}

// A class without a genre never satisfies a genre selection
fn genre_matches(class: &ClassRecord, filters: &FilterState) -> bool {
    if filters.genres.is_empty() {
        return true;
    }
    match class.genre {
        Some(genre) => filters.genres.contains(&genre),
        None => false,
    }
}

fn level_matches(class: &ClassRecord, filters: &FilterState) -> bool {
    filters.levels.is_empty() || filters.levels.contains(&class.level)
}
