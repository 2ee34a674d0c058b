use chrono::{NaiveTime, Timelike};
use shared::TimeSlot;

/// Bucket a class start time into morning, afternoon or evening.
///
/// Morning is [06:00, 12:00) and afternoon is [12:00, 18:00). Everything
/// else is evening, including the hours between midnight and 06:00.
pub fn classify_time_slot(start_time: NaiveTime) -> TimeSlot {
    match start_time.hour() {
        6..=11 => TimeSlot::Morning,
        12..=17 => TimeSlot::Afternoon,
        _ => TimeSlot::Evening,
    }
}
