use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Number of cells in a month grid (six full weeks)
pub const GRID_CELL_COUNT: usize = 42;

/// Number of days in a grid row
pub const DAYS_PER_WEEK: usize = 7;

/// Weekday header labels, Sunday first
pub const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Canonical date key used to match classes to calendar cells ("2025-12-15")
pub fn format_date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a start time in "HH:MM" or "HH:MM:SS" form, dropping seconds
pub fn parse_start_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .ok()
        .and_then(|time| NaiveTime::from_hms_opt(time.hour(), time.minute(), 0))
}

/// Dance genre taught in a class
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    Choreography,
    Hiphop,
    #[serde(alias = "GIRLS HIPHOP")]
    GirlsHiphop,
    Breaking,
    Locking,
    Popping,
    House,
    Krump,
    Wacking,
    Voguing,
    Heel,
    Soul,
    Afro,
    #[serde(alias = "K-POP")]
    KPop,
    Contemporary,
    Jazz,
    Dancehall,
}

impl Genre {
    /// All genres in the order the filter modal lists them
    pub const ALL: [Genre; 17] = [
        Genre::Choreography,
        Genre::Hiphop,
        Genre::GirlsHiphop,
        Genre::Breaking,
        Genre::Locking,
        Genre::Popping,
        Genre::House,
        Genre::Krump,
        Genre::Wacking,
        Genre::Voguing,
        Genre::Heel,
        Genre::Soul,
        Genre::Afro,
        Genre::KPop,
        Genre::Contemporary,
        Genre::Jazz,
        Genre::Dancehall,
    ];

    /// Human-readable name for display
    pub fn label(&self) -> &'static str {
        match self {
            Genre::Choreography => "Choreography",
            Genre::Hiphop => "Hip-hop",
            Genre::GirlsHiphop => "Girls Hip-hop",
            Genre::Breaking => "Breaking",
            Genre::Locking => "Locking",
            Genre::Popping => "Popping",
            Genre::House => "House",
            Genre::Krump => "Krump",
            Genre::Wacking => "Waacking",
            Genre::Voguing => "Voguing",
            Genre::Heel => "Heels",
            Genre::Soul => "Soul",
            Genre::Afro => "Afro",
            Genre::KPop => "K-pop",
            Genre::Contemporary => "Contemporary",
            Genre::Jazz => "Jazz",
            Genre::Dancehall => "Dancehall",
        }
    }
}

/// Difficulty level of a class
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Level {
    Basic,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 2] = [Level::Basic, Level::Advanced];

    pub fn label(&self) -> &'static str {
        match self {
            Level::Basic => "Basic",
            Level::Advanced => "Advanced",
        }
    }
}

/// Time-of-day bucket derived from a class start time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 3] = [TimeSlot::Morning, TimeSlot::Afternoon, TimeSlot::Evening];

    /// Option label shown in the filter modal
    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "Morning (6-12)",
            TimeSlot::Afternoon => "Afternoon (12-18)",
            TimeSlot::Evening => "Evening (18-24)",
        }
    }
}

/// A dancer as referenced by a class or viewed as a calendar entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DancerRef {
    pub dancer_id: String,
    /// Representative stage name
    pub main_name: String,
    /// Instagram handle without the leading '@'
    #[serde(default)]
    pub instagram: Option<String>,
}

/// A studio viewed as a calendar entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioRef {
    pub studio_id: String,
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
}

/// The studio or dancer whose calendar is being viewed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "entity_type", rename_all = "lowercase")]
pub enum CalendarEntity {
    Studio(StudioRef),
    Dancer(DancerRef),
}

impl CalendarEntity {
    pub fn id(&self) -> &str {
        match self {
            CalendarEntity::Studio(studio) => &studio.studio_id,
            CalendarEntity::Dancer(dancer) => &dancer.dancer_id,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            CalendarEntity::Studio(studio) => &studio.name,
            CalendarEntity::Dancer(dancer) => &dancer.main_name,
        }
    }

    /// Secondary header line; only studios carry a location
    pub fn location(&self) -> Option<&str> {
        match self {
            CalendarEntity::Studio(studio) => studio.location.as_deref(),
            CalendarEntity::Dancer(_) => None,
        }
    }
}

/// A scheduled class, immutable once ingested
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub class_id: String,
    pub studio_id: String,
    /// Serialized as "YYYY-MM-DD"
    pub class_date: NaiveDate,
    /// Serialized as "HH:MM"
    #[serde(with = "start_time_format")]
    pub start_time: NaiveTime,
    /// Classes may be listed without a genre
    pub genre: Option<Genre>,
    pub level: Level,
    pub dancers: Vec<DancerRef>,
}

impl ClassRecord {
    /// Canonical date key of this class
    pub fn date_key(&self) -> String {
        format_date_key(self.class_date)
    }

    pub fn has_dancer(&self, dancer_id: &str) -> bool {
        self.dancers.iter().any(|d| d.dancer_id == dancer_id)
    }
}

mod start_time_format {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_start_time(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid start time '{}'", raw)))
    }
}

/// Studio summary nested in a class response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioSummary {
    pub studio_id: String,
    pub name: String,
    #[serde(default)]
    pub instagram: Option<String>,
}

/// Class as returned by the backend class endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassResponse {
    pub class_id: String,
    #[serde(default)]
    pub studio_id: Option<String>,
    /// ISO-8601 date-time, e.g. "2025-01-15T14:00:00" or "2025-01-15T14:00:00+09:00"
    pub class_datetime: String,
    #[serde(default)]
    pub genre: Option<Genre>,
    pub level: Level,
    #[serde(default)]
    pub dancers: Vec<DancerRef>,
    #[serde(default)]
    pub studio: Option<StudioSummary>,
}

/// Reasons a class response cannot become a `ClassRecord`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassIngestError {
    #[error("class {class_id} has no studio id")]
    MissingStudioId { class_id: String },
    #[error("class {class_id} has an invalid date-time '{raw}'")]
    InvalidDateTime { class_id: String, raw: String },
}

/// Parse the wall-clock date-time of a class as written, ignoring any offset
fn parse_class_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(with_offset) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_local());
    }
    raw.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M").ok())
        .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").ok())
}

impl TryFrom<ClassResponse> for ClassRecord {
    type Error = ClassIngestError;

    fn try_from(response: ClassResponse) -> Result<Self, Self::Error> {
        let studio_id = response
            .studio_id
            .filter(|id| !id.is_empty())
            .or_else(|| response.studio.map(|studio| studio.studio_id))
            .ok_or_else(|| ClassIngestError::MissingStudioId {
                class_id: response.class_id.clone(),
            })?;

        let invalid = || ClassIngestError::InvalidDateTime {
            class_id: response.class_id.clone(),
            raw: response.class_datetime.clone(),
        };
        let datetime = parse_class_datetime(&response.class_datetime).ok_or_else(invalid)?;
        let start_time = NaiveTime::from_hms_opt(datetime.hour(), datetime.minute(), 0)
            .ok_or_else(invalid)?;

        Ok(ClassRecord {
            class_id: response.class_id,
            studio_id,
            class_date: datetime.date(),
            start_time,
            genre: response.genre,
            level: response.level,
            dancers: response.dancers,
        })
    }
}

/// Convert a batch of responses, keeping valid records and reporting rejected ones
pub fn ingest_classes(responses: Vec<ClassResponse>) -> (Vec<ClassRecord>, Vec<ClassIngestError>) {
    let mut records = Vec::with_capacity(responses.len());
    let mut rejected = Vec::new();

    for response in responses {
        match ClassRecord::try_from(response) {
            Ok(record) => records.push(record),
            Err(err) => rejected.push(err),
        }
    }

    (records, rejected)
}

/// One value toggled within a single filter category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterToggle {
    Dancer(String),
    TimeSlot(TimeSlot),
    Genre(Genre),
    Level(Level),
}

/// Calendar filter selections. An empty category means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub dancers: BTreeSet<String>,
    #[serde(default)]
    pub time_slots: BTreeSet<TimeSlot>,
    #[serde(default)]
    pub genres: BTreeSet<Genre>,
    #[serde(default)]
    pub levels: BTreeSet<Level>,
}

fn toggle_member<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if set.contains(&value) {
        set.remove(&value);
    } else {
        set.insert(value);
    }
}

impl FilterState {
    /// Add the value to its category, or remove it if already selected
    pub fn toggle(&mut self, toggle: FilterToggle) {
        match toggle {
            FilterToggle::Dancer(id) => toggle_member(&mut self.dancers, id),
            FilterToggle::TimeSlot(slot) => toggle_member(&mut self.time_slots, slot),
            FilterToggle::Genre(genre) => toggle_member(&mut self.genres, genre),
            FilterToggle::Level(level) => toggle_member(&mut self.levels, level),
        }
    }

    pub fn clear(&mut self) {
        self.dancers.clear();
        self.time_slots.clear();
        self.genres.clear();
        self.levels.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of selected values across all categories
    pub fn active_count(&self) -> usize {
        self.dancers.len() + self.time_slots.len() + self.genres.len() + self.levels.len()
    }
}

/// Year and month shown by a calendar; the day is not part of the anchor.
///
/// Always a real month with room for a full grid on either side, so every
/// anchor can be rendered. Construct through `new`, `from_date` or `shift`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "MonthAnchorFields", try_from = "MonthAnchorFields")]
pub struct MonthAnchor {
    /// First day of the month
    first_day: NaiveDate,
}

/// Wire shape of a `MonthAnchor`; converted back through `MonthAnchor::new`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthAnchorFields {
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid calendar month {year}-{month:02}")]
pub struct InvalidMonthAnchor {
    pub year: i32,
    pub month: u32,
}

impl MonthAnchor {
    /// Anchor for `year`/`month`; `None` for a month outside 1-12 or a
    /// year outside the renderable range
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .filter(|first_day| (Self::earliest()..=Self::latest()).contains(first_day))
            .map(|first_day| Self { first_day })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::clamped(date - Duration::days(date.day0() as i64))
    }

    /// First day of the earliest anchor: leaves a week of dates before it
    fn earliest() -> NaiveDate {
        // NaiveDate::MIN is January 1st; this is February 1st of that year
        NaiveDate::MIN + Duration::days(31)
    }

    /// First day of the latest anchor: leaves six weeks of dates after it
    fn latest() -> NaiveDate {
        // NaiveDate::MAX is December 31st; this is November 1st of that year
        NaiveDate::MAX - Duration::days(60)
    }

    fn clamped(first_day: NaiveDate) -> Self {
        Self {
            first_day: first_day.clamp(Self::earliest(), Self::latest()),
        }
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// 1-12
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// Months since year 0, used for differencing
    fn month_index(&self) -> i64 {
        self.year() as i64 * 12 + (self.month() as i64 - 1)
    }

    /// Anchor `delta` months away (negative moves backwards), stopping at
    /// the earliest or latest renderable month
    pub fn shift(&self, delta: i32) -> Self {
        let months = Months::new(delta.unsigned_abs());
        let shifted = if delta >= 0 {
            self.first_day.checked_add_months(months).unwrap_or_else(Self::latest)
        } else {
            self.first_day.checked_sub_months(months).unwrap_or_else(Self::earliest)
        };
        Self::clamped(shifted)
    }

    /// Signed number of months from `self` to `other`
    pub fn months_until(&self, other: MonthAnchor) -> i32 {
        (other.month_index() - self.month_index()) as i32
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn is_leap_year(&self) -> bool {
        let year = self.year();
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    pub fn days_in_month(&self) -> u32 {
        match self.month() {
            2 => {
                if self.is_leap_year() {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Weekday index of the 1st (0 = Sunday)
    pub fn leading_days(&self) -> u32 {
        self.first_day.weekday().num_days_from_sunday()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    pub fn month_name(&self) -> &'static str {
        match self.month() {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            _ => "December",
        }
    }
}

impl From<MonthAnchor> for MonthAnchorFields {
    fn from(anchor: MonthAnchor) -> Self {
        Self {
            year: anchor.year(),
            month: anchor.month(),
        }
    }
}

impl TryFrom<MonthAnchorFields> for MonthAnchor {
    type Error = InvalidMonthAnchor;

    fn try_from(fields: MonthAnchorFields) -> Result<Self, Self::Error> {
        MonthAnchor::new(fields.year, fields.month).ok_or(InvalidMonthAnchor {
            year: fields.year,
            month: fields.month,
        })
    }
}

impl fmt::Display for MonthAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year())
    }
}

/// Position of a cell relative to the displayed month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarDayType {
    /// Overflow day from the previous month
    PaddingBefore,
    /// Day of the displayed month
    MonthDay,
    /// Overflow day from the following month
    PaddingAfter,
}

/// A single cell of the month grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDayCell {
    pub date: NaiveDate,
    /// Canonical "YYYY-MM-DD" form of `date`
    pub date_string: String,
    pub day_type: CalendarDayType,
    pub is_current_month: bool,
    /// Evaluated once, when the grid was generated
    pub is_today: bool,
    /// Classes taking place on this date
    pub classes: Vec<ClassRecord>,
}

impl CalendarDayCell {
    pub fn has_classes(&self) -> bool {
        !self.classes.is_empty()
    }
}

/// The 42-cell month grid, Sunday-first rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarGrid {
    pub anchor: MonthAnchor,
    pub cells: Vec<CalendarDayCell>,
}

impl CalendarGrid {
    /// The cells as six rows of seven
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDayCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn leading_count(&self) -> usize {
        self.cells
            .iter()
            .take_while(|cell| cell.day_type == CalendarDayType::PaddingBefore)
            .count()
    }

    pub fn trailing_count(&self) -> usize {
        self.cells
            .iter()
            .rev()
            .take_while(|cell| cell.day_type == CalendarDayType::PaddingAfter)
            .count()
    }

    pub fn cell_for(&self, date: NaiveDate) -> Option<&CalendarDayCell> {
        self.cells.iter().find(|cell| cell.date == date)
    }

    pub fn today(&self) -> Option<&CalendarDayCell> {
        self.cells.iter().find(|cell| cell.is_today)
    }
}
