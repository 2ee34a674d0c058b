use chrono::{NaiveDate, NaiveTime};
use class_calendar_core::{CalendarAction, CalendarConfig, CalendarView};
use shared::{
    ingest_classes, CalendarEntity, ClassRecord, ClassResponse, DancerRef, FilterToggle, Genre,
    Level, MonthAnchor, StudioRef, TimeSlot,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn dancer(id: &str, name: &str) -> DancerRef {
    DancerRef {
        dancer_id: id.to_string(),
        main_name: name.to_string(),
        instagram: Some(format!("{}_dance", name.to_lowercase())),
    }
}

fn class(
    id: &str,
    studio_id: &str,
    class_date: NaiveDate,
    hour: u32,
    genre: Option<Genre>,
    level: Level,
    dancers: Vec<DancerRef>,
) -> ClassRecord {
    ClassRecord {
        class_id: id.to_string(),
        studio_id: studio_id.to_string(),
        class_date,
        start_time: NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
        genre,
        level,
        dancers,
    }
}

fn studio_entity() -> CalendarEntity {
    CalendarEntity::Studio(StudioRef {
        studio_id: "s1".to_string(),
        name: "Just Jerk Studio".to_string(),
        location: Some("Hapjeong".to_string()),
        instagram: None,
    })
}

fn schedule() -> Vec<ClassRecord> {
    let ari = || dancer("d1", "Ari");
    let bora = || dancer("d2", "Bora");
    vec![
        class("c1", "s1", date(2025, 10, 17), 10, Some(Genre::Hiphop), Level::Basic, vec![ari()]),
        class("c2", "s1", date(2025, 10, 17), 20, None, Level::Advanced, vec![bora()]),
        class(
            "c3",
            "s1",
            date(2025, 10, 20),
            19,
            Some(Genre::Jazz),
            Level::Basic,
            vec![bora(), ari()],
        ),
        class(
            "c4",
            "s2",
            date(2025, 10, 17),
            19,
            Some(Genre::Jazz),
            Level::Basic,
            vec![dancer("d3", "Cho")],
        ),
        class(
            "c5",
            "s1",
            date(2026, 1, 9),
            13,
            Some(Genre::House),
            Level::Advanced,
            vec![dancer("d4", "Dami")],
        ),
    ]
}

fn studio_view(today: NaiveDate) -> CalendarView {
    CalendarView::new(studio_entity(), &schedule(), &pinned_config(today))
}

fn pinned_config(today: NaiveDate) -> CalendarConfig {
    CalendarConfig {
        pinned_today: Some(today),
        initial_month: None,
    }
}

fn ids(classes: &[ClassRecord]) -> Vec<&str> {
    classes.iter().map(|c| c.class_id.as_str()).collect()
}

#[test]
fn test_studio_calendar_opens_on_current_month() {
    init_logging();
    let view = studio_view(date(2025, 10, 17));

    assert_eq!(view.state().current_month(), MonthAnchor::new(2025, 10).unwrap());
    assert_eq!(ids(view.entity_classes()), vec!["c1", "c2", "c3", "c5"]);

    let grid = view.grid();
    assert_eq!(grid.cells.len(), 42);
    let today = grid.today().unwrap();
    assert_eq!(today.date_string, "2025-10-17");
    assert_eq!(ids(&today.classes), vec!["c1", "c2"]);
}

#[test]
fn test_available_dancers_for_studio() {
    init_logging();
    let view = studio_view(date(2025, 10, 17));
    let names: Vec<String> = view.available_dancers().into_iter().map(|d| d.main_name).collect();
    assert_eq!(names, vec!["Ari", "Bora", "Dami"]);
}

#[test]
fn test_dancer_calendar() {
    init_logging();
    let entity = CalendarEntity::Dancer(dancer("d2", "Bora"));
    let view = CalendarView::new(entity, &schedule(), &pinned_config(date(2025, 10, 17)));

    assert_eq!(ids(view.entity_classes()), vec!["c2", "c3"]);
    assert!(view.available_dancers().is_empty());
}

#[test]
fn test_click_date_opens_and_toggles_detail_panel() {
    init_logging();
    let mut view = studio_view(date(2025, 10, 17));
    assert!(view.selected_day_classes().is_empty());

    view.dispatch(CalendarAction::ClickDate(date(2025, 10, 20)));
    assert!(view.state().is_day_detail_open());
    assert_eq!(ids(&view.selected_day_classes()), vec!["c3"]);

    view.dispatch(CalendarAction::ClickDate(date(2025, 10, 20)));
    assert!(!view.state().is_day_detail_open());

    view.dispatch(CalendarAction::ClickDate(date(2025, 10, 21)));
    assert!(view.state().is_day_detail_open());
    assert!(view.selected_day_classes().is_empty());

    view.dispatch(CalendarAction::CloseDayDetailPanel);
    assert!(!view.state().is_day_detail_open());
    assert_eq!(view.state().selected_date(), Some(date(2025, 10, 21)));
}

#[test]
fn test_go_to_today_from_three_months_ahead() {
    init_logging();
    let today = date(2025, 10, 17);
    let mut view = studio_view(today);

    for _ in 0..3 {
        view.dispatch(CalendarAction::ChangeMonth(1));
    }
    assert_eq!(view.state().current_month(), MonthAnchor::new(2026, 1).unwrap());
    assert_eq!(ids(&view.grid().cell_for(date(2026, 1, 9)).unwrap().classes), vec!["c5"]);

    view.dispatch(CalendarAction::GoToToday);
    assert_eq!(view.state().current_month(), MonthAnchor::new(2025, 10).unwrap());
    assert_eq!(view.state().selected_date(), Some(today));
    assert!(!view.state().is_day_detail_open());
    assert_eq!(ids(&view.selected_day_classes()), vec!["c1", "c2"]);
}

#[test]
fn test_draft_filters_do_not_reach_grid_until_applied() {
    init_logging();
    let mut view = studio_view(date(2025, 10, 17));
    let unfiltered = view.grid();

    view.dispatch(CalendarAction::OpenFilterModal);
    view.dispatch(CalendarAction::ToggleDraftCategory(FilterToggle::TimeSlot(TimeSlot::Evening)));
    assert_eq!(view.grid(), unfiltered);

    view.dispatch(CalendarAction::ApplyFilters);
    let filtered = view.grid();
    let on_17th = filtered.cell_for(date(2025, 10, 17)).unwrap();
    assert_eq!(ids(&on_17th.classes), vec!["c2"]);
    assert_eq!(ids(&filtered.cell_for(date(2025, 10, 20)).unwrap().classes), vec!["c3"]);
}

#[test]
fn test_cancelled_draft_leaves_committed_filters_unchanged() {
    init_logging();
    let mut view = studio_view(date(2025, 10, 17));
    let before = view.state().committed_filters().clone();

    view.dispatch(CalendarAction::OpenFilterModal);
    view.dispatch(CalendarAction::ToggleDraftCategory(FilterToggle::Dancer("d1".to_string())));
    view.dispatch(CalendarAction::ToggleDraftCategory(FilterToggle::Level(Level::Advanced)));
    view.dispatch(CalendarAction::CloseFilterModal);

    assert_eq!(view.state().committed_filters(), &before);
    assert_eq!(view.filtered_classes().len(), 4);

    // Reopening starts again from the committed filters
    view.dispatch(CalendarAction::OpenFilterModal);
    assert_eq!(view.state().draft_filters(), Some(&before));
}

#[test]
fn test_genre_filter_hides_classes_without_genre() {
    init_logging();
    let mut view = studio_view(date(2025, 10, 17));
    view.dispatch(CalendarAction::ClickDate(date(2025, 10, 17)));

    view.dispatch(CalendarAction::OpenFilterModal);
    view.dispatch(CalendarAction::ToggleDraftCategory(FilterToggle::Genre(Genre::Hiphop)));
    view.dispatch(CalendarAction::ApplyFilters);

    assert_eq!(ids(&view.selected_day_classes()), vec!["c1"]);
}

#[test]
fn test_ingested_classes_feed_the_calendar() {
    init_logging();
    let json = r#"[
        {"class_id": "r1", "studio_id": "s1", "class_datetime": "2025-10-03T07:30:00",
         "genre": "K-POP", "level": "BASIC",
         "dancers": [{"dancer_id": "d9", "main_name": "Eun"}]},
        {"class_id": "r2", "class_datetime": "2025-10-04T18:00:00+09:00", "genre": null,
         "level": "ADVANCED", "studio": {"studio_id": "s1", "name": "Just Jerk Studio"}},
        {"class_id": "r3", "studio_id": "s1", "class_datetime": "not a date", "level": "BASIC"}
    ]"#;
    let responses: Vec<ClassResponse> = serde_json::from_str(json).unwrap();
    let (records, rejected) = ingest_classes(responses);
    assert_eq!(records.len(), 2);
    assert_eq!(rejected.len(), 1);

    let view = CalendarView::new(studio_entity(), &records, &pinned_config(date(2025, 10, 1)));
    let grid = view.grid();
    assert_eq!(ids(&grid.cell_for(date(2025, 10, 3)).unwrap().classes), vec!["r1"]);
    assert_eq!(ids(&grid.cell_for(date(2025, 10, 4)).unwrap().classes), vec!["r2"]);
}

#[test]
fn test_configured_initial_month() {
    init_logging();
    let config = CalendarConfig {
        pinned_today: Some(date(2025, 10, 17)),
        initial_month: MonthAnchor::new(2026, 1),
    };
    let view = CalendarView::new(studio_entity(), &schedule(), &config);
    assert_eq!(view.state().current_month(), MonthAnchor::new(2026, 1).unwrap());
    assert!(view.grid().today().is_none());
}

#[test]
fn test_far_month_jump_still_renders() {
    init_logging();
    let mut view = studio_view(date(2025, 10, 17));

    view.dispatch(CalendarAction::ChangeMonth(4_000_000));
    let grid = view.grid();
    assert_eq!(grid.cells.len(), 42);
    assert_eq!(grid.anchor, view.state().current_month());

    view.dispatch(CalendarAction::ChangeMonth(-8_000_000));
    assert_eq!(view.grid().cells.len(), 42);

    view.dispatch(CalendarAction::GoToToday);
    assert_eq!(view.state().current_month(), MonthAnchor::new(2025, 10).unwrap());
    assert_eq!(ids(&view.selected_day_classes()), vec!["c1", "c2"]);
}
