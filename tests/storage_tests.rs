use eventplan::commands::{cmd_plan, cmd_remove, cmd_toggle};
use eventplan::config::Config;
use eventplan::error::PlanError;
use eventplan::models::{Answers, EventPlanRequest, ServiceOption, SavedTimeline};
use eventplan::storage::{db_path, delete_database, load_timeline, load_timelines, save_timeline};
use eventplan::timeline::generate_timeline;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::sync::Mutex;
use tempfile::TempDir;

// Tests share the EVENTPLAN_DB environment variable, so run them serially.
static TEST_MUTEX: Mutex<()> = Mutex::new(());

fn with_test_db<F>(f: F)
where
    F: FnOnce(),
{
    let _guard = TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let dir = TempDir::new().unwrap();
    env::set_var("EVENTPLAN_DB", dir.path().join("timelines.json"));

    f();

    env::remove_var("EVENTPLAN_DB");
}

fn wedding_request() -> EventPlanRequest {
    EventPlanRequest::from_form(
        "Wedding",
        "2025-12-25",
        "Austin",
        100,
        10000.0,
        vec![("Live Band or DJ", true), ("Photography/Videography Services", true)],
        true,
    )
    .unwrap()
}

#[test]
fn test_plan_and_save() {
    with_test_db(|| {
        let timeline =
            cmd_plan(&wedding_request(), Some("ours".into()), false, &Config::default(), true)
                .unwrap();

        let saved = load_timeline("ours").unwrap();
        assert_eq!(saved.event_type, "Wedding");
        assert_eq!(saved.guest_count, 100);
        assert_eq!(saved.timeline.tasks.len(), timeline.tasks.len());

        let ids: Vec<String> = saved.timeline.tasks.iter().map(|t| t.id.clone()).collect();
        let expected: Vec<String> = (1..=timeline.tasks.len()).map(|i| i.to_string()).collect();
        assert_eq!(ids, expected);

        // the returned timeline is the stored one, ids included
        assert_eq!(timeline, saved.timeline);
    });
}

#[test]
fn test_printed_ids_can_be_toggled() {
    with_test_db(|| {
        let timeline =
            cmd_plan(&wedding_request(), Some("ours".into()), true, &Config::default(), true)
                .unwrap();
        let first = &timeline.tasks[0];
        assert_eq!(first.description, "Set the event budget");
        assert!(cmd_toggle("ours", &first.id, true).unwrap());
    });
}

#[test]
fn test_config_data_dir_is_used() {
    let _guard = TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let config_dir = TempDir::new().unwrap();
    let data_dir = TempDir::new().unwrap();
    let config_path = config_dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!("data_dir = {:?}\n", data_dir.path().to_str().unwrap()),
    )
    .unwrap();
    env::remove_var("EVENTPLAN_DB");
    env::set_var("EVENTPLAN_CONFIG", &config_path);

    assert_eq!(db_path(), data_dir.path().join("timelines.json"));
    let req = wedding_request();
    save_timeline(SavedTimeline::new("plan", &req, generate_timeline(&req))).unwrap();
    assert!(data_dir.path().join("timelines.json").exists());
    assert_eq!(load_timeline("plan").unwrap().timeline.tasks.len(), 17);

    env::remove_var("EVENTPLAN_CONFIG");
}

#[test]
fn test_strict_map_reports_first_unknown_label() {
    let mut flags = HashMap::new();
    flags.insert("Zebra Rides".to_string(), true);
    flags.insert("Live Band or DJ".to_string(), true);
    flags.insert("Acrobats".to_string(), true);
    flags.insert("Mariachi".to_string(), false);

    for _ in 0..10 {
        let err = Answers::from_map(&flags, true).unwrap_err();
        assert!(matches!(err, PlanError::UnknownOption(label) if label == "Acrobats"));
    }

    let lenient = Answers::from_map(&flags, false).unwrap();
    assert_eq!(lenient, Answers::new().with(ServiceOption::LiveBandOrDj));
}

#[test]
fn test_plan_without_save_writes_nothing() {
    with_test_db(|| {
        cmd_plan(&wedding_request(), None, true, &Config::default(), true).unwrap();
        assert!(load_timelines().unwrap().is_empty());
    });
}

#[test]
fn test_save_replaces_same_name() {
    with_test_db(|| {
        let req = wedding_request();
        save_timeline(SavedTimeline::new("plan", &req, generate_timeline(&req))).unwrap();

        let mut smaller = req.clone();
        smaller.answers = Answers::new();
        save_timeline(SavedTimeline::new("plan", &smaller, generate_timeline(&smaller))).unwrap();

        let all = load_timelines().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].timeline.tasks.len(), 15);
    });
}

#[test]
fn test_toggle_persists() {
    with_test_db(|| {
        cmd_plan(&wedding_request(), Some("ours".into()), false, &Config::default(), true)
            .unwrap();

        assert!(cmd_toggle("ours", "3", true).unwrap());
        let saved = load_timeline("ours").unwrap();
        assert!(saved.timeline.tasks[2].completed);
        assert_eq!(saved.timeline.completed_count(), 1);

        assert!(!cmd_toggle("ours", "3", true).unwrap());
        assert_eq!(load_timeline("ours").unwrap().timeline.completed_count(), 0);
    });
}

#[test]
fn test_toggle_missing() {
    with_test_db(|| {
        assert!(matches!(cmd_toggle("nope", "1", true), Err(PlanError::TimelineNotFound(_))));

        cmd_plan(&wedding_request(), Some("ours".into()), false, &Config::default(), true)
            .unwrap();
        assert!(matches!(cmd_toggle("ours", "999", true), Err(PlanError::TaskNotFound { .. })));
    });
}

#[test]
fn test_remove_and_reset() {
    with_test_db(|| {
        let req = wedding_request();
        save_timeline(SavedTimeline::new("a", &req, generate_timeline(&req))).unwrap();
        save_timeline(SavedTimeline::new("b", &req, generate_timeline(&req))).unwrap();

        cmd_remove("a", true).unwrap();
        let names: Vec<String> = load_timelines().unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["b".to_string()]);
        assert!(matches!(cmd_remove("a", true), Err(PlanError::TimelineNotFound(_))));

        delete_database().unwrap();
        assert!(load_timelines().unwrap().is_empty());
    });
}

#[test]
fn test_from_form_validation() {
    let no_answers = Vec::<(&str, bool)>::new();
    let bad_date =
        EventPlanRequest::from_form("Wedding", "12/25/2025", "", 10, 100.0, no_answers, false);
    assert!(matches!(bad_date, Err(PlanError::InvalidDate { .. })));

    let typo = vec![("Live Band or D.J.", true)];
    let strict =
        EventPlanRequest::from_form("Wedding", "2025-12-25", "", 10, 100.0, typo.clone(), true);
    assert!(matches!(strict, Err(PlanError::UnknownOption(label)) if label == "Live Band or D.J."));

    let lenient =
        EventPlanRequest::from_form("Wedding", "2025-12-25", "", 10, 100.0, typo, false).unwrap();
    assert_eq!(lenient.answers, Answers::new());

    let band = vec![("Live Band or DJ", true)];
    let selected =
        EventPlanRequest::from_form("Wedding", "2025-12-25", "", 10, 100.0, band, true).unwrap();
    assert!(selected.answers.contains(ServiceOption::LiveBandOrDj));
}
