use chrono::NaiveDate;
use eventplan::models::{Answers, EventPlanRequest, ServiceOption, VendorCategory};
use eventplan::templates::{base_task_set, EventCategory};
use eventplan::timeline::generate_timeline;
use std::collections::HashSet;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn request(event_type: &str, budget: f64, guests: u32, answers: Answers) -> EventPlanRequest {
    EventPlanRequest {
        event_type: event_type.into(),
        event_date: date(2025, 12, 25),
        location: "Austin".into(),
        guest_count: guests,
        budget,
        answers,
    }
}

#[test]
fn test_wedding_entertainment_end_to_end() {
    let req = request("Wedding", 10000.0, 100, Answers::new().with(ServiceOption::LiveBandOrDj));
    let timeline = generate_timeline(&req);

    let pos = timeline
        .tasks
        .iter()
        .position(|t| t.description == "Book entertainment (DJ or band)")
        .expect("entertainment task");
    let task = &timeline.tasks[pos];
    assert_eq!(task.deadline, date(2025, 9, 25));
    assert_eq!(task.deadline.to_string(), "2025-09-25");
    assert_eq!(task.estimated_cost, 700.0);
    assert_eq!(task.suggested_vendor_category, Some(VendorCategory::Entertainment));

    assert!(timeline.tasks[..pos].iter().all(|t| t.deadline <= task.deadline));
    assert!(timeline.tasks[pos + 1..].iter().all(|t| t.deadline >= task.deadline));
    assert_eq!(timeline.tasks.len(), base_task_set().len() + 1);
}

#[test]
fn test_venue_and_invitation_costs() {
    let timeline = generate_timeline(&request("Dinner Party", 5000.0, 100, Answers::new()));

    let venue = timeline.tasks.iter().find(|t| t.description == "Research and book a venue").unwrap();
    assert_eq!(venue.estimated_cost, 1500.0);
    assert_eq!(venue.suggested_vendor_category, Some(VendorCategory::Venue));

    let invites = timeline.tasks.iter().find(|t| t.description == "Send out invitations").unwrap();
    assert_eq!(invites.estimated_cost, 500.0);
}

#[test]
fn test_photography_gated_by_answer() {
    let with = generate_timeline(&request(
        "Beach Wedding",
        20000.0,
        80,
        Answers::new().with(ServiceOption::PhotographyVideography),
    ));
    assert!(with
        .tasks
        .iter()
        .any(|t| t.suggested_vendor_category == Some(VendorCategory::Photography)));

    let without = generate_timeline(&request("Beach Wedding", 20000.0, 80, Answers::new()));
    assert!(!without
        .tasks
        .iter()
        .any(|t| t.suggested_vendor_category == Some(VendorCategory::Photography)));

    let flags = vec![("Photography/Videography Services", false)];
    let answers = Answers::from_flags(flags, true).unwrap();
    let unselected = generate_timeline(&request("Wedding", 20000.0, 80, answers));
    assert_eq!(unselected.tasks.len(), base_task_set().len());
}

#[test]
fn test_unmatched_event_type_gets_base_set_only() {
    let all = ServiceOption::ALL.iter().fold(Answers::new(), |a, o| a.with(*o));
    let timeline = generate_timeline(&request("Bar Mitzvah", 8000.0, 120, all));
    assert_eq!(timeline.tasks.len(), base_task_set().len());
    assert_eq!(base_task_set().len(), 15);
}

#[test]
fn test_category_options_do_not_leak_across_categories() {
    // Wedding options selected on a corporate event add nothing.
    let answers = Answers::new()
        .with(ServiceOption::LiveBandOrDj)
        .with(ServiceOption::WeddingCake)
        .with(ServiceOption::KeynoteSpeaker);
    let timeline = generate_timeline(&request("Annual Corporate Summit", 50000.0, 200, answers));
    assert_eq!(timeline.tasks.len(), base_task_set().len() + 1);
    let speaker = timeline.tasks.iter().find(|t| t.description == "Book a keynote speaker").unwrap();
    assert_eq!(speaker.estimated_cost, 7500.0);
    assert_eq!(speaker.deadline, date(2025, 8, 25));
}

#[test]
fn test_category_matching() {
    assert_eq!(EventCategory::from_event_type("WEDDING reception"), Some(EventCategory::Wedding));
    assert_eq!(EventCategory::from_event_type("Tech Conference"), Some(EventCategory::Corporate));
    assert_eq!(EventCategory::from_event_type("corporate offsite"), Some(EventCategory::Corporate));
    assert_eq!(EventCategory::from_event_type("Sweet 16 Birthday"), Some(EventCategory::Birthday));
    assert_eq!(EventCategory::from_event_type("High School Graduation"), Some(EventCategory::Graduation));
    assert_eq!(EventCategory::from_event_type("Wedding Birthday Brunch"), Some(EventCategory::Wedding));
    assert_eq!(EventCategory::from_event_type("Bar Mitzvah"), None);
    assert_eq!(EventCategory::from_event_type(""), None);
}

#[test]
fn test_per_guest_costs_scale_with_guests() {
    let answers = Answers::new().with(ServiceOption::BirthdayCake).with(ServiceOption::PartyFavors);
    let timeline = generate_timeline(&request("Birthday Party", 1000.0, 25, answers));
    let cake = timeline.tasks.iter().find(|t| t.description == "Order the birthday cake").unwrap();
    assert_eq!(cake.estimated_cost, 75.0);
    assert_eq!(cake.deadline, date(2025, 12, 11));
    let favors = timeline.tasks.iter().find(|t| t.description == "Prepare party favors").unwrap();
    assert_eq!(favors.estimated_cost, 100.0);
}

#[test]
fn test_sorted_uncompleted_unique_ids() {
    let answers = ServiceOption::ALL.iter().fold(Answers::new(), |a, o| a.with(*o));
    let timeline = generate_timeline(&request("Wedding", 30000.0, 150, answers));

    assert!(timeline.tasks.windows(2).all(|w| w[0].deadline <= w[1].deadline));
    assert!(timeline.tasks.iter().all(|t| !t.completed));
    let ids: HashSet<&str> = timeline.tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids.len(), timeline.tasks.len());

    // Thank-you notes are the only task after the event.
    let last = timeline.tasks.last().unwrap();
    assert_eq!(last.description, "Send thank-you notes");
    assert_eq!(last.deadline, date(2026, 1, 8));
}

#[test]
fn test_same_deadline_keeps_template_order() {
    let timeline = generate_timeline(&request("Garden Party", 1000.0, 10, Answers::new()));
    let first: Vec<&str> = timeline.tasks.iter().take(2).map(|t| t.description.as_str()).collect();
    assert_eq!(first, vec!["Set the event budget", "Research and book a venue"]);
}

#[test]
fn test_timeline_summary() {
    let mut timeline = generate_timeline(&request("Gala", 10000.0, 100, Answers::new()));
    assert_eq!(timeline.completed_count(), 0);
    assert_eq!(timeline.progress(), 0.0);
    let total: f64 = timeline.tasks.iter().map(|t| t.estimated_cost).sum();
    assert_eq!(timeline.total_estimated_cost(), total);

    timeline.tasks[0].completed = true;
    assert_eq!(timeline.completed_count(), 1);
    assert!(timeline.progress() > 0.0);
}

#[test]
fn test_serialized_deadline_is_iso() {
    let timeline = generate_timeline(&request("Wedding", 10000.0, 100, Answers::new()));
    let json = serde_json::to_value(&timeline).unwrap();
    assert_eq!(json["tasks"][0]["deadline"], "2025-06-25");
    assert_eq!(json["tasks"][0]["completed"], false);
}
