use chrono::NaiveDate;

use crate::deadline::Offset;
use crate::models::{CostRule, EventTask, TaskTemplate, VendorCategory};

static BASE_TEMPLATES: [TaskTemplate; 15] = [
    TaskTemplate {
        description: "Set the event budget",
        offset: Offset::months_before(6),
        cost: CostRule::Flat(0.0),
        vendor_category: None,
    },
    TaskTemplate {
        description: "Research and book a venue",
        offset: Offset::months_before(6),
        cost: CostRule::BudgetShare(3000),
        vendor_category: Some(VendorCategory::Venue),
    },
    TaskTemplate {
        description: "Create the guest list",
        offset: Offset::months_before(5),
        cost: CostRule::Flat(0.0),
        vendor_category: None,
    },
    TaskTemplate {
        description: "Hire a caterer",
        offset: Offset::months_before(4),
        cost: CostRule::BudgetShare(2500),
        vendor_category: Some(VendorCategory::Catering),
    },
    TaskTemplate {
        description: "Send save-the-dates",
        offset: Offset::months_before(4),
        cost: CostRule::PerGuest(2.0),
        vendor_category: Some(VendorCategory::Stationery),
    },
    TaskTemplate {
        description: "Plan the decor and theme",
        offset: Offset::months_before(3),
        cost: CostRule::BudgetShare(500),
        vendor_category: Some(VendorCategory::Decor),
    },
    TaskTemplate {
        description: "Arrange rentals (tables, chairs, linens)",
        offset: Offset::months_before(2),
        cost: CostRule::BudgetShare(500),
        vendor_category: Some(VendorCategory::Rentals),
    },
    TaskTemplate {
        description: "Send out invitations",
        offset: Offset::months_before(2),
        cost: CostRule::PerGuest(5.0),
        vendor_category: Some(VendorCategory::Stationery),
    },
    TaskTemplate {
        description: "Finalize the menu with the caterer",
        offset: Offset::weeks_before(6),
        cost: CostRule::Flat(0.0),
        vendor_category: Some(VendorCategory::Catering),
    },
    TaskTemplate {
        description: "Review the budget and set aside contingency funds",
        offset: Offset::months_before(1),
        cost: CostRule::BudgetShare(500),
        vendor_category: None,
    },
    TaskTemplate {
        description: "Track RSVPs and confirm the final guest count",
        offset: Offset::weeks_before(3),
        cost: CostRule::Flat(0.0),
        vendor_category: None,
    },
    TaskTemplate {
        description: "Create the event day schedule",
        offset: Offset::weeks_before(2),
        cost: CostRule::Flat(0.0),
        vendor_category: None,
    },
    TaskTemplate {
        description: "Confirm details with all vendors",
        offset: Offset::weeks_before(1),
        cost: CostRule::Flat(0.0),
        vendor_category: None,
    },
    TaskTemplate {
        description: "Prepare a day-of emergency kit",
        offset: Offset::days_before(3),
        cost: CostRule::Flat(50.0),
        vendor_category: None,
    },
    TaskTemplate {
        description: "Send thank-you notes",
        offset: Offset::weeks_after(2),
        cost: CostRule::PerGuest(2.0),
        vendor_category: Some(VendorCategory::Stationery),
    },
];

/// Templates every event gets, whatever its type.
pub fn base_task_set() -> &'static [TaskTemplate] {
    &BASE_TEMPLATES
}

/// Expands the base set for one event.
pub fn base_tasks(event_date: NaiveDate, budget: f64, guest_count: u32) -> Vec<EventTask> {
    BASE_TEMPLATES
        .iter()
        .map(|t| t.expand(event_date, budget, guest_count))
        .collect()
}
