use crate::deadline::Offset;
use crate::models::{
    CostRule, EventPlanRequest, EventTask, ServiceOption, TaskTemplate, VendorCategory,
};

use super::gated_tasks;

pub const BIRTHDAY_TEMPLATES: &[(ServiceOption, TaskTemplate)] = &[
    (
        ServiceOption::PartyEntertainer,
        TaskTemplate {
            description: "Book a party entertainer",
            offset: Offset::months_before(1),
            cost: CostRule::BudgetShare(1000),
            vendor_category: Some(VendorCategory::Entertainment),
        },
    ),
    (
        ServiceOption::PhotoBooth,
        TaskTemplate {
            description: "Rent a photo booth",
            offset: Offset::months_before(1),
            cost: CostRule::Flat(300.0),
            vendor_category: Some(VendorCategory::Photography),
        },
    ),
    (
        ServiceOption::ThemedDecorations,
        TaskTemplate {
            description: "Buy themed decorations",
            offset: Offset::weeks_before(3),
            cost: CostRule::BudgetShare(500),
            vendor_category: Some(VendorCategory::Decor),
        },
    ),
    (
        ServiceOption::BirthdayCake,
        TaskTemplate {
            description: "Order the birthday cake",
            offset: Offset::weeks_before(2),
            cost: CostRule::PerGuest(3.0),
            vendor_category: Some(VendorCategory::Bakery),
        },
    ),
    (
        ServiceOption::PartyFavors,
        TaskTemplate {
            description: "Prepare party favors",
            offset: Offset::weeks_before(1),
            cost: CostRule::PerGuest(4.0),
            vendor_category: None,
        },
    ),
];

pub fn birthday_tasks(request: &EventPlanRequest) -> Vec<EventTask> {
    gated_tasks(BIRTHDAY_TEMPLATES, request)
}
