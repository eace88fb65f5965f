use crate::deadline::Offset;
use crate::models::{
    CostRule, EventPlanRequest, EventTask, ServiceOption, TaskTemplate, VendorCategory,
};

use super::gated_tasks;

pub const GRADUATION_TEMPLATES: &[(ServiceOption, TaskTemplate)] = &[
    (
        ServiceOption::CustomAnnouncements,
        TaskTemplate {
            description: "Order graduation announcements",
            offset: Offset::weeks_before(6),
            cost: CostRule::PerGuest(2.0),
            vendor_category: Some(VendorCategory::Stationery),
        },
    ),
    (
        ServiceOption::CateringServices,
        TaskTemplate {
            description: "Arrange graduation party catering",
            offset: Offset::months_before(1),
            cost: CostRule::PerGuest(20.0),
            vendor_category: Some(VendorCategory::Catering),
        },
    ),
    (
        ServiceOption::PhotographyVideography,
        TaskTemplate {
            description: "Book a graduation photographer",
            offset: Offset::months_before(1),
            cost: CostRule::Flat(400.0),
            vendor_category: Some(VendorCategory::Photography),
        },
    ),
    (
        ServiceOption::ThemedDecorations,
        TaskTemplate {
            description: "Decorate in school colors",
            offset: Offset::weeks_before(1),
            cost: CostRule::BudgetShare(300),
            vendor_category: Some(VendorCategory::Decor),
        },
    ),
];

pub fn graduation_tasks(request: &EventPlanRequest) -> Vec<EventTask> {
    gated_tasks(GRADUATION_TEMPLATES, request)
}
