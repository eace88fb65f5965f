use crate::deadline::Offset;
use crate::models::{
    CostRule, EventPlanRequest, EventTask, ServiceOption, TaskTemplate, VendorCategory,
};

use super::gated_tasks;

/// Corporate events and conferences.
pub const CORPORATE_TEMPLATES: &[(ServiceOption, TaskTemplate)] = &[
    (
        ServiceOption::KeynoteSpeaker,
        TaskTemplate {
            description: "Book a keynote speaker",
            offset: Offset::months_before(4),
            cost: CostRule::BudgetShare(1500),
            vendor_category: Some(VendorCategory::Speaker),
        },
    ),
    (
        ServiceOption::EventRegistration,
        TaskTemplate {
            description: "Set up attendee registration",
            offset: Offset::months_before(3),
            cost: CostRule::Flat(200.0),
            vendor_category: None,
        },
    ),
    (
        ServiceOption::CateringServices,
        TaskTemplate {
            description: "Arrange corporate catering",
            offset: Offset::months_before(2),
            cost: CostRule::PerGuest(35.0),
            vendor_category: Some(VendorCategory::Catering),
        },
    ),
    (
        ServiceOption::TeamBuildingActivities,
        TaskTemplate {
            description: "Plan team building activities",
            offset: Offset::months_before(2),
            cost: CostRule::BudgetShare(500),
            vendor_category: Some(VendorCategory::Entertainment),
        },
    ),
    (
        ServiceOption::BrandedMerchandise,
        TaskTemplate {
            description: "Order branded merchandise",
            offset: Offset::weeks_before(6),
            cost: CostRule::PerGuest(10.0),
            vendor_category: Some(VendorCategory::Merchandise),
        },
    ),
    (
        ServiceOption::AudioVisualEquipment,
        TaskTemplate {
            description: "Rent audio/visual equipment",
            offset: Offset::months_before(1),
            cost: CostRule::BudgetShare(500),
            vendor_category: Some(VendorCategory::AudioVisual),
        },
    ),
];

pub fn corporate_tasks(request: &EventPlanRequest) -> Vec<EventTask> {
    gated_tasks(CORPORATE_TEMPLATES, request)
}
