use crate::deadline::Offset;
use crate::models::{
    CostRule, EventPlanRequest, EventTask, ServiceOption, TaskTemplate, VendorCategory,
};

use super::gated_tasks;

pub const WEDDING_TEMPLATES: &[(ServiceOption, TaskTemplate)] = &[
    (
        ServiceOption::WeddingAttire,
        TaskTemplate {
            description: "Shop for wedding attire",
            offset: Offset::months_before(8),
            cost: CostRule::BudgetShare(800),
            vendor_category: Some(VendorCategory::Attire),
        },
    ),
    (
        ServiceOption::PhotographyVideography,
        TaskTemplate {
            description: "Hire a photographer and videographer",
            offset: Offset::months_before(6),
            cost: CostRule::BudgetShare(1000),
            vendor_category: Some(VendorCategory::Photography),
        },
    ),
    (
        ServiceOption::Officiant,
        TaskTemplate {
            description: "Book an officiant",
            offset: Offset::months_before(4),
            cost: CostRule::Flat(500.0),
            vendor_category: Some(VendorCategory::Officiant),
        },
    ),
    (
        ServiceOption::LiveBandOrDj,
        TaskTemplate {
            description: "Book entertainment (DJ or band)",
            offset: Offset::months_before(3),
            cost: CostRule::BudgetShare(700),
            vendor_category: Some(VendorCategory::Entertainment),
        },
    ),
    (
        ServiceOption::FloralArrangements,
        TaskTemplate {
            description: "Order flowers and floral arrangements",
            offset: Offset::months_before(2),
            cost: CostRule::BudgetShare(800),
            vendor_category: Some(VendorCategory::Florist),
        },
    ),
    (
        ServiceOption::WeddingCake,
        TaskTemplate {
            description: "Order the wedding cake",
            offset: Offset::months_before(2),
            cost: CostRule::BudgetShare(300),
            vendor_category: Some(VendorCategory::Bakery),
        },
    ),
    (
        ServiceOption::HairAndMakeup,
        TaskTemplate {
            description: "Schedule a hair and makeup trial",
            offset: Offset::months_before(1),
            cost: CostRule::BudgetShare(300),
            vendor_category: Some(VendorCategory::Beauty),
        },
    ),
    (
        ServiceOption::Transportation,
        TaskTemplate {
            description: "Arrange wedding day transportation",
            offset: Offset::months_before(1),
            cost: CostRule::BudgetShare(200),
            vendor_category: Some(VendorCategory::Transportation),
        },
    ),
];

pub fn wedding_tasks(request: &EventPlanRequest) -> Vec<EventTask> {
    gated_tasks(WEDDING_TEMPLATES, request)
}
