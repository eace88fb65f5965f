//! Task template sets.
//!
//! Every event gets the base set. An event whose type names a known
//! category additionally gets that category's tasks, each gated by one
//! service option the client selected.

pub mod base;
pub mod birthday;
pub mod corporate;
pub mod graduation;
pub mod wedding;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{EventPlanRequest, EventTask, ServiceOption, TaskTemplate};

pub use base::{base_task_set, base_tasks};

/// Builds the category-specific tasks for a request.
pub type TaskBuilder = fn(&EventPlanRequest) -> Vec<EventTask>;

/// Event categories with their own task sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Wedding,
    Corporate,
    Birthday,
    Graduation,
}

/// Substring keys checked in order against the lowercased event type.
const CATEGORY_KEYS: &[(&str, EventCategory)] = &[
    ("wedding", EventCategory::Wedding),
    ("corporate", EventCategory::Corporate),
    ("conference", EventCategory::Corporate),
    ("birthday", EventCategory::Birthday),
    ("graduation", EventCategory::Graduation),
];

impl EventCategory {
    /// Matches a free-text event type case-insensitively by substring.
    ///
    /// The first key found wins, so "Wedding Birthday Brunch" is a wedding.
    /// Unknown types return `None` and get only the base set.
    pub fn from_event_type(event_type: &str) -> Option<EventCategory> {
        let lowered = event_type.to_lowercase();
        CATEGORY_KEYS
            .iter()
            .find(|(key, _)| lowered.contains(key))
            .map(|(_, category)| *category)
    }

    pub fn task_builder(&self) -> TaskBuilder {
        match self {
            EventCategory::Wedding => wedding::wedding_tasks,
            EventCategory::Corporate => corporate::corporate_tasks,
            EventCategory::Birthday => birthday::birthday_tasks,
            EventCategory::Graduation => graduation::graduation_tasks,
        }
    }

    /// Option-gated templates of this category, in presentation order.
    pub fn gated_templates(&self) -> &'static [(ServiceOption, TaskTemplate)] {
        match self {
            EventCategory::Wedding => wedding::WEDDING_TEMPLATES,
            EventCategory::Corporate => corporate::CORPORATE_TEMPLATES,
            EventCategory::Birthday => birthday::BIRTHDAY_TEMPLATES,
            EventCategory::Graduation => graduation::GRADUATION_TEMPLATES,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EventCategory::Wedding => "Wedding",
            EventCategory::Corporate => "Corporate",
            EventCategory::Birthday => "Birthday",
            EventCategory::Graduation => "Graduation",
        }
    }
}

/// Returns the category tasks for `request`, empty for unmatched event types.
pub fn category_tasks(request: &EventPlanRequest) -> Vec<EventTask> {
    match EventCategory::from_event_type(&request.event_type) {
        Some(category) => (category.task_builder())(request),
        None => Vec::new(),
    }
}

impl TaskTemplate {
    /// Expands the template into a task with an empty id.
    pub fn expand(&self, event_date: NaiveDate, budget: f64, guest_count: u32) -> EventTask {
        EventTask {
            id: String::new(),
            description: self.description.to_string(),
            deadline: self.offset.apply(event_date),
            estimated_cost: self.cost.estimate(budget, guest_count),
            completed: false,
            suggested_vendor_category: self.vendor_category,
        }
    }
}

/// Expands every template whose option was selected in the request.
pub(crate) fn gated_tasks(
    templates: &[(ServiceOption, TaskTemplate)],
    request: &EventPlanRequest,
) -> Vec<EventTask> {
    templates
        .iter()
        .filter(|(option, _)| request.answers.contains(*option))
        .map(|(_, template)| {
            template.expand(request.event_date, request.budget, request.guest_count)
        })
        .collect()
}
