use serde::Serialize;

use crate::models::ServiceOption;
use crate::templates::EventCategory;

/// One question shown while describing an event, with its selectable options.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub prompt: String,
    pub options: Vec<ServiceOption>,
}

impl Question {
    pub fn option_labels(&self) -> Vec<&'static str> {
        self.options.iter().map(|o| o.label()).collect()
    }
}

/// Returns the category questions for a free-text event type.
///
/// Unmatched event types have no questions.
pub fn questions_for_event_type(event_type: &str) -> Vec<Question> {
    let Some(category) = EventCategory::from_event_type(event_type) else {
        return Vec::new();
    };
    vec![Question {
        prompt: format!(
            "Which services do you need for your {} event?",
            category.display_name().to_lowercase()
        ),
        options: category
            .gated_templates()
            .iter()
            .map(|(option, _)| *option)
            .collect(),
    }]
}
