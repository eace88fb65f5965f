use uuid::Uuid;

use crate::models::{EventPlanRequest, Timeline};
use crate::templates::{base_tasks, category_tasks};

/// Generates the dated planning checklist for an event.
///
/// The result holds the base tasks plus any category tasks the request's
/// answers unlock, sorted ascending by deadline. Tasks sharing a deadline
/// keep template order. Every task starts uncompleted with a fresh id;
/// apart from ids the output depends only on `request`.
pub fn generate_timeline(request: &EventPlanRequest) -> Timeline {
    let mut tasks = base_tasks(request.event_date, request.budget, request.guest_count);
    let base_len = tasks.len();
    tasks.extend(category_tasks(request));

    for task in tasks.iter_mut() {
        task.id = Uuid::new_v4().to_string();
        task.completed = false;
    }

    // sort_by_key is stable
    tasks.sort_by_key(|t| t.deadline);

    tracing::debug!(
        event_type = %request.event_type,
        event_date = %request.event_date,
        base = base_len,
        specialized = tasks.len() - base_len,
        "generated timeline"
    );

    Timeline { tasks }
}
