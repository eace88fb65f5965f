use std::io::{self, Write};

use chrono::{Local, NaiveDate};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::config::Config;
use crate::error::{PlanError, Result};
use crate::models::{EventPlanRequest, EventTask, SavedTimeline, Timeline};
use crate::questions::questions_for_event_type;
use crate::storage::{
    delete_database, load_timeline, load_timelines, rekey_tasks, remove_timeline, save_timeline,
    save_timelines,
};
use crate::templates::EventCategory;
use crate::timeline::generate_timeline;

/// Generates a timeline for `request` and prints it.
///
/// With `save`, the timeline is stored under that name, replacing an
/// existing one, and the stored ids are the ones printed and returned.
/// With `json`, stdout carries only the timeline as JSON.
pub fn cmd_plan(
    request: &EventPlanRequest,
    save: Option<String>,
    json: bool,
    config: &Config,
    silent: bool,
) -> Result<Timeline> {
    let mut timeline = generate_timeline(request);

    if let Some(name) = &save {
        rekey_tasks(&mut timeline);
        save_timeline(SavedTimeline::new(name.clone(), request, timeline.clone()))?;
    }

    if silent {
        return Ok(timeline);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&timeline)?);
    } else {
        let category = EventCategory::from_event_type(&request.event_type)
            .map(|c| c.display_name())
            .unwrap_or("General");
        println!(
            "{} plan for {} on {} ({} guests, budget {})",
            category,
            if request.location.is_empty() { "-" } else { request.location.as_str() },
            request.event_date,
            request.guest_count,
            config.format_cost(request.budget),
        );
        println!("{}", task_table(&timeline.tasks, config));
        println!("Estimated total: {}", config.format_cost(timeline.total_estimated_cost()));
    }

    if let Some(name) = save {
        // stdout stays parseable in json mode
        if json {
            eprintln!("Timeline saved as '{}'.", name);
        } else {
            println!("Timeline saved as '{}'.", name);
        }
    }

    Ok(timeline)
}

/// Prints the questions and option labels for an event type.
pub fn cmd_questions(event_type: &str) {
    let questions = questions_for_event_type(event_type);
    if questions.is_empty() {
        println!("No extra questions for '{}'; only the base checklist applies.", event_type);
        return;
    }
    for q in questions {
        println!("{}", q.prompt);
        for label in q.option_labels() {
            println!("  - {}", label);
        }
    }
}

/// Lists saved timelines with their progress.
pub fn cmd_list(config: &Config) -> Result<()> {
    let timelines = load_timelines()?;
    if timelines.is_empty() {
        println!("No saved timelines found.");
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Event").add_attribute(Attribute::Bold),
            Cell::new("Date").add_attribute(Attribute::Bold),
            Cell::new("Location").add_attribute(Attribute::Bold),
            Cell::new("Guests").add_attribute(Attribute::Bold),
            Cell::new("Budget").add_attribute(Attribute::Bold),
            Cell::new("Progress").add_attribute(Attribute::Bold),
        ]);

    for t in timelines {
        let done = t.timeline.completed_count();
        let total = t.timeline.tasks.len();
        let progress_color = if total > 0 && done == total {
            Color::Green
        } else {
            Color::Yellow
        };
        table.add_row(vec![
            Cell::new(&t.name),
            Cell::new(&t.event_type),
            Cell::new(t.event_date),
            Cell::new(&t.location),
            Cell::new(t.guest_count),
            Cell::new(config.format_cost(t.budget)),
            Cell::new(format!("{}/{}", done, total)).fg(progress_color),
        ]);
    }

    println!("{table}");
    Ok(())
}

/// Shows the tasks of a saved timeline.
///
/// Completed tasks are hidden unless `all` is set or the config asks for them.
pub fn cmd_show(name: &str, all: bool, config: &Config) -> Result<()> {
    let saved = load_timeline(name)?;
    let show_completed = all || config.show_completed;
    let tasks: Vec<EventTask> = saved
        .timeline
        .tasks
        .iter()
        .filter(|t| show_completed || !t.completed)
        .cloned()
        .collect();

    println!(
        "{} - {} on {} ({}/{} done, est. {})",
        saved.name,
        saved.event_type,
        saved.event_date,
        saved.timeline.completed_count(),
        saved.timeline.tasks.len(),
        config.format_cost(saved.timeline.total_estimated_cost()),
    );
    if tasks.is_empty() {
        println!("No open tasks.");
        return Ok(());
    }
    println!("{}", task_table(&tasks, config));
    Ok(())
}

/// Flips the completion state of one task in a saved timeline.
///
/// Returns the new state.
pub fn cmd_toggle(name: &str, task_id: &str, silent: bool) -> Result<bool> {
    let mut timelines = load_timelines()?;
    let saved = timelines
        .iter_mut()
        .find(|t| t.name == name)
        .ok_or_else(|| PlanError::TimelineNotFound(name.to_string()))?;
    let task = saved
        .timeline
        .tasks
        .iter_mut()
        .find(|t| t.id == task_id)
        .ok_or_else(|| PlanError::TaskNotFound {
            timeline: name.to_string(),
            task_id: task_id.to_string(),
        })?;

    task.completed = !task.completed;
    let completed = task.completed;
    save_timelines(&timelines)?;

    if !silent {
        let state = if completed { "complete" } else { "pending" };
        println!("Task {} marked as {}.", task_id, state);
    }
    Ok(completed)
}

/// Removes a saved timeline by name.
pub fn cmd_remove(name: &str, silent: bool) -> Result<()> {
    remove_timeline(name)?;
    if !silent {
        println!("Timeline '{}' removed.", name);
    }
    Ok(())
}

/// Deletes every saved timeline.
pub fn cmd_reset(force: bool) -> Result<()> {
    if !force {
        print!(
            "Are you sure you want to delete all saved timelines? This cannot be undone. [y/N] "
        );
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if input.trim().to_lowercase() != "y" {
            println!("Aborted.");
            return Ok(());
        }
    }

    delete_database()?;
    println!("Saved timelines deleted.");
    Ok(())
}

/// Formats days until `deadline` relative to `today`.
pub fn time_left(deadline: NaiveDate, today: NaiveDate) -> String {
    let days_left = (deadline - today).num_days();
    if days_left < 0 {
        format!("{}d overdue", days_left.abs())
    } else if days_left == 0 {
        "Today".to_string()
    } else {
        format!("{}d", days_left)
    }
}

fn task_table(tasks: &[EventTask], config: &Config) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID").add_attribute(Attribute::Bold),
            Cell::new("Task").add_attribute(Attribute::Bold),
            Cell::new("Deadline").add_attribute(Attribute::Bold),
            Cell::new("Time Left").add_attribute(Attribute::Bold),
            Cell::new("Vendor").add_attribute(Attribute::Bold),
            Cell::new("Est. Cost").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
        ]);

    let today = Local::now().date_naive();

    for t in tasks {
        let overdue = t.deadline < today && !t.completed;
        // generation ids are long uuids, show a prefix
        let id: String = t.id.chars().take(8).collect();
        let status = if t.completed { "Done" } else { "Pending" };
        let status_color = if t.completed { Color::Green } else { Color::Yellow };

        table.add_row(vec![
            Cell::new(id),
            Cell::new(&t.description),
            Cell::new(t.deadline),
            Cell::new(time_left(t.deadline, today))
                .fg(if overdue { Color::Red } else { Color::Reset }),
            Cell::new(t.suggested_vendor_category.map(|v| v.display_name()).unwrap_or("-")),
            Cell::new(config.format_cost(t.estimated_cost)),
            Cell::new(status).fg(status_color),
        ]);
    }
    table
}
