use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;

use crate::config::load_config;
use crate::error::{PlanError, Result};
use crate::models::{EventPlanRequest, SavedTimeline, Timeline};

/// Returns the path to the saved timelines file (`timelines.json`).
///
/// The path is determined in the following order:
/// 1. `EVENTPLAN_DB` environment variable.
/// 2. `data_dir` from the config file.
/// 3. `~/.local/share/eventplan/timelines.json` (on Linux).
/// 4. `./timelines.json` (fallback).
pub fn db_path() -> PathBuf {
    std::env::var("EVENTPLAN_DB").map(PathBuf::from).unwrap_or_else(|_| {
        let configured = match load_config() {
            Ok(config) => config.data_dir,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable config");
                None
            }
        };
        let mut p = configured.unwrap_or_else(|| {
            let mut d = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
            d.push("eventplan");
            d
        });
        if !p.exists() {
            let _ = fs::create_dir_all(&p);
        }
        p.push("timelines.json");
        p
    })
}

/// Loads all saved timelines.
///
/// Returns an empty vector if the file does not exist yet.
pub fn load_timelines() -> Result<Vec<SavedTimeline>> {
    let path = db_path();
    if !path.exists() {
        return Ok(Vec::new());
    }
    let s = fs::read_to_string(&path)?;
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(&s)?)
}

/// Saves the given timelines, overwriting the existing file.
pub fn save_timelines(timelines: &[SavedTimeline]) -> Result<()> {
    let path = db_path();
    let s = serde_json::to_string_pretty(timelines)?;
    let mut f = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;
    f.write_all(s.as_bytes())?;
    tracing::debug!(path = %path.display(), count = timelines.len(), "saved timelines");
    Ok(())
}

/// Loads a single saved timeline by name.
pub fn load_timeline(name: &str) -> Result<SavedTimeline> {
    load_timelines()?
        .into_iter()
        .find(|t| t.name == name)
        .ok_or_else(|| PlanError::TimelineNotFound(name.to_string()))
}

/// Saves a timeline, replacing any saved timeline with the same name.
///
/// Task ids are re-keyed to `1..=N` in deadline order.
pub fn save_timeline(mut saved: SavedTimeline) -> Result<()> {
    rekey_tasks(&mut saved.timeline);
    let mut timelines = load_timelines()?;
    if let Some(t) = timelines.iter_mut().find(|t| t.name == saved.name) {
        *t = saved;
    } else {
        timelines.push(saved);
    }
    save_timelines(&timelines)
}

/// Removes a saved timeline by name.
pub fn remove_timeline(name: &str) -> Result<()> {
    let mut timelines = load_timelines()?;
    let len_before = timelines.len();
    timelines.retain(|t| t.name != name);
    if timelines.len() == len_before {
        return Err(PlanError::TimelineNotFound(name.to_string()));
    }
    save_timelines(&timelines)
}

/// Deletes the saved timelines file.
pub fn delete_database() -> Result<()> {
    let path = db_path();
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}

/// Sorts tasks by deadline and replaces generation ids with `1..=N`.
pub fn rekey_tasks(timeline: &mut Timeline) {
    timeline.tasks.sort_by_key(|t| t.deadline);
    for (i, task) in timeline.tasks.iter_mut().enumerate() {
        task.id = (i + 1).to_string();
    }
}

impl SavedTimeline {
    /// Wraps a generated timeline with the event it was generated for.
    pub fn new(name: impl Into<String>, request: &EventPlanRequest, timeline: Timeline) -> Self {
        SavedTimeline {
            name: name.into(),
            event_type: request.event_type.clone(),
            event_date: request.event_date,
            location: request.location.clone(),
            guest_count: request.guest_count,
            budget: request.budget,
            saved_at: Local::now().to_rfc3339(),
            timeline,
        }
    }
}
