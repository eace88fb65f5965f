use ratatui::widgets::TableState;

use crate::commands::cmd_toggle;
use crate::config::Config;
use crate::error::Result;
use crate::models::{EventTask, SavedTimeline};
use crate::storage::load_timeline;

pub enum DisplayItem {
    Task(EventTask),
    MonthHeader(String, usize), // "September 2025", count
}

pub struct App {
    pub saved: SavedTimeline,
    pub display_items: Vec<DisplayItem>,
    pub state: TableState,
    pub config: Config,
    pub show_completed: bool,
    pub group_by_month: bool,
    /// Last error or confirmation, shown in the help bar.
    pub status: Option<String>,
}

impl App {
    /// Creates a new App for the saved timeline `name`.
    pub fn new(name: &str, config: Config) -> Result<App> {
        let saved = load_timeline(name)?;
        let mut app = App {
            saved,
            display_items: Vec::new(),
            state: TableState::default(),
            show_completed: config.show_completed,
            config,
            group_by_month: false,
            status: None,
        };
        app.rebuild();
        if !app.display_items.is_empty() {
            app.state.select(Some(0));
        }
        Ok(app)
    }

    /// Selects the next row, wrapping around.
    pub fn next(&mut self) {
        if self.display_items.is_empty() { return; }
        let i = match self.state.selected() {
            Some(i) if i + 1 < self.display_items.len() => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    /// Selects the previous row, wrapping around.
    pub fn previous(&mut self) {
        if self.display_items.is_empty() { return; }
        let i = match self.state.selected() {
            Some(0) | None => self.display_items.len() - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    /// Flips completion of the selected task and persists it.
    pub fn toggle_selected(&mut self) {
        let Some(i) = self.state.selected() else { return };
        let Some(DisplayItem::Task(t)) = self.display_items.get(i) else { return };
        let id = t.id.clone();
        match cmd_toggle(&self.saved.name, &id, true) {
            Ok(done) => {
                let state = if done { "done" } else { "reopened" };
                self.status = Some(format!("Task {} {}", id, state));
                self.reload();
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to toggle task");
                self.status = Some(e.to_string());
            }
        }
    }

    pub fn toggle_completed(&mut self) {
        self.show_completed = !self.show_completed;
        self.rebuild();
    }

    pub fn toggle_grouping(&mut self) {
        self.group_by_month = !self.group_by_month;
        self.rebuild();
    }

    /// Reloads the timeline from storage and refreshes the display list.
    pub fn reload(&mut self) {
        match load_timeline(&self.saved.name) {
            Ok(saved) => self.saved = saved,
            Err(e) => self.status = Some(e.to_string()),
        }
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let tasks: Vec<&EventTask> = self
            .saved
            .timeline
            .tasks
            .iter()
            .filter(|t| self.show_completed || !t.completed)
            .collect();

        self.display_items.clear();
        if self.group_by_month {
            let mut current: Option<String> = None;
            for t in &tasks {
                let month = t.deadline.format("%B %Y").to_string();
                if current.as_ref() != Some(&month) {
                    let count = tasks
                        .iter()
                        .filter(|o| o.deadline.format("%B %Y").to_string() == month)
                        .count();
                    self.display_items.push(DisplayItem::MonthHeader(month.clone(), count));
                    current = Some(month);
                }
                self.display_items.push(DisplayItem::Task((*t).clone()));
            }
        } else {
            for t in tasks {
                self.display_items.push(DisplayItem::Task(t.clone()));
            }
        }

        if self.display_items.is_empty() {
            self.state.select(None);
        } else if let Some(i) = self.state.selected() {
            if i >= self.display_items.len() {
                self.state.select(Some(self.display_items.len() - 1));
            }
        } else {
            self.state.select(Some(0));
        }
    }
}
