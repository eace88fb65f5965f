//! Event planning timeline generator.
//!
//! Given an event's type, date, budget, guest count and the optional
//! services the client selected, [`timeline::generate_timeline`] derives a
//! dated checklist of planning tasks with cost estimates, sorted by
//! deadline.
//!
//! ```
//! use chrono::NaiveDate;
//! use eventplan::models::{Answers, EventPlanRequest, ServiceOption};
//! use eventplan::timeline::generate_timeline;
//!
//! let request = EventPlanRequest {
//!     event_type: "Wedding".into(),
//!     event_date: NaiveDate::from_ymd_opt(2025, 12, 25).unwrap(),
//!     location: "Austin".into(),
//!     guest_count: 100,
//!     budget: 10_000.0,
//!     answers: Answers::new().with(ServiceOption::LiveBandOrDj),
//! };
//! let timeline = generate_timeline(&request);
//! assert!(timeline.tasks.iter().any(|t| t.description == "Book entertainment (DJ or band)"));
//! ```

pub mod commands;
pub mod config;
pub mod deadline;
pub mod error;
pub mod logging;
pub mod models;
pub mod questions;
pub mod storage;
pub mod templates;
pub mod timeline;
pub mod tui;
