//! # Eventplan
//!
//! A terminal planner that turns an event's basics into a dated checklist
//! of planning tasks with cost estimates.
//!
//! ## Usage
//!
//! ```bash
//! # See which optional services apply to an event type
//! eventplan questions "Wedding"
//!
//! # Generate a checklist
//! eventplan plan "Wedding" --date 2025-12-25 --budget 10000 --guests 100 \
//!     --location Austin --answer "Live Band or DJ" --save our-wedding
//!
//! # Work through it
//! eventplan show our-wedding
//! eventplan toggle our-wedding 3
//! eventplan ui our-wedding
//! ```
//!
//! Saved timelines live in `~/.local/share/eventplan/timelines.json` on
//! Linux; `EVENTPLAN_DB` overrides the path. Settings are read from
//! `~/.config/eventplan/config.toml` (`EVENTPLAN_CONFIG` overrides).
//! Set `EVENTPLAN_LOG=debug` for diagnostics on stderr.

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};

use eventplan::commands::*;
use eventplan::config::load_config;
use eventplan::error::{PlanError, Result};
use eventplan::logging::init_logging;
use eventplan::models::EventPlanRequest;
use eventplan::tui::run_tui;

#[derive(Parser)]
#[command(name = "eventplan")]
#[command(about = "Event planning checklist generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a planning timeline
    Plan {
        /// Event type, e.g. "Wedding" or "Tech Conference"
        event_type: String,
        /// Event date in YYYY-MM-DD
        #[arg(short, long)]
        date: String,
        /// Total budget
        #[arg(short, long)]
        budget: f64,
        /// Expected number of guests
        #[arg(short, long)]
        guests: u32,
        /// Event location
        #[arg(short, long, default_value = "")]
        location: String,
        /// Selected service option label (repeatable)
        #[arg(short, long = "answer")]
        answers: Vec<String>,
        /// Fail on unrecognized answer labels
        #[arg(long)]
        strict: bool,
        /// Save the timeline under this name
        #[arg(short, long)]
        save: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the optional services for an event type
    Questions {
        event_type: String,
    },
    /// List saved timelines
    List,
    /// Show a saved timeline
    Show {
        name: String,
        /// Include completed tasks
        #[arg(short, long)]
        all: bool,
    },
    /// Toggle a task between done and pending
    Toggle {
        name: String,
        task_id: String,
    },
    /// Remove a saved timeline
    Remove {
        name: String,
    },
    /// Delete all saved timelines
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,
    },
    /// Open the interactive checklist for a saved timeline
    Ui {
        name: String,
    },
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config()?;
    match cli.command {
        Commands::Plan {
            event_type,
            date,
            budget,
            guests,
            location,
            answers,
            strict,
            save,
            json,
        } => {
            let request = EventPlanRequest::from_form(
                &event_type,
                &date,
                &location,
                guests,
                budget,
                answers.iter().map(|a| (a.as_str(), true)),
                strict || config.strict_answers,
            )?;
            cmd_plan(&request, save, json, &config, false)?;
        }
        Commands::Questions { event_type } => cmd_questions(&event_type),
        Commands::List => cmd_list(&config)?,
        Commands::Show { name, all } => cmd_show(&name, all, &config)?,
        Commands::Toggle { name, task_id } => {
            cmd_toggle(&name, &task_id, false)?;
        }
        Commands::Remove { name } => cmd_remove(&name, false)?,
        Commands::Reset { force } => cmd_reset(force)?,
        Commands::Completions { shell } => {
            let shell_enum = match shell.as_str() {
                "bash" => Shell::Bash,
                "zsh" => Shell::Zsh,
                "fish" => Shell::Fish,
                "powershell" => Shell::PowerShell,
                "elvish" => Shell::Elvish,
                _ => return Err(PlanError::Custom(format!("Unsupported shell: {}", shell))),
            };
            let mut cmd = Cli::command();
            generate(shell_enum, &mut cmd, "eventplan", &mut io::stdout());
        }
        Commands::Ui { name } => {
            run_tui(&name, config)
                .map_err(|e| PlanError::Custom(format!("Error running TUI: {}", e)))?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
