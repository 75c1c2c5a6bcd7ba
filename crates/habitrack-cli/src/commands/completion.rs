//! Completion recording commands for CLI.

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use habitrack_core::habit::{parse_date, DATE_FORMAT};
use habitrack_core::report::{
    available_completion_dates, check_completion_window, recent_completions,
};
use habitrack_core::{Config, HabitDb};

#[derive(Args)]
pub struct CompleteArgs {
    /// Habit name
    name: String,
    /// Completion date (YYYY-MM-DD), defaults to today
    #[arg(long, value_parser = parse_arg_date)]
    date: Option<NaiveDate>,
}

#[derive(Subcommand)]
pub enum CompletionAction {
    /// Delete a recorded completion date
    Delete {
        /// Habit name
        name: String,
        /// Date to remove (YYYY-MM-DD)
        #[arg(value_parser = parse_arg_date)]
        date: NaiveDate,
    },
    /// Show the most recent completion dates
    Recent {
        /// Habit name
        name: String,
        /// How many dates to show (defaults to completion.recent_limit)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show days in the back-fill window that are not completed yet
    Available {
        /// Habit name
        name: String,
    },
}

fn parse_arg_date(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).map_err(|e| e.to_string())
}

pub fn complete(args: CompleteArgs, now: NaiveDate) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let db = HabitDb::open()?;

    let date = args.date.unwrap_or(now);
    check_completion_window(date, now, config.completion.available_window_days)?;
    db.complete_habit(&args.name, date)?;
    println!("Completed \"{}\" on {}.", args.name, date.format(DATE_FORMAT));
    Ok(())
}

pub fn run(action: CompletionAction, now: NaiveDate) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let db = HabitDb::open()?;

    match action {
        CompletionAction::Delete { name, date } => {
            db.delete_completion(&name, date)?;
            println!(
                "Completion date {} for \"{name}\" has been deleted.",
                date.format(DATE_FORMAT)
            );
        }
        CompletionAction::Recent { name, limit } => {
            let history = db.completion_dates(&name)?;
            let limit = limit.unwrap_or(config.completion.recent_limit);
            let recent = recent_completions(&history, limit);
            if recent.is_empty() {
                println!("\"{name}\" has not been completed yet.");
            }
            for date in recent {
                println!("{}", date.format(DATE_FORMAT));
            }
        }
        CompletionAction::Available { name } => {
            let history = db.completion_dates(&name)?;
            let window = config.completion.available_window_days;
            for date in available_completion_dates(&history, now, window) {
                println!("{}", date.format(DATE_FORMAT));
            }
        }
    }
    Ok(())
}
