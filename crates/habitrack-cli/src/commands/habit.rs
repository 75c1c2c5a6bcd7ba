//! Habit management commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use habitrack_core::{Cadence, CadenceFilter, Habit, HabitDb};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Register a new habit
    Add {
        /// Habit name (must be unique)
        name: String,
        /// What completing the habit means
        #[arg(long, default_value = "")]
        task: String,
        /// daily or weekly
        #[arg(long)]
        cadence: Cadence,
    },
    /// List habits
    List {
        /// Filter: all, daily or weekly
        #[arg(long, default_value = "all")]
        cadence: CadenceFilter,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete a habit including all of its completions
    Delete {
        /// Habit name
        name: String,
    },
}

pub fn run(action: HabitAction, now: NaiveDate) -> Result<(), Box<dyn std::error::Error>> {
    let db = HabitDb::open()?;

    match action {
        HabitAction::Add {
            name,
            task,
            cadence,
        } => {
            let habit = Habit::new(name, task, cadence, now)?;
            db.create_habit(&habit)?;
            println!("Habit \"{}\" added ({}). Good luck!", habit.name, habit.cadence);
        }
        HabitAction::List { cadence, json } => {
            let habits = db.list_habits(cadence)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&habits)?);
            } else {
                for habit in habits {
                    println!(
                        "{}\t{}\t{}",
                        habit.name, habit.cadence, habit.task_specification
                    );
                }
            }
        }
        HabitAction::Delete { name } => {
            db.delete_habit(&name)?;
            println!("Habit \"{name}\", including all its data, has been deleted.");
        }
    }
    Ok(())
}
