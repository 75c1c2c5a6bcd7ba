//! Status and overview commands for CLI.

use chrono::NaiveDate;
use clap::Args;
use habitrack_core::report::{build_report, overview};
use habitrack_core::{CadenceFilter, Config, DatabaseError, HabitDb, HabitReport, SortColumn};

#[derive(Args)]
pub struct StatusArgs {
    /// Habit name
    name: String,
    /// Output JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
pub struct OverviewArgs {
    /// Filter: all, daily or weekly (defaults to overview.default_cadence)
    #[arg(long)]
    cadence: Option<CadenceFilter>,
    /// Sort column: current or longest (defaults to overview.default_sort)
    #[arg(long)]
    sort: Option<SortColumn>,
    /// Output JSON
    #[arg(long)]
    json: bool,
}

const HEADERS: [&str; 6] = [
    "Habit",
    "Task Specification",
    "Periodicity",
    "Completed",
    "Current Streak",
    "Longest Streak",
];

pub fn status(args: StatusArgs, now: NaiveDate) -> Result<(), Box<dyn std::error::Error>> {
    let db = HabitDb::open()?;
    let habit = db
        .get_habit(&args.name)?
        .ok_or_else(|| DatabaseError::HabitNotFound {
            name: args.name.clone(),
        })?;
    let report = build_report(&db, &habit, now)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_table(std::slice::from_ref(&report)));
    }
    Ok(())
}

pub fn run(args: OverviewArgs, now: NaiveDate) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let db = HabitDb::open()?;

    let filter = args.cadence.unwrap_or(config.overview.default_cadence);
    let sort = args.sort.unwrap_or(config.overview.default_sort);
    let reports = overview(&db, filter, sort, now)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else if reports.is_empty() {
        println!("No habits tracked yet.");
    } else {
        print!("{}", render_table(&reports));
    }
    Ok(())
}

fn row(report: &HabitReport) -> [String; 6] {
    [
        report.name.clone(),
        report.task_specification.clone(),
        report.cadence.to_string(),
        report.completed.to_string(),
        report.current_streak.to_string(),
        report.longest_streak.to_string(),
    ]
}

/// Plain-text table with columns padded to their widest cell.
fn render_table(reports: &[HabitReport]) -> String {
    let rows: Vec<[String; 6]> = reports.iter().map(row).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: &[&str]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        format!("{}\n", padded.join("  ").trim_end())
    };

    let mut out = line(&HEADERS[..]);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&line(&rule.iter().map(String::as_str).collect::<Vec<_>>()));
    for cells in &rows {
        out.push_str(&line(&cells.iter().map(String::as_str).collect::<Vec<_>>()));
    }
    out
}
