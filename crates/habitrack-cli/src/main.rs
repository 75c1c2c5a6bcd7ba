use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use habitrack_core::habit::{parse_date, today};

mod commands;

#[derive(Parser)]
#[command(name = "habitrack", version, about = "Track daily and weekly habits")]
struct Cli {
    /// Evaluate as if today were this date (YYYY-MM-DD)
    #[arg(long, global = true, value_parser = parse_today)]
    today: Option<NaiveDate>,

    /// Show debug logs
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Habit management
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Mark a habit as completed
    Complete(commands::completion::CompleteArgs),
    /// Completion date management
    Completion {
        #[command(subcommand)]
        action: commands::completion::CompletionAction,
    },
    /// Completion status and streaks of one habit
    Status(commands::overview::StatusArgs),
    /// Overview of all tracked habits
    Overview(commands::overview::OverviewArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

fn parse_today(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).map_err(|e| e.to_string())
}

fn init_tracing(quiet: bool, verbose: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("HABITRACK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);

    // Read once; every command sees the same reference date.
    let now = cli.today.unwrap_or_else(today);
    tracing::debug!(%now, "reference date");

    let result = match cli.command {
        Commands::Habit { action } => commands::habit::run(action, now),
        Commands::Complete(args) => commands::completion::complete(args, now),
        Commands::Completion { action } => commands::completion::run(action, now),
        Commands::Status(args) => commands::overview::status(args, now),
        Commands::Overview(args) => commands::overview::run(args, now),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "habitrack", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
