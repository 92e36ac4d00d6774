mod commands;
mod render;
mod selection;

use anyhow::Result;
use clap::{Parser, Subcommand};
use daylist_core::DayKey;
use daylist_core::config::DayListConfig;
use owo_colors::OwoColorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::selection::parse_day;

#[derive(Parser)]
#[command(name = "daylist")]
#[command(about = "Keep a short task list for each day of the week")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the week strip with task counts
    Week {
        /// Any day in the week to show (YYYY-MM-DD, today, tomorrow, yesterday)
        #[arg(short, long, value_parser = parse_day)]
        date: Option<DayKey>,
    },
    /// List tasks for a day, newest first
    List {
        #[arg(short, long, value_parser = parse_day)]
        day: Option<DayKey>,

        /// Print the tasks as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a task
    Add {
        text: String,

        #[arg(short, long, value_parser = parse_day)]
        day: Option<DayKey>,
    },
    /// Mark a task done, or not done again
    Toggle {
        /// Task id or a unique prefix of it
        id: String,

        #[arg(short, long, value_parser = parse_day)]
        day: Option<DayKey>,
    },
    /// Replace a task's text
    Edit {
        id: String,
        text: String,

        #[arg(short, long, value_parser = parse_day)]
        day: Option<DayKey>,
    },
    /// Delete a task
    Delete {
        id: String,

        #[arg(short, long, value_parser = parse_day)]
        day: Option<DayKey>,
    },
    /// Show config and data paths
    Config,
}

impl Commands {
    /// Whether the command reads or changes tasks. Others skip loading them.
    fn needs_store(&self) -> bool {
        !matches!(self, Commands::Config)
    }
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = DayListConfig::load()?;

    if !cli.command.needs_store() {
        return commands::config::run(&config);
    }

    let mut store = config.open_store();
    warn_dropped(store.load_report().dropped.len());

    let selected = |day: Option<DayKey>| day.unwrap_or_else(DayKey::today);

    match cli.command {
        Commands::Week { date } => commands::week::run(&store, &selected(date), config.week_start),
        Commands::List { day, json } => commands::list::run(&store, &selected(day), json),
        Commands::Add { text, day } => commands::add::run(&mut store, selected(day), text),
        Commands::Toggle { id, day } => commands::toggle::run(&mut store, selected(day), &id),
        Commands::Edit { id, text, day } => {
            commands::edit::run(&mut store, selected(day), &id, text)
        }
        Commands::Delete { id, day } => commands::delete::run(&mut store, selected(day), &id),
        Commands::Config => Ok(()),
    }
}

fn warn_dropped(count: usize) {
    if count == 0 {
        return;
    }
    eprintln!(
        "{} {} saved {} could not be read and {} skipped",
        "warning:".yellow(),
        count,
        render::pluralize("entry", count),
        if count == 1 { "was" } else { "were" },
    );
}

/// Tracing is opt-in via RUST_LOG; an unusable filter turns it off.
fn init_tracing() {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(args: &[&str]) -> Commands {
        Cli::try_parse_from(std::iter::once("daylist").chain(args.iter().copied()))
            .unwrap()
            .command
    }

    #[test]
    fn config_does_not_load_tasks() {
        assert!(!command(&["config"]).needs_store());
    }

    #[test]
    fn task_commands_load_tasks() {
        for args in [
            &["week"][..],
            &["list", "--day", "2024-06-10"],
            &["add", "buy milk"],
            &["toggle", "1f3a"],
            &["edit", "1f3a", "buy oat milk"],
            &["delete", "1f3a"],
        ] {
            assert!(command(args).needs_store(), "{args:?}");
        }
    }

    #[test]
    fn rejects_extended_year_days() {
        assert!(Cli::try_parse_from(["daylist", "week", "--date", "+262142-12-31"]).is_err());
    }
}
