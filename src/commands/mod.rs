pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod list;
pub mod toggle;
pub mod week;

use anyhow::Result;
use daylist_core::persistence::Persistence;
use daylist_core::{Command, TodoStore};
use owo_colors::OwoColorize;

use crate::render::{Render, render_day};

/// Dispatch a command, report what changed, then show the day again.
/// A failed save is reported but does not fail the command.
pub fn apply<P: Persistence>(store: &mut TodoStore<P>, command: Command) -> Result<()> {
    let day = command.day().clone();
    tracing::debug!(?command, "dispatching");
    let outcome = store.dispatch(command)?;

    println!("{}", outcome.render());

    if let Some(e) = store.take_save_error() {
        eprintln!(
            "{} {}",
            "warning:".yellow(),
            format!("change kept for this session only, saving failed: {e}").yellow()
        );
    }

    println!();
    println!("{}", render_day(store, &day));

    Ok(())
}
