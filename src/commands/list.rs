use anyhow::{Context, Result};
use daylist_core::persistence::Persistence;
use daylist_core::{DayKey, TodoStore};

use crate::render::render_day;

pub fn run<P: Persistence>(store: &TodoStore<P>, day: &DayKey, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(store.tasks_for(day))
            .context("Failed to serialize tasks")?;
        println!("{out}");
        return Ok(());
    }

    println!("{}", render_day(store, day));
    Ok(())
}
