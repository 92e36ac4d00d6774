use anyhow::Result;
use daylist_core::persistence::Persistence;
use daylist_core::{DayKey, TodoStore, Week, WeekStart};
use owo_colors::OwoColorize;

use crate::render::{pluralize, render_day, render_week};

pub fn run<P: Persistence>(store: &TodoStore<P>, selected: &DayKey, start: WeekStart) -> Result<()> {
    let week = Week::containing(selected.date(), start);
    let open: usize = week.keys().iter().map(|k| store.pending_count(k)).sum();

    println!(
        "{} {}",
        format!("Week of {}", week.first_day().format("%b %-d, %Y")).bold(),
        format!("({} open {})", open, pluralize("task", open)).dimmed()
    );
    println!("{}", render_week(store, &week, selected));
    println!();
    println!("{}", render_day(store, selected));

    Ok(())
}
