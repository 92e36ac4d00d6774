//! TUI rendering traits for daylist types.
//!
//! Extension traits that add colored terminal rendering to daylist-core
//! types using owo_colors.

use daylist_core::persistence::Persistence;
use daylist_core::{DayKey, Outcome, Task, TodoStore, Week};
use owo_colors::OwoColorize;

/// Characters of a task id shown in listings.
pub const SHORT_ID_LEN: usize = 8;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Task {
    fn render(&self) -> String {
        let short_id: String = self.id.as_str().chars().take(SHORT_ID_LEN).collect();

        if self.done {
            format!(
                "{} {} {}",
                "[x]".green(),
                short_id.dimmed(),
                self.text.strikethrough().dimmed()
            )
        } else {
            format!("{} {} {}", "[ ]", short_id.dimmed(), self.text)
        }
    }
}

impl Render for Outcome {
    fn render(&self) -> String {
        match self {
            Outcome::Added(task) => format!("{} {}", "+".green(), task.text.green()),
            Outcome::Toggled(task) if task.done => {
                format!("{} {}", "✓".green(), task.text.strikethrough())
            }
            Outcome::Toggled(task) => format!("{} {}", "○".yellow(), task.text),
            Outcome::Edited(task) => format!("{} {}", "~".yellow(), task.text.yellow()),
            Outcome::Deleted(task) => format!("{} {}", "-".red(), task.text.red()),
            Outcome::Unchanged => "No matching task on this day".dimmed().to_string(),
        }
    }
}

/// Heading and task lines for one day.
pub fn render_day<P: Persistence>(store: &TodoStore<P>, day: &DayKey) -> String {
    let mut lines = vec![format!("Tasks for {}", day).bold().to_string()];

    let tasks = store.tasks_for(day);
    if tasks.is_empty() {
        lines.push(format!("   {}", "No tasks for this day.".dimmed()));
    }
    for task in tasks {
        lines.push(format!("   {}", task.render()));
    }

    lines.join("\n")
}

/// One line per day of the week: weekday, date, open/total counts.
/// The selected day is marked and bold.
pub fn render_week<P: Persistence>(store: &TodoStore<P>, week: &Week, selected: &DayKey) -> String {
    week.days()
        .into_iter()
        .map(|date| {
            let key = DayKey::from_date(date);
            let label = date.format("%a %d").to_string();
            let total = store.task_count(&key);
            let pending = store.pending_count(&key);

            let counts = if total == 0 {
                "-".dimmed().to_string()
            } else if pending == 0 {
                format!("{} done", total).green().to_string()
            } else {
                format!("{}/{} open", pending, total)
            };

            if &key == selected {
                format!("{} {}  {}", ">".cyan(), label.bold(), counts)
            } else {
                format!("  {}  {}", label, counts)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> &str {
    if count == 1 {
        word
    } else {
        match word {
            "entry" => "entries",
            "task" => "tasks",
            _ => word,
        }
    }
}
