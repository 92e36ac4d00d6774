//! Resolving the day and task a command refers to.

use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};
use daylist_core::{DayKey, Task, TaskId};

/// clap value parser for `--day`/`--date`.
pub fn parse_day(s: &str) -> Result<DayKey, String> {
    resolve_day(s, Local::now().date_naive())
}

/// `YYYY-MM-DD`, or `today`/`tomorrow`/`yesterday` relative to `today`.
pub fn resolve_day(s: &str, today: NaiveDate) -> Result<DayKey, String> {
    match s.trim().to_lowercase().as_str() {
        "today" => Ok(DayKey::from_date(today)),
        "tomorrow" => Ok(DayKey::from_date(today + Duration::days(1))),
        "yesterday" => Ok(DayKey::from_date(today - Duration::days(1))),
        other => DayKey::parse(other).map_err(|e| e.to_string()),
    }
}

/// Match `input` against the ids of `tasks`: an exact id, or a prefix shared
/// by exactly one task. `None` when nothing matches.
pub fn resolve_task_id(tasks: &[Task], input: &str) -> Result<Option<TaskId>> {
    let input = input.trim();
    if input.is_empty() {
        anyhow::bail!("Task id cannot be empty");
    }

    if let Some(task) = tasks.iter().find(|t| t.id.as_str() == input) {
        return Ok(Some(task.id.clone()));
    }

    let matches: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.id.as_str().starts_with(input))
        .collect();

    match matches.as_slice() {
        [] => Ok(None),
        [task] => Ok(Some(task.id.clone())),
        many => anyhow::bail!(
            "Task id '{}' is ambiguous ({} tasks match). Use more characters.",
            input,
            many.len()
        ),
    }
}
