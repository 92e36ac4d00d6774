use anyhow::Result;
use daylist_core::persistence::Persistence;
use daylist_core::{Command, DayKey, TaskId, TodoStore};

use crate::selection::resolve_task_id;

pub fn run<P: Persistence>(
    store: &mut TodoStore<P>,
    day: DayKey,
    id: &str,
    text: String,
) -> Result<()> {
    let id = resolve_task_id(store.tasks_for(&day), id)?.unwrap_or_else(|| TaskId::from(id));
    super::apply(store, Command::EditText { day, id, text })
}
