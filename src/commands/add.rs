use anyhow::Result;
use daylist_core::persistence::Persistence;
use daylist_core::{Command, DayKey, TodoStore};

pub fn run<P: Persistence>(store: &mut TodoStore<P>, day: DayKey, text: String) -> Result<()> {
    super::apply(store, Command::AddTask { day, text })
}
