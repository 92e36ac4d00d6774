//! Discrete commands a front end issues against the store.

use crate::day_key::DayKey;
use crate::error::DayListResult;
use crate::persistence::Persistence;
use crate::store::TodoStore;
use crate::task::{Task, TaskId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddTask { day: DayKey, text: String },
    ToggleDone { day: DayKey, id: TaskId },
    EditText { day: DayKey, id: TaskId, text: String },
    DeleteTask { day: DayKey, id: TaskId },
}

impl Command {
    /// The day the command applies to.
    pub fn day(&self) -> &DayKey {
        match self {
            Command::AddTask { day, .. }
            | Command::ToggleDone { day, .. }
            | Command::EditText { day, .. }
            | Command::DeleteTask { day, .. } => day,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(Task),
    Toggled(Task),
    Edited(Task),
    Deleted(Task),
    /// The command named a task that is not on that day.
    Unchanged,
}

impl Outcome {
    pub fn task(&self) -> Option<&Task> {
        match self {
            Outcome::Added(t) | Outcome::Toggled(t) | Outcome::Edited(t) | Outcome::Deleted(t) => {
                Some(t)
            }
            Outcome::Unchanged => None,
        }
    }
}

impl<P: Persistence> TodoStore<P> {
    pub fn dispatch(&mut self, command: Command) -> DayListResult<Outcome> {
        let outcome = match command {
            Command::AddTask { day, text } => Outcome::Added(self.add_task(&day, text)?),
            Command::ToggleDone { day, id } => {
                self.toggle_done(&day, &id).map_or(Outcome::Unchanged, Outcome::Toggled)
            }
            Command::EditText { day, id, text } => self
                .edit_text(&day, &id, text)?
                .map_or(Outcome::Unchanged, Outcome::Edited),
            Command::DeleteTask { day, id } => {
                self.delete_task(&day, &id).map_or(Outcome::Unchanged, Outcome::Deleted)
            }
        };

        Ok(outcome)
    }
}
