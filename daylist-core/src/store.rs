//! The day → tasks store.
//!
//! [`TodoStore`] owns the full mapping and its [`Persistence`] backend. Every
//! operation that changes the mapping writes the whole mapping back before
//! returning. Operations naming a day or task that does not exist change
//! nothing and are not errors.

use serde::{Deserialize, Serialize};

use crate::codec::{self, RecoveryPolicy, TodoMap};
use crate::day_key::DayKey;
use crate::error::{DayListError, DayListResult};
use crate::persistence::Persistence;
use crate::task::{Task, TaskId};

/// Whether blank task text is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextPolicy {
    #[default]
    Permissive,
    RejectBlank,
}

impl TextPolicy {
    pub fn check(self, text: &str) -> DayListResult<()> {
        match self {
            TextPolicy::RejectBlank if text.trim().is_empty() => Err(DayListError::BlankText),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StoreOptions {
    pub text_policy: TextPolicy,
    pub recovery: RecoveryPolicy,
}

/// Summary of the startup load.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub days: usize,
    pub tasks: usize,
    /// Stored entries that could not be read and were left out.
    pub dropped: Vec<String>,
}

pub struct TodoStore<P: Persistence> {
    map: TodoMap,
    persistence: P,
    options: StoreOptions,
    report: LoadReport,
    save_error: Option<DayListError>,
}

impl<P: Persistence> TodoStore<P> {
    /// A store with no tasks that has not read from `persistence`.
    pub fn empty(persistence: P, options: StoreOptions) -> Self {
        TodoStore {
            map: TodoMap::new(),
            persistence,
            options,
            report: LoadReport::default(),
            save_error: None,
        }
    }

    /// Read the saved mapping. Missing or unreadable data gives an empty store.
    pub fn load(persistence: P, options: StoreOptions) -> Self {
        let mut store = Self::empty(persistence, options);

        let blob = match store.persistence.read() {
            Ok(blob) => blob,
            Err(e) => {
                tracing::warn!(error = %e, "could not read saved tasks, starting empty");
                store.report.dropped.push(format!("could not read saved tasks: {e}"));
                None
            }
        };

        if let Some(blob) = blob {
            let decoded = codec::deserialize(&blob, options.recovery);
            for reason in &decoded.dropped {
                tracing::warn!(%reason, "dropped saved entry");
            }
            store.map = decoded.map;
            store.report.dropped.extend(decoded.dropped);
        }

        store.report.days = store.days().count();
        store.report.tasks = store.map.values().map(Vec::len).sum();
        tracing::debug!(
            days = store.report.days,
            tasks = store.report.tasks,
            "loaded tasks"
        );

        store
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.report
    }

    pub fn options(&self) -> StoreOptions {
        self.options
    }

    /// Write the full mapping, replacing whatever was saved before.
    pub fn save(&mut self) -> DayListResult<()> {
        let blob = codec::serialize(&self.map)?;
        self.persistence.write(&blob)?;
        tracing::debug!(bytes = blob.len(), "saved tasks");
        Ok(())
    }

    /// Save after a change. A failed write keeps the in-memory change and is
    /// held for [`TodoStore::take_save_error`].
    fn persist(&mut self) {
        match self.save() {
            Ok(()) => self.save_error = None,
            Err(e) => {
                tracing::warn!(error = %e, "could not save tasks");
                self.save_error = Some(e);
            }
        }
    }

    /// The last write failure, if the most recent save did not succeed.
    pub fn take_save_error(&mut self) -> Option<DayListError> {
        self.save_error.take()
    }

    // MUTATIONS:

    /// Put a new pending task at the head of `day`'s list.
    pub fn add_task(&mut self, day: &DayKey, text: impl Into<String>) -> DayListResult<Task> {
        let text = text.into();
        self.options.text_policy.check(&text)?;

        let task = Task::new(text);
        self.map
            .entry(day.clone())
            .or_default()
            .insert(0, task.clone());
        self.persist();

        Ok(task)
    }

    /// Flip the done flag. Returns the updated task.
    pub fn toggle_done(&mut self, day: &DayKey, id: &TaskId) -> Option<Task> {
        let task = self.task_mut(day, id)?;
        task.done = !task.done;
        let task = task.clone();
        self.persist();
        Some(task)
    }

    /// Replace a task's text, keeping its id and done flag. Returns the
    /// updated task.
    pub fn edit_text(
        &mut self,
        day: &DayKey,
        id: &TaskId,
        text: impl Into<String>,
    ) -> DayListResult<Option<Task>> {
        let text = text.into();
        self.options.text_policy.check(&text)?;

        let Some(task) = self.task_mut(day, id) else {
            return Ok(None);
        };
        task.text = text;
        let task = task.clone();
        self.persist();

        Ok(Some(task))
    }

    /// Remove a task. Returns the removed task.
    pub fn delete_task(&mut self, day: &DayKey, id: &TaskId) -> Option<Task> {
        let tasks = self.map.get_mut(day)?;
        let idx = tasks.iter().position(|t| &t.id == id)?;
        let task = tasks.remove(idx);
        self.persist();
        Some(task)
    }

    fn task_mut(&mut self, day: &DayKey, id: &TaskId) -> Option<&mut Task> {
        self.map.get_mut(day)?.iter_mut().find(|t| &t.id == id)
    }

    // READS:

    /// Tasks for `day`, newest first. Empty if the day has none.
    pub fn tasks_for(&self, day: &DayKey) -> &[Task] {
        self.map.get(day).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn task_count(&self, day: &DayKey) -> usize {
        self.tasks_for(day).len()
    }

    pub fn pending_count(&self, day: &DayKey) -> usize {
        self.tasks_for(day).iter().filter(|t| !t.done).count()
    }

    /// Days that have at least one task, oldest first.
    pub fn days(&self) -> impl Iterator<Item = &DayKey> {
        self.map
            .iter()
            .filter(|(_, tasks)| !tasks.is_empty())
            .map(|(day, _)| day)
    }

    /// Locate a task by id on any day.
    pub fn find(&self, id: &TaskId) -> Option<(&DayKey, &Task)> {
        self.map
            .iter()
            .find_map(|(day, tasks)| tasks.iter().find(|t| &t.id == id).map(|t| (day, t)))
    }

    pub fn mapping(&self) -> &TodoMap {
        &self.map
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn persistence_mut(&mut self) -> &mut P {
        &mut self.persistence
    }
}
