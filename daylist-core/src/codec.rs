//! Blob format for the persisted mapping.
//!
//! The blob is a JSON object keyed by `YYYY-MM-DD`, each value an array of
//! `{"id", "text", "done"}` objects, newest task first. Decoding never fails:
//! unreadable content degrades according to a [`RecoveryPolicy`].

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::day_key::DayKey;
use crate::error::DayListResult;
use crate::task::Task;

/// Full store contents: day → tasks, newest first.
pub type TodoMap = BTreeMap<DayKey, Vec<Task>>;

/// What to do with a blob that is only partly readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecoveryPolicy {
    /// Keep every well-formed day and task, drop the rest.
    #[default]
    Salvage,
    /// Any malformed entry empties the whole mapping.
    Discard,
}

/// Result of decoding a blob.
#[derive(Debug, Default)]
pub struct Decoded {
    pub map: TodoMap,
    /// One line per discarded piece of input.
    pub dropped: Vec<String>,
}

pub fn serialize(map: &TodoMap) -> DayListResult<String> {
    Ok(serde_json::to_string_pretty(map)?)
}

pub fn deserialize(blob: &str, policy: RecoveryPolicy) -> Decoded {
    match policy {
        RecoveryPolicy::Discard => deserialize_strict(blob),
        RecoveryPolicy::Salvage => deserialize_salvage(blob),
    }
}

fn deserialize_strict(blob: &str) -> Decoded {
    let map: TodoMap = match serde_json::from_str(blob) {
        Ok(map) => map,
        Err(e) => return discard_all(format!("unreadable blob: {e}")),
    };

    let mut seen = HashSet::new();
    for (day, tasks) in &map {
        for task in tasks {
            if !seen.insert(task.id.clone()) {
                return discard_all(format!("duplicate task id {} on {}", task.id, day));
            }
        }
    }

    Decoded {
        map,
        dropped: Vec::new(),
    }
}

fn deserialize_salvage(blob: &str) -> Decoded {
    let root: Value = match serde_json::from_str(blob) {
        Ok(v) => v,
        Err(e) => return discard_all(format!("unreadable blob: {e}")),
    };

    let Value::Object(entries) = root else {
        return discard_all("blob is not a JSON object".to_string());
    };

    let mut decoded = Decoded::default();
    let mut seen = HashSet::new();

    for (raw_day, raw_tasks) in entries {
        let Ok(day) = DayKey::parse(&raw_day) else {
            decoded.dropped.push(format!("invalid day key '{raw_day}'"));
            continue;
        };

        let Value::Array(items) = raw_tasks else {
            decoded.dropped.push(format!("tasks for {day} are not a list"));
            continue;
        };

        let mut tasks = Vec::with_capacity(items.len());
        for (idx, item) in items.into_iter().enumerate() {
            match serde_json::from_value::<Task>(item) {
                Ok(task) if seen.insert(task.id.clone()) => tasks.push(task),
                Ok(task) => decoded
                    .dropped
                    .push(format!("duplicate task id {} on {day}", task.id)),
                Err(e) => decoded
                    .dropped
                    .push(format!("malformed task #{idx} on {day}: {e}")),
            }
        }

        decoded.map.insert(day, tasks);
    }

    decoded
}

fn discard_all(reason: String) -> Decoded {
    Decoded {
        map: TodoMap::new(),
        dropped: vec![reason],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskId;

    fn task(id: &str, text: &str, done: bool) -> Task {
        Task {
            id: TaskId::from(id),
            text: text.to_string(),
            done,
        }
    }

    fn day(s: &str) -> DayKey {
        DayKey::parse(s).unwrap()
    }

    fn sample() -> TodoMap {
        let mut map = TodoMap::new();
        map.insert(
            day("2024-06-10"),
            vec![task("b", "write report", true), task("a", "", false)],
        );
        map.insert(day("2024-06-11"), vec![task("c", "call mom", false)]);
        map.insert(day("2024-06-12"), vec![]);
        map
    }

    #[test]
    fn round_trips_under_both_policies() {
        let map = sample();
        let blob = serialize(&map).unwrap();

        for policy in [RecoveryPolicy::Salvage, RecoveryPolicy::Discard] {
            let decoded = deserialize(&blob, policy);
            assert_eq!(decoded.map, map);
            assert!(decoded.dropped.is_empty());
        }
    }

    #[test]
    fn preserves_task_order() {
        let blob = serialize(&sample()).unwrap();
        let decoded = deserialize(&blob, RecoveryPolicy::Salvage);
        let ids: Vec<_> = decoded.map[&day("2024-06-10")]
            .iter()
            .map(|t| t.id.as_str().to_string())
            .collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn invalid_content_yields_empty_map() {
        for blob in ["", "not json", "[1, 2, 3]", "null", "\"todos\""] {
            for policy in [RecoveryPolicy::Salvage, RecoveryPolicy::Discard] {
                let decoded = deserialize(blob, policy);
                assert!(decoded.map.is_empty(), "{blob:?} under {policy:?}");
                assert_eq!(decoded.dropped.len(), 1);
            }
        }
    }

    #[test]
    fn salvage_keeps_well_formed_entries() {
        let blob = r#"{
            "2024-06-10": [
                {"id": "a", "text": "keep me", "done": false},
                {"id": "b", "text": 42, "done": false},
                {"id": "c", "done": true}
            ],
            "2024-06-11": "oops",
            "june 12th": [{"id": "d", "text": "lost", "done": false}],
            "2024-06-13": [{"id": "e", "value": "legacy", "done": true}]
        }"#;

        let decoded = deserialize(blob, RecoveryPolicy::Salvage);

        assert_eq!(decoded.map.len(), 2);
        assert_eq!(decoded.map[&day("2024-06-10")], vec![task("a", "keep me", false)]);
        assert_eq!(decoded.map[&day("2024-06-13")], vec![task("e", "legacy", true)]);
        assert_eq!(decoded.dropped.len(), 4);
    }

    #[test]
    fn discard_drops_everything_on_one_bad_entry() {
        let blob = r#"{
            "2024-06-10": [{"id": "a", "text": "fine", "done": false}],
            "2024-06-11": [{"id": "b", "text": "fine", "done": "yes"}]
        }"#;

        let decoded = deserialize(blob, RecoveryPolicy::Discard);
        assert!(decoded.map.is_empty());
        assert_eq!(decoded.dropped.len(), 1);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let blob = r#"{
            "2024-06-10": [{"id": "a", "text": "first", "done": false}],
            "2024-06-11": [{"id": "a", "text": "second", "done": false}]
        }"#;

        let salvaged = deserialize(blob, RecoveryPolicy::Salvage);
        assert_eq!(salvaged.map[&day("2024-06-10")], vec![task("a", "first", false)]);
        assert!(salvaged.map[&day("2024-06-11")].is_empty());
        assert_eq!(salvaged.dropped.len(), 1);

        let discarded = deserialize(blob, RecoveryPolicy::Discard);
        assert!(discarded.map.is_empty());
    }

    #[test]
    fn writes_days_in_chronological_order() {
        let blob = serialize(&sample()).unwrap();
        let first = blob.find("2024-06-10").unwrap();
        let second = blob.find("2024-06-11").unwrap();
        assert!(first < second);
    }
}
