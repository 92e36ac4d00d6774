//! Task items.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque task identifier, unique across the whole store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn generate() -> Self {
        TaskId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        TaskId(s.to_string())
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        TaskId(s)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Blobs written by the browser version call this field `value`
    #[serde(alias = "value")]
    pub text: String,
    pub done: bool,
}

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Task {
            id: TaskId::generate(),
            text: text.into(),
            done: false,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_pending_with_fresh_id() {
        let a = Task::new("buy milk");
        let b = Task::new("buy milk");

        assert!(!a.done);
        assert_eq!(a.text, "buy milk");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn reads_legacy_value_field() {
        let task: Task =
            serde_json::from_str(r#"{"id":"abc","value":"water plants","done":true}"#).unwrap();

        assert_eq!(task.id.as_str(), "abc");
        assert_eq!(task.text, "water plants");
        assert!(task.done);
    }

    #[test]
    fn writes_text_field() {
        let task = Task {
            id: TaskId::from("abc"),
            text: "water plants".into(),
            done: false,
        };
        let json = serde_json::to_value(&task).unwrap();

        assert_eq!(json["text"], "water plants");
        assert!(json.get("value").is_none());
    }
}
