//! Core types for daylist.
//!
//! - `day_key` and `week` turn calendar dates into store keys and week strips
//! - `store` holds the day → tasks mapping and its mutations
//! - `persistence` and `codec` save and restore that mapping as one blob

pub mod codec;
pub mod command;
pub mod config;
pub mod day_key;
pub mod error;
pub mod persistence;
pub mod store;
pub mod task;
pub mod week;

pub use command::{Command, Outcome};
pub use day_key::{DayKey, to_day_key};
pub use error::{DayListError, DayListResult};
pub use store::TodoStore;
pub use task::{Task, TaskId};
pub use week::{Week, WeekStart, current_week};
