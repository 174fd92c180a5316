use super::enums::Priority;
use super::format::{format_due_date, format_task};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Value of the `status` field at creation time
pub const INITIAL_STATUS: &str = "pending";

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Opaque unique identifier, immutable after creation
    pub id: String,
    /// Task text, already truncated for display
    pub task: String,
    /// Free-form due date, or the "No due date" placeholder
    pub due_date: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    /// Set once at creation and kept only for file compatibility.
    /// Display and filtering always go through `completed`.
    #[serde(default = "initial_status")]
    pub status: String,
}

fn initial_status() -> String {
    INITIAL_STATUS.to_string()
}

impl Todo {
    pub fn new(task: &str, due_date: &str, priority: Priority) -> Self {
        Self {
            id: generate_id(),
            task: format_task(task),
            due_date: format_due_date(due_date),
            priority,
            completed: false,
            status: initial_status(),
        }
    }
}

/// Generate a task id: two independent base-36 strings, concatenated
pub fn generate_id() -> String {
    let bits = Uuid::new_v4().as_u128();
    let high = (bits >> 64) as u64;
    let low = bits as u64;
    format!("{}{}", to_base36(high), to_base36(low))
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
