/// Maximum number of characters kept from a task's text
pub const MAX_TASK_CHARS: usize = 30;

/// Placeholder shown (and stored) when a task has no due date
pub const NO_DUE_DATE: &str = "No due date";

/// Truncate task text to `MAX_TASK_CHARS` characters, marking the cut with "..."
pub fn format_task(text: &str) -> String {
    if text.chars().count() > MAX_TASK_CHARS {
        let mut truncated: String = text.chars().take(MAX_TASK_CHARS).collect();
        truncated.push_str("...");
        truncated
    } else {
        text.to_string()
    }
}

/// Return the due date, or the placeholder when it is empty
pub fn format_due_date(date: &str) -> String {
    if date.is_empty() {
        NO_DUE_DATE.to_string()
    } else {
        date.to_string()
    }
}

/// Capitalize a priority name and append " Priority" ("low" -> "Low Priority")
pub fn format_priority(priority: &str) -> String {
    let mut chars = priority.chars();
    let head: String = chars.next().map(|c| c.to_uppercase().collect()).unwrap_or_default();
    format!("{}{} Priority", head, chars.as_str())
}

pub fn format_status(completed: bool) -> &'static str {
    if completed {
        "Completed"
    } else {
        "Pending"
    }
}
