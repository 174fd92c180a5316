pub mod enums;
pub mod format;
pub mod todo;
pub mod views;

pub use enums::{AlertKind, ControlMode, DisplayMode, Filter, FormField, Priority, UiMode};
pub use format::{format_due_date, format_priority, format_status, format_task};
pub use todo::Todo;
pub use views::{drag_marker, drop_reorder};
