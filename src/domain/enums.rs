use serde::{Deserialize, Serialize};

/// Task priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parse a priority name; empty or unknown input is `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Next value in the selector (wraps around)
    pub fn next(&self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Low,
        }
    }

    /// Previous value in the selector (wraps around)
    pub fn prev(&self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::Medium => Self::Low,
            Self::High => Self::Medium,
        }
    }
}

// Persisted collections may carry priorities written by hand; anything
// unrecognized falls back to low instead of failing the whole load.
impl From<String> for Priority {
    fn from(value: String) -> Self {
        Self::parse(&value).unwrap_or_default()
    }
}

/// Which subset of the collection the list shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Pending,
    Completed,
}

impl Filter {
    /// Parse a filter key ("all", "pending", "completed")
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "all" => Some(Self::All),
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Label shown on the filter control
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }

    /// Key the store filters by: the lower-cased label
    pub fn key(&self) -> String {
        self.label().to_lowercase()
    }

    pub fn matches(&self, completed: bool) -> bool {
        match self {
            Self::All => true,
            Self::Pending => !completed,
            Self::Completed => completed,
        }
    }

    pub fn all() -> &'static [Filter] {
        &[Filter::All, Filter::Pending, Filter::Completed]
    }

    /// Next filter control in the bar (wraps around)
    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Pending,
            Self::Pending => Self::Completed,
            Self::Completed => Self::All,
        }
    }
}

/// Light/dark presentation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Light,
    Dark,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted mode; anything but "dark" is light
    pub fn parse(value: &str) -> Self {
        if value.trim() == "dark" {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    Form,     // Input form open (adding or editing)
    Dragging, // A row has been picked up for reordering
}

/// What submitting the input form does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlMode {
    Adding,
    Editing(String), // Target task id
}

/// Field focused in the input form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Task,
    DueDate,
    Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}
