use serde::Deserialize;
use std::fmt;

/// A single to-do entry.
///
/// Remote payloads carry extra fields (`userId` and friends); they are
/// ignored on decode.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}

/// Value of the completion selector. The selector speaks in the strings
/// `""`, `"true"` and `"false"`; anything unrecognised means "all".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompletionFilter {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl CompletionFilter {
    pub const ALL: [CompletionFilter; 3] = [Self::All, Self::Completed, Self::Incomplete];

    pub fn from_value(value: &str) -> Self {
        match value {
            "true" => Self::Completed,
            "false" => Self::Incomplete,
            _ => Self::All,
        }
    }

    pub fn as_value(&self) -> &'static str {
        match self {
            Self::All => "",
            Self::Completed => "true",
            Self::Incomplete => "false",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Completed => "Completed",
            Self::Incomplete => "Not completed",
        }
    }

    /// Compares against the string form of `completed`, the same way the
    /// selector value is produced.
    pub fn accepts(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            _ => task.completed.to_string() == self.as_value(),
        }
    }
}

impl fmt::Display for CompletionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}
