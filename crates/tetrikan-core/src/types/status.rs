//! Task status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status. Each status owns exactly one band of grid rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Todo,
    InProgress,
    Test,
    Done,
}

impl Status {
    /// All statuses in workflow order.
    pub const ALL: [Status; 4] = [Status::Todo, Status::InProgress, Status::Test, Status::Done];

    /// Default column title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Test => "Testing",
            Self::Done => "Done",
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::Todo
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Todo => write!(f, "todo"),
            Self::InProgress => write!(f, "in_progress"),
            Self::Test => write!(f, "test"),
            Self::Done => write!(f, "done"),
        }
    }
}
