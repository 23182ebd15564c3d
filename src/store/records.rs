use chrono::NaiveDate;
use fake::Dummy;
use serde::{Deserialize, Serialize};

/// Defines task priority levels.
///
#[derive(Clone, Copy, Debug, Dummy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Return the display label for the priority.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Return the next priority in low -> medium -> high order, wrapping
    /// around at the end. Used by the task form selector.
    ///
    pub fn cycled(&self) -> Priority {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }
}

/// Defines the three task workflow stages.
///
#[derive(Clone, Copy, Debug, Dummy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Fixed column order for the kanban board.
    ///
    pub const COLUMNS: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    /// Return the column title for the status.
    ///
    pub fn title(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    /// Return the previous workflow column, or None at the left edge.
    ///
    pub fn previous(&self) -> Option<TaskStatus> {
        match self {
            TaskStatus::Todo => None,
            TaskStatus::InProgress => Some(TaskStatus::Todo),
            TaskStatus::Done => Some(TaskStatus::InProgress),
        }
    }

    /// Return the next workflow column, or None at the right edge.
    ///
    pub fn next(&self) -> Option<TaskStatus> {
        match self {
            TaskStatus::Todo => Some(TaskStatus::InProgress),
            TaskStatus::InProgress => Some(TaskStatus::Done),
            TaskStatus::Done => None,
        }
    }

    /// Return the next status in workflow order, wrapping around to the
    /// start. Used by the list view status key.
    ///
    pub fn cycled(&self) -> TaskStatus {
        self.next().unwrap_or(TaskStatus::Todo)
    }
}

/// Defines project data structure.
///
#[derive(Clone, Debug, Dummy, Deserialize, Serialize, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub created_at: Option<String>,
}

/// Defines task data structure.
///
#[derive(Clone, Debug, Dummy, Deserialize, Serialize, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub due_date: String,
    pub created_at: Option<String>,
}

impl Task {
    /// Whether the task's due date has passed without the task being done.
    /// Unparseable due dates are never considered overdue.
    ///
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match NaiveDate::parse_from_str(&self.due_date, "%Y-%m-%d") {
            Ok(due) => due < today && self.status != TaskStatus::Done,
            Err(_) => false,
        }
    }
}

/// Defines the fields a caller supplies when creating a task. The workflow
/// status is not part of this structure: new tasks always start in `todo`.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTask {
    pub project_id: String,
    pub title: String,
    pub priority: Priority,
    pub due_date: String,
}
