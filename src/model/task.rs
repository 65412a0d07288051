use std::fmt;

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Opaque task identifier. Assigned by the store at creation, immutable,
/// never reused — the store's counter only moves forward, even after deletes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T-{:03}", self.0)
    }
}

/// Task completion state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Completed,
}

impl Status {
    /// The other of the two states
    pub fn toggled(self) -> Status {
        match self {
            Status::Pending => Status::Completed,
            Status::Completed => Status::Pending,
        }
    }
}

/// Task priority level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Category labels offered by default. The store accepts any label; this set
/// is what the picker UI presents.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Work", "Personal", "Health", "Learning"];

/// A single task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id, immutable once assigned
    pub id: TaskId,
    /// Short summary (non-empty — enforced on the creation path)
    pub title: String,
    /// Longer free text, may be empty
    pub description: String,
    /// When the task is due
    pub due_date: DateTime<Utc>,
    /// Pending or completed
    pub status: Status,
    /// Low, medium, or high
    pub priority: Priority,
    /// Free-form label, conventionally one of [`DEFAULT_CATEGORIES`]
    pub category: String,
    /// Creation time, immutable once set
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Whether the task is overdue: still pending with a due date strictly
    /// before `now`. Same rule the stats engine uses for the overdue count.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status == Status::Pending && self.due_date < now
    }

    /// Whether the task is due on the given local calendar day.
    pub fn is_due_on(&self, day: NaiveDate) -> bool {
        self.due_date.with_timezone(&Local).date_naive() == day
    }
}

/// Input for creating a task. The store assigns `id`, `status`
/// (always pending), and `created_at`.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
    pub priority: Priority,
    pub category: String,
}

/// Partial update merged into an existing task. `None` fields are left
/// untouched. `id` and `created_at` are not patchable.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn task_due(due_date: DateTime<Utc>, status: Status) -> Task {
        Task {
            id: TaskId(1),
            title: "Water the plants".to_string(),
            description: String::new(),
            due_date,
            status,
            priority: Priority::Medium,
            category: "Personal".to_string(),
            created_at: due_date,
        }
    }

    #[test]
    fn test_toggled_flips_both_ways() {
        assert_eq!(Status::Pending.toggled(), Status::Completed);
        assert_eq!(Status::Completed.toggled(), Status::Pending);
    }

    #[test]
    fn test_overdue_requires_pending() {
        let now = Utc::now();
        let past = now - Duration::hours(2);
        assert!(task_due(past, Status::Pending).is_overdue(now));
        assert!(!task_due(past, Status::Completed).is_overdue(now));
    }

    #[test]
    fn test_overdue_is_strict() {
        let now = Utc::now();
        // Due exactly now is not overdue; due in the future is not overdue.
        assert!(!task_due(now, Status::Pending).is_overdue(now));
        assert!(!task_due(now + Duration::hours(1), Status::Pending).is_overdue(now));
    }

    #[test]
    fn test_due_on_local_day() {
        let now = Utc::now();
        let today = now.with_timezone(&Local).date_naive();
        assert!(task_due(now, Status::Pending).is_due_on(today));
        assert!(!task_due(now + Duration::days(3), Status::Pending).is_due_on(today));
    }

    #[test]
    fn test_task_id_display() {
        assert_eq!(TaskId(7).to_string(), "T-007");
        assert_eq!(TaskId(1234).to_string(), "T-1234");
    }
}
