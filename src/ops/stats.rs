//! Pure derivations over the full (unfiltered) task collection.
//!
//! Every function here is total and recomputable from the collection alone:
//! no accumulator state, no knowledge of view parameters. Observers call
//! these after each mutation instead of the engine pushing updates.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::Serialize;

use crate::model::task::{Status, Task};

/// A milestone unlocked by a threshold rule.
///
/// Achievements are recomputed from the current counts every time and are
/// not sticky: if completions drop (a completed task is toggled back or
/// deleted), a previously unlocked achievement disappears again. That is the
/// defined behavior, not an oversight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Achievement {
    FirstTaskDone,
    TaskMaster,
    OnFire,
}

impl Achievement {
    /// Display label for the achievement
    pub fn label(self) -> &'static str {
        match self {
            Achievement::FirstTaskDone => "First Task Done",
            Achievement::TaskMaster => "Task Master",
            Achievement::OnFire => "On Fire",
        }
    }
}

/// Number of completed tasks
pub fn completed_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| t.status == Status::Completed).count()
}

/// Number of pending tasks
pub fn pending_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| t.status == Status::Pending).count()
}

/// Number of tasks due on the given local calendar day
pub fn due_today_count(tasks: &[Task], today: NaiveDate) -> usize {
    tasks.iter().filter(|t| t.is_due_on(today)).count()
}

/// Number of pending tasks whose due date is strictly before `now`
pub fn overdue_count(tasks: &[Task], now: DateTime<Utc>) -> usize {
    tasks.iter().filter(|t| t.is_overdue(now)).count()
}

/// Streak value: one point per three completed tasks.
///
/// Despite the name this is not a consecutive-day streak; it is a simple
/// monotonic function of total completions, `completed / 3`.
pub fn streak(tasks: &[Task]) -> usize {
    completed_count(tasks) / 3
}

/// Achievements unlocked for the given counts. Each threshold rule is
/// evaluated independently; unlocks are not mutually exclusive.
pub fn achievements(completed: usize, streak: usize) -> Vec<Achievement> {
    let mut unlocked = Vec::new();
    if completed >= 1 {
        unlocked.push(Achievement::FirstTaskDone);
    }
    if completed >= 5 {
        unlocked.push(Achievement::TaskMaster);
    }
    if streak >= 3 {
        unlocked.push(Achievement::OnFire);
    }
    unlocked
}

/// Snapshot of every derived value at a point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub due_today: usize,
    pub overdue: usize,
    pub streak: usize,
    pub achievements: Vec<Achievement>,
}

impl Stats {
    /// Compute the full snapshot from the unfiltered collection. "Today" is
    /// the local calendar day containing `now`.
    pub fn compute(tasks: &[Task], now: DateTime<Utc>) -> Stats {
        let completed = completed_count(tasks);
        let streak = streak(tasks);
        Stats {
            total: tasks.len(),
            completed,
            pending: pending_count(tasks),
            due_today: due_today_count(tasks, now.with_timezone(&Local).date_naive()),
            overdue: overdue_count(tasks, now),
            streak,
            achievements: achievements(completed, streak),
        }
    }
}
