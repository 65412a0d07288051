use serde::{Deserialize, Serialize};

use super::task::{Status, Task, TaskId};
use crate::ops::filter;

/// Status filter for the visible task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl StatusFilter {
    /// Whether a task with the given status passes this filter
    pub fn matches(self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == Status::Pending,
            StatusFilter::Completed => status == Status::Completed,
        }
    }
}

/// Single source of truth for tasks and view selection within a session.
///
/// The collection is kept in insertion order with the newest task first.
/// All mutation goes through [`crate::ops::task_ops`]; derived values (the
/// visible list, stats) are recomputed from the collection on every read
/// rather than cached, so idempotent re-reads return the same value until
/// the next mutation.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    filter: StatusFilter,
    search_query: String,
    next_id: u64,
}

impl TaskStore {
    pub fn new() -> TaskStore {
        TaskStore::default()
    }

    /// The full collection, newest-created first
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Find a task by id
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Set the status filter. Takes effect on the next read.
    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    /// Set the search query. Takes effect on the next read.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// The ordered subsequence of the collection matching both the status
    /// filter and the search query. Pure read — never mutates the store.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        filter::visible_tasks(&self.tasks, self.filter, &self.search_query)
    }

    // --- Mutation seams for ops::task_ops ---

    pub(crate) fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Next id from the forward-only counter
    pub(crate) fn fresh_id(&mut self) -> TaskId {
        self.next_id += 1;
        TaskId(self.next_id)
    }

    /// Insert at the front of the collection (newest first)
    pub(crate) fn prepend(&mut self, task: Task) {
        self.tasks.insert(0, task);
    }

    pub(crate) fn remove(&mut self, id: TaskId) -> Option<Task> {
        let idx = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(idx))
    }
}
