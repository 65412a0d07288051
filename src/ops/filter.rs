use crate::model::store::StatusFilter;
use crate::model::task::Task;

/// Case-insensitive substring match of the query against a task's title or
/// description. An empty query matches everything.
pub fn matches_query(task: &Task, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    task.title.to_lowercase().contains(&needle)
        || task.description.to_lowercase().contains(&needle)
}

/// The ordered subsequence of `tasks` matching both the status filter and
/// the search query. Preserves the collection's order (newest first).
pub fn visible_tasks<'a>(tasks: &'a [Task], filter: StatusFilter, query: &str) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| filter.matches(t.status) && matches_query(t, query))
        .collect()
}
