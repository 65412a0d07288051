use chrono::Utc;

use crate::model::store::TaskStore;
use crate::model::task::{NewTask, Status, Task, TaskId, TaskPatch};

/// Error type for task operations
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("task title is empty")]
    EmptyTitle,
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// Add a new task to the front of the collection.
///
/// The title is trimmed and must be non-empty; the store assigns a fresh id,
/// pending status, and the creation timestamp. Returns the assigned id.
/// Callers must not blindly retry on failure — a retried add creates a
/// second task.
pub fn add_task(store: &mut TaskStore, input: NewTask) -> Result<TaskId, TaskError> {
    let title = input.title.trim().to_string();
    if title.is_empty() {
        return Err(TaskError::EmptyTitle);
    }

    let id = store.fresh_id();
    store.prepend(Task {
        id,
        title,
        description: input.description,
        due_date: input.due_date,
        status: Status::Pending,
        priority: input.priority,
        category: input.category,
        created_at: Utc::now(),
    });
    Ok(id)
}

/// Merge a patch into the task matching `id`, leaving other tasks untouched.
/// `id` and `created_at` cannot be changed.
pub fn update_task(store: &mut TaskStore, id: TaskId, patch: TaskPatch) -> Result<(), TaskError> {
    let task = store.get_mut(id).ok_or(TaskError::NotFound(id))?;

    if let Some(title) = patch.title {
        task.title = title;
    }
    if let Some(description) = patch.description {
        task.description = description;
    }
    if let Some(due_date) = patch.due_date {
        task.due_date = due_date;
    }
    if let Some(status) = patch.status {
        task.status = status;
    }
    if let Some(priority) = patch.priority {
        task.priority = priority;
    }
    if let Some(category) = patch.category {
        task.category = category;
    }
    Ok(())
}

/// Remove the task matching `id` from the collection.
pub fn delete_task(store: &mut TaskStore, id: TaskId) -> Result<(), TaskError> {
    store.remove(id).map(|_| ()).ok_or(TaskError::NotFound(id))
}

/// Flip a task between pending and completed.
pub fn toggle_status(store: &mut TaskStore, id: TaskId) -> Result<(), TaskError> {
    let task = store.get_mut(id).ok_or(TaskError::NotFound(id))?;
    task.status = task.status.toggled();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Priority;
    use chrono::Duration;

    fn new_task(title: &str) -> NewTask {
        NewTask {
            title: title.to_string(),
            description: String::new(),
            due_date: Utc::now() + Duration::days(1),
            priority: Priority::Medium,
            category: "Personal".to_string(),
        }
    }

    fn sample_store() -> (TaskStore, Vec<TaskId>) {
        let mut store = TaskStore::new();
        let ids = vec![
            add_task(&mut store, new_task("Write report")).unwrap(),
            add_task(&mut store, new_task("Book dentist appointment")).unwrap(),
            add_task(&mut store, new_task("Buy groceries")).unwrap(),
        ];
        (store, ids)
    }

    // --- Create ---

    #[test]
    fn test_add_task_prepends() {
        let (store, ids) = sample_store();
        assert_eq!(store.len(), 3);
        // Newest first
        assert_eq!(store.tasks()[0].id, ids[2]);
        assert_eq!(store.tasks()[0].title, "Buy groceries");
        assert_eq!(store.tasks()[2].id, ids[0]);
    }

    #[test]
    fn test_add_task_defaults() {
        let mut store = TaskStore::new();
        let id = add_task(&mut store, new_task("Write report")).unwrap();
        let task = store.get(id).unwrap();
        assert_eq!(task.status, Status::Pending);
        assert_eq!(task.category, "Personal");
    }

    #[test]
    fn test_add_task_trims_title() {
        let mut store = TaskStore::new();
        let id = add_task(&mut store, new_task("  Write report  ")).unwrap();
        assert_eq!(store.get(id).unwrap().title, "Write report");
    }

    #[test]
    fn test_add_task_rejects_empty_title() {
        let mut store = TaskStore::new();
        assert!(matches!(
            add_task(&mut store, new_task("")),
            Err(TaskError::EmptyTitle)
        ));
        assert!(matches!(
            add_task(&mut store, new_task("   \t ")),
            Err(TaskError::EmptyTitle)
        ));
        // No partial task was created
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut store = TaskStore::new();
        let mut ids = Vec::new();
        for i in 0..20 {
            ids.push(add_task(&mut store, new_task(&format!("Task {i}"))).unwrap());
        }
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = TaskStore::new();
        let first = add_task(&mut store, new_task("Write report")).unwrap();
        delete_task(&mut store, first).unwrap();
        let second = add_task(&mut store, new_task("Buy groceries")).unwrap();
        assert_ne!(first, second);
    }

    // --- Update ---

    #[test]
    fn test_update_merges_patch() {
        let (mut store, ids) = sample_store();
        update_task(
            &mut store,
            ids[0],
            TaskPatch {
                title: Some("Write quarterly report".to_string()),
                priority: Some(Priority::High),
                ..TaskPatch::default()
            },
        )
        .unwrap();

        let task = store.get(ids[0]).unwrap();
        assert_eq!(task.title, "Write quarterly report");
        assert_eq!(task.priority, Priority::High);
        // Unpatched fields untouched
        assert_eq!(task.status, Status::Pending);
        assert_eq!(task.category, "Personal");
    }

    #[test]
    fn test_update_leaves_other_tasks_untouched() {
        let (mut store, ids) = sample_store();
        let before: Vec<_> = store.tasks().to_vec();
        update_task(
            &mut store,
            ids[1],
            TaskPatch {
                description: Some("Ask about the wisdom tooth".to_string()),
                ..TaskPatch::default()
            },
        )
        .unwrap();

        for (i, task) in store.tasks().iter().enumerate() {
            if task.id == ids[1] {
                assert_eq!(task.description, "Ask about the wisdom tooth");
            } else {
                assert_eq!(*task, before[i]);
            }
        }
    }

    #[test]
    fn test_update_preserves_id_and_created_at() {
        let (mut store, ids) = sample_store();
        let created_at = store.get(ids[0]).unwrap().created_at;
        update_task(
            &mut store,
            ids[0],
            TaskPatch {
                status: Some(Status::Completed),
                ..TaskPatch::default()
            },
        )
        .unwrap();
        let task = store.get(ids[0]).unwrap();
        assert_eq!(task.id, ids[0]);
        assert_eq!(task.created_at, created_at);
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let (mut store, _) = sample_store();
        let result = update_task(&mut store, TaskId(999), TaskPatch::default());
        assert!(matches!(result, Err(TaskError::NotFound(TaskId(999)))));
    }

    // --- Delete ---

    #[test]
    fn test_delete_removes_task() {
        let (mut store, ids) = sample_store();
        delete_task(&mut store, ids[1]).unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.get(ids[1]).is_none());
        // Absent from every view too
        assert!(store.visible_tasks().iter().all(|t| t.id != ids[1]));
    }

    #[test]
    fn test_delete_missing_id_is_not_found() {
        let (mut store, _) = sample_store();
        assert!(matches!(
            delete_task(&mut store, TaskId(999)),
            Err(TaskError::NotFound(_))
        ));
        assert_eq!(store.len(), 3);
    }

    // --- Toggle ---

    #[test]
    fn test_toggle_flips_status() {
        let (mut store, ids) = sample_store();
        toggle_status(&mut store, ids[0]).unwrap();
        assert_eq!(store.get(ids[0]).unwrap().status, Status::Completed);
    }

    #[test]
    fn test_toggle_twice_is_involution() {
        let (mut store, ids) = sample_store();
        let before = store.get(ids[0]).unwrap().clone();
        toggle_status(&mut store, ids[0]).unwrap();
        toggle_status(&mut store, ids[0]).unwrap();
        // Back to the original state, all other fields unchanged
        assert_eq!(*store.get(ids[0]).unwrap(), before);
    }

    #[test]
    fn test_toggle_missing_id_is_not_found() {
        let (mut store, _) = sample_store();
        assert!(matches!(
            toggle_status(&mut store, TaskId(999)),
            Err(TaskError::NotFound(_))
        ));
    }
}
