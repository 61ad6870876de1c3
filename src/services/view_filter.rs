use crate::domain::task::{CompletionFilter, Task};

/// Case-insensitive substring match; an empty search matches everything.
pub fn matches_search(task: &Task, search: &str) -> bool {
    task.title.to_lowercase().contains(&search.to_lowercase())
}

/// Derived view: search first, then the completion filter. Canonical order
/// is preserved and the input is never modified.
pub fn filter_tasks(tasks: &[Task], search: &str, filter: CompletionFilter) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| matches_search(t, search))
        .filter(|t| filter.accepts(t))
        .cloned()
        .collect()
}
