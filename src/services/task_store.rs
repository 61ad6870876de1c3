use crate::domain::task::Task;

/// The canonical, ordered task collection.
///
/// Mutations never touch `self`; each returns a fresh store so the
/// previous collection stays valid for whoever still holds it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Id the next `add` will use: current count plus two.
    ///
    /// Not collision-safe once deletes happen or loaded ids run past the
    /// count.
    pub fn next_id(&self) -> i64 {
        self.tasks.len() as i64 + 2
    }

    /// Wholesale replacement, used once with the loader's result.
    #[must_use]
    pub fn replace_all(&self, tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    #[must_use]
    pub fn add(&self, title: &str) -> Self {
        let mut tasks = self.tasks.clone();
        tasks.push(Task::new(self.next_id(), title));
        Self { tasks }
    }

    /// Removes every task carrying `id`. Unknown ids leave the store as is.
    #[must_use]
    pub fn delete(&self, id: i64) -> Self {
        Self {
            tasks: self.tasks.iter().filter(|t| t.id != id).cloned().collect(),
        }
    }

    #[must_use]
    pub fn toggle_completed(&self, id: i64) -> Self {
        self.map_matching(id, Task::toggle_completed)
    }

    #[must_use]
    pub fn rename(&self, id: i64, title: &str) -> Self {
        self.map_matching(id, |task| task.title = title.to_string())
    }

    #[must_use]
    pub fn reordered<F>(&self, compare: F) -> Self
    where
        F: FnMut(&Task, &Task) -> std::cmp::Ordering,
    {
        let mut tasks = self.tasks.clone();
        tasks.sort_by(compare);
        Self { tasks }
    }

    fn map_matching<F>(&self, id: i64, mut update: F) -> Self
    where
        F: FnMut(&mut Task),
    {
        let tasks = self
            .tasks
            .iter()
            .cloned()
            .map(|mut task| {
                if task.id == id {
                    update(&mut task);
                }
                task
            })
            .collect();
        Self { tasks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> TaskStore {
        TaskStore::from_tasks(vec![
            Task::new(1, "Buy milk"),
            Task::new(2, "Walk dog").with_completed(true),
            Task::new(3, "Write report"),
        ])
    }

    #[test]
    fn test_add_assigns_count_plus_two() {
        let store = TaskStore::new().add("Buy milk");
        assert_eq!(store.tasks(), &[Task::new(2, "Buy milk")]);

        let store = store.add("Walk dog");
        assert_eq!(store.len(), 2);
        assert_eq!(store.tasks()[1], Task::new(3, "Walk dog"));
    }

    #[test]
    fn test_add_accepts_empty_title() {
        let store = TaskStore::new().add("");
        assert_eq!(store.tasks()[0].title, "");
    }

    #[test]
    fn test_add_can_collide_after_delete() {
        // 3 tasks -> id 5; delete one -> back to 3 tasks -> id 5 again.
        let store = sample_store().add("Fourth");
        assert_eq!(store.tasks()[3].id, 5);

        let store = store.delete(1).add("Again");
        let ids: Vec<i64> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3, 5, 5]);

        let collided = TaskStore::from_tasks(vec![Task::new(3, "loaded")]).add("new");
        assert_eq!(collided.tasks()[0].id, collided.tasks()[1].id);
    }

    #[test]
    fn test_add_leaves_original_untouched() {
        let original = sample_store();
        let updated = original.add("New");

        assert_eq!(original.len(), 3);
        assert_eq!(updated.len(), 4);
    }

    #[test]
    fn test_delete_removes_matching_task() {
        let store = sample_store().delete(2);
        let titles: Vec<&str> = store.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Buy milk", "Write report"]);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let store = sample_store();
        assert_eq!(store.delete(999), store);
        assert_eq!(store.toggle_completed(999), store);
        assert_eq!(store.rename(999, "nope"), store);
    }

    #[test]
    fn test_toggle_completed_flips_only_target() {
        let store = sample_store().toggle_completed(1).toggle_completed(2);

        assert!(store.get(1).unwrap().completed);
        assert!(!store.get(2).unwrap().completed);
        assert!(!store.get(3).unwrap().completed);
    }

    #[test]
    fn test_rename_updates_only_target() {
        let store = sample_store().rename(3, "Write summary");

        assert_eq!(store.get(3).unwrap().title, "Write summary");
        assert_eq!(store.get(1).unwrap().title, "Buy milk");
    }

    #[test]
    fn test_replace_all_discards_previous() {
        let store = sample_store().replace_all(vec![Task::new(10, "Only")]);
        assert_eq!(store.tasks(), &[Task::new(10, "Only")]);
    }
}
