use crate::domain::edit::EditMode;
use crate::domain::task::{CompletionFilter, Task};
use crate::services::{TaskStore, TitleSorter, filter_tasks};
use tracing::debug;

/// Everything the board needs to render, owned by the root component.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardState {
    pub store: TaskStore,
    pub new_title: String,
    pub search: String,
    pub filter: CompletionFilter,
    pub edit: EditMode,
    pub sorter: TitleSorter,
    /// Set once the initial fetch has settled, successfully or not
    pub loaded: bool,
}

/// One user gesture (or the load callback).
#[derive(Debug, Clone, PartialEq)]
pub enum BoardAction {
    TasksLoaded(Vec<Task>),
    SetNewTitle(String),
    AddTask,
    DeleteTask(i64),
    ToggleCompleted(i64),
    BeginEdit { id: i64, title: String },
    SetEditBuffer(String),
    SaveEdit(i64),
    CancelEdit,
    SetSearch(String),
    SetFilter(CompletionFilter),
    ToggleSort,
}

impl BoardAction {
    pub fn name(&self) -> &'static str {
        match self {
            BoardAction::TasksLoaded(_) => "tasks_loaded",
            BoardAction::SetNewTitle(_) => "set_new_title",
            BoardAction::AddTask => "add_task",
            BoardAction::DeleteTask(_) => "delete_task",
            BoardAction::ToggleCompleted(_) => "toggle_completed",
            BoardAction::BeginEdit { .. } => "begin_edit",
            BoardAction::SetEditBuffer(_) => "set_edit_buffer",
            BoardAction::SaveEdit(_) => "save_edit",
            BoardAction::CancelEdit => "cancel_edit",
            BoardAction::SetSearch(_) => "set_search",
            BoardAction::SetFilter(_) => "set_filter",
            BoardAction::ToggleSort => "toggle_sort",
        }
    }
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            store: TaskStore::from_tasks(tasks),
            loaded: true,
            ..Self::default()
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// What the list actually shows: search, then completion filter.
    pub fn visible_tasks(&self) -> Vec<Task> {
        filter_tasks(self.store.tasks(), &self.search, self.filter)
    }

    pub fn sort_label(&self) -> &'static str {
        self.sorter.label()
    }

    pub fn apply(&mut self, action: BoardAction) {
        debug!(action = action.name(), "Applying board action");

        match action {
            BoardAction::TasksLoaded(tasks) => {
                self.store = self.store.replace_all(tasks);
                self.loaded = true;
            }
            BoardAction::SetNewTitle(title) => self.new_title = title,
            BoardAction::AddTask => {
                self.store = self.store.add(&self.new_title);
                self.new_title.clear();
            }
            BoardAction::DeleteTask(id) => self.store = self.store.delete(id),
            BoardAction::ToggleCompleted(id) => self.store = self.store.toggle_completed(id),
            BoardAction::BeginEdit { id, title } => self.edit = EditMode::begin(id, title),
            BoardAction::SetEditBuffer(text) => self.edit.set_buffer(text),
            BoardAction::SaveEdit(id) => {
                let title = self.edit.finish();
                self.store = self.store.rename(id, &title);
            }
            BoardAction::CancelEdit => {
                self.edit.finish();
            }
            BoardAction::SetSearch(search) => self.search = search,
            BoardAction::SetFilter(filter) => self.filter = filter,
            BoardAction::ToggleSort => self.store = self.sorter.activate(&self.store),
        }
    }
}
