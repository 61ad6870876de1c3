pub mod error_handling;
pub mod loader;
pub mod task_store;
pub mod view_filter;
pub mod view_sorter;

pub use error_handling::LoadError;
pub use loader::{HttpTaskSource, LoadOutcome, StaticTaskSource, TaskSource, load_initial};
pub use task_store::TaskStore;
pub use view_filter::filter_tasks;
pub use view_sorter::{SortDirection, TitleSorter};
