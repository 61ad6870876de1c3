pub mod task;
pub mod edit;
