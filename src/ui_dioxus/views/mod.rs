pub mod board_view;
pub mod task_row;


pub use board_view::BoardView;
pub use task_row::TaskRow;
