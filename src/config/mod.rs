mod board_config;

pub use board_config::{BoardConfig, DEFAULT_ENDPOINT};
