pub mod commands;

pub use commands::{move_line_down, move_line_up, parts, search, toggle_task};
