pub mod board;
pub mod completions;
pub mod view;
