pub mod completion;
pub mod config;
pub mod habit;
pub mod overview;
