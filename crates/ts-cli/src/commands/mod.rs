//! CLI subcommand implementations.

pub mod employees;
pub mod export;
pub mod row;
pub mod submit;
pub mod summary;
pub mod util;
