pub mod add;
pub mod categories;
pub mod common;
pub mod completions;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
pub mod seed;
pub mod show;
pub mod summary;
