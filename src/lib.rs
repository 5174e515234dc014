//! ghsum prints an open/closed issue summary for one milestone of a
//! GitHub repository, for pasting into status reports.

pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod prompt;
pub mod run;
pub mod summary;
