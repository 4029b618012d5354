//! CLI command handlers
//!
//! Each subcommand is implemented in its own module.

pub mod helpers;
pub mod journal;
pub mod questions;
pub mod recommend;
pub mod tips;
