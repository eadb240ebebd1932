//! Library half of the `fare` binary so commands can be tested directly.

pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
