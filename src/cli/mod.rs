//! Presentation layer: renders store snapshots and forwards user intents.

pub mod commands;
pub mod output;

pub use commands::CommandError;
