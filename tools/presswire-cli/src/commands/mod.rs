//! CLI commands.

pub mod import;

pub use import::ImportArgs;
