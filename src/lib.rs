// Module declarations
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod convert;
pub mod error;
pub mod logging;
pub mod mapping;
pub mod migrate;
pub mod models;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use client::{DryRunSubmitter, GitHubImportClient, IssueSubmitter};
pub use config::MigrationConfig;
pub use convert::{convert_issue, make_placeholder};
pub use error::{MigrationError, MigrationResult};
pub use migrate::{IdBounds, MigrationSummary, Migrator};
pub use models::*;
