pub mod config;

pub use config::{resolve_token, MigrationConfig};
