pub mod migrate;

pub use migrate::{handle_migrate, run_interruptible, run_migration};
