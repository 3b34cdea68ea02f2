use std::env;
use std::path::PathBuf;

use clap::ArgMatches;

use crate::constants::TOKEN_ENV_VAR;
use crate::error::{MigrationError, MigrationResult};
use crate::migrate::IdBounds;

#[derive(Debug, Clone)]
pub struct MigrationConfig {
    pub export_path: PathBuf,
    pub source_project: String,
    pub target_owner: String,
    pub target_project: String,
    pub token: Option<String>,
    pub start_from: Option<u64>,
    pub finish_at: Option<u64>,
    pub api_url: String,
    pub dry_run: bool,
    pub verbosity: u8,
    pub quiet: bool,
    pub save_log: bool,
}

impl MigrationConfig {
    /// Build the configuration from parsed flags, falling back to
    /// `$GITHUB_TOKEN` when no token was given
    pub fn from_matches(matches: &ArgMatches) -> MigrationResult<Self> {
        Self::from_matches_with_token(matches, env::var(TOKEN_ENV_VAR).ok())
    }

    pub fn from_matches_with_token(
        matches: &ArgMatches,
        fallback_token: Option<String>,
    ) -> MigrationResult<Self> {
        let required = |name: &str| -> MigrationResult<String> {
            matches
                .get_one::<String>(name)
                .cloned()
                .ok_or_else(|| MigrationError::Config(format!("--{} is required", name)))
        };

        let config = MigrationConfig {
            export_path: PathBuf::from(required("file")?),
            source_project: required("google-project")?,
            target_owner: required("github-owner")?,
            target_project: required("github-project")?,
            token: resolve_token(matches.get_one::<String>("token").map(String::as_str), fallback_token),
            start_from: matches.get_one::<u64>("start-from").copied(),
            finish_at: matches.get_one::<u64>("finish-at").copied(),
            api_url: required("api-url")?.trim_end_matches('/').to_string(),
            dry_run: matches.get_flag("dry-run"),
            verbosity: matches.get_count("verbose"),
            quiet: matches.get_flag("quiet"),
            save_log: matches.get_flag("save-log"),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> MigrationResult<()> {
        if self.token.is_none() && !self.dry_run {
            return Err(MigrationError::Config(format!(
                "No GitHub token found. Pass --token or set {}.",
                TOKEN_ENV_VAR
            )));
        }

        if let (Some(start), Some(finish)) = (self.start_from, self.finish_at) {
            if start > finish {
                return Err(MigrationError::Config(format!(
                    "--start-from ({}) is greater than --finish-at ({})",
                    start, finish
                )));
            }
        }

        if !self.api_url.starts_with("https://") && !self.api_url.starts_with("http://") {
            return Err(MigrationError::Config(format!(
                "API URL must be an http(s) URL: {}",
                self.api_url
            )));
        }

        Ok(())
    }

    pub fn bounds(&self) -> IdBounds {
        IdBounds {
            start_from: self.start_from,
            finish_at: self.finish_at,
        }
    }
}

/// Explicit token first, then the environment. Blank values count as absent.
pub fn resolve_token(flag: Option<&str>, fallback: Option<String>) -> Option<String> {
    let usable = |token: &str| {
        let token = token.trim();
        (!token.is_empty()).then(|| token.to_string())
    };

    flag.and_then(usable)
        .or_else(|| fallback.as_deref().and_then(usable))
}
