use std::future::Future;

use tracing::info;

use crate::client::{DryRunSubmitter, GitHubImportClient, IssueSubmitter};
use crate::config::MigrationConfig;
use crate::error::{MigrationError, MigrationResult};
use crate::migrate::{find_project, index_issues, load_export, MigrationSummary, Migrator};

/// Migrate the configured project into the configured GitHub repository
pub async fn handle_migrate(config: &MigrationConfig) -> MigrationResult<MigrationSummary> {
    if config.dry_run {
        info!("dry run: nothing will be submitted");
        return run_migration(config, &DryRunSubmitter).await;
    }

    let token = config.token.as_deref().ok_or_else(|| {
        MigrationError::Config("A GitHub token is required unless --dry-run is given".to_string())
    })?;
    let client = GitHubImportClient::new(
        &config.api_url,
        &config.target_owner,
        &config.target_project,
        token,
    )?;
    info!("importing into {}", client.import_url());

    run_migration(config, &client).await
}

pub async fn run_migration<S: IssueSubmitter>(
    config: &MigrationConfig,
    submitter: &S,
) -> MigrationResult<MigrationSummary> {
    let document = load_export(&config.export_path).await?;

    let project = find_project(&document, &config.source_project).ok_or_else(|| {
        MigrationError::Input(format!("project not found: {}", config.source_project))
    })?;

    let issues = index_issues(project)?;
    info!("found {} issues", issues.len());

    Migrator::new(submitter, config.bounds()).run(&issues).await
}

/// Drive `work` to completion unless `interrupt` resolves first with `Ok`.
///
/// An interrupt source that fails (e.g. no signal handler) is ignored.
pub async fn run_interruptible<F, I>(work: F, interrupt: I) -> Option<F::Output>
where
    F: Future,
    I: Future<Output = std::io::Result<()>>,
{
    tokio::select! {
        output = work => Some(output),
        Ok(()) = interrupt => None,
    }
}
