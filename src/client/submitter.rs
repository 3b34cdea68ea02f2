use tracing::info;

use crate::error::MigrationResult;
use crate::models::ImportPayload;

/// Destination of converted issues.
///
/// `issue_id` is the Google Code id and only used for reporting; the
/// target tracker assigns its own numbers.
#[allow(async_fn_in_trait)]
pub trait IssueSubmitter {
    async fn submit(&self, issue_id: u64, payload: &ImportPayload) -> MigrationResult<()>;
}

/// Logs each payload instead of sending it
#[derive(Debug, Default)]
pub struct DryRunSubmitter;

impl IssueSubmitter for DryRunSubmitter {
    async fn submit(&self, issue_id: u64, payload: &ImportPayload) -> MigrationResult<()> {
        let body = serde_json::to_string_pretty(payload)?;
        info!("dry run, issue {} not submitted: {}", issue_id, payload.issue.title);
        info!("payload: {}", body);
        Ok(())
    }
}
