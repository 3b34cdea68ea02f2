//! Migration driver: locate the project, walk its id range, submit in order.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::client::IssueSubmitter;
use crate::convert::{convert_issue, make_placeholder};
use crate::error::MigrationResult;
use crate::migration_error;
use crate::models::{ExportDocument, ProjectEntry, SourceIssue};

/// Read and validate an export file.
///
/// Invalid JSON is an unexpected error; valid JSON with the wrong shape is an
/// input error.
pub async fn load_export(path: &Path) -> MigrationResult<ExportDocument> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        migration_error!(Input, "cannot open export file {}: {}", path.display(), e)
    })?;
    let value: Value = serde_json::from_slice(&bytes)?;
    parse_export(value)
}

pub fn parse_export(value: Value) -> MigrationResult<ExportDocument> {
    if value.get("projects").is_none() {
        return Err(migration_error!(Input, "'projects' key not found in input file"));
    }

    serde_json::from_value(value)
        .map_err(|e| migration_error!(Input, "invalid project list in input file: {}", e))
}

/// First project whose name matches exactly
pub fn find_project<'a>(document: &'a ExportDocument, name: &str) -> Option<&'a ProjectEntry> {
    document.projects.iter().find(|project| {
        debug!(
            "found in projects: {} {}",
            project.kind.as_deref().unwrap_or("-"),
            project.name.as_deref().unwrap_or("-")
        );
        project.name.as_deref() == Some(name)
    })
}

/// Validate the project's issues and index them by id
pub fn index_issues(project: &ProjectEntry) -> MigrationResult<BTreeMap<u64, SourceIssue>> {
    let project_name = project.name.as_deref().unwrap_or("-");
    let mut issues = BTreeMap::new();

    for (index, raw) in project.raw_issues().iter().enumerate() {
        let issue: SourceIssue = serde_json::from_value(raw.clone()).map_err(|e| {
            let which = match raw.get("id").and_then(Value::as_u64) {
                Some(id) => format!("issue {}", id),
                None => format!("issue at position {}", index),
            };
            migration_error!(Input, "project {}: malformed {}: {}", project_name, which, e)
        })?;

        if issues.contains_key(&issue.id) {
            return Err(migration_error!(
                Input,
                "project {}: duplicate issue id {}",
                project_name,
                issue.id
            ));
        }
        issues.insert(issue.id, issue);
    }

    Ok(issues)
}

/// Optional inclusive bounds on which ids get submitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdBounds {
    pub start_from: Option<u64>,
    pub finish_at: Option<u64>,
}

impl IdBounds {
    pub fn includes(&self, issue_id: u64) -> bool {
        self.start_from.map_or(true, |start| issue_id >= start)
            && self.finish_at.map_or(true, |finish| issue_id <= finish)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationSummary {
    pub converted: usize,
    pub placeholders: usize,
    pub skipped: usize,
}

impl MigrationSummary {
    pub fn submitted(&self) -> usize {
        self.converted + self.placeholders
    }
}

pub struct Migrator<'a, S> {
    submitter: &'a S,
    bounds: IdBounds,
}

impl<'a, S: IssueSubmitter> Migrator<'a, S> {
    pub fn new(submitter: &'a S, bounds: IdBounds) -> Self {
        Self { submitter, bounds }
    }

    /// Submit every id from the lowest to the highest known one.
    ///
    /// Gaps get a placeholder so GitHub numbering stays aligned with Google
    /// Code. The first failed submission aborts the run.
    pub async fn run(&self, issues: &BTreeMap<u64, SourceIssue>) -> MigrationResult<MigrationSummary> {
        let mut summary = MigrationSummary::default();

        let (lo, hi) = match (issues.keys().next(), issues.keys().next_back()) {
            (Some(lo), Some(hi)) => (*lo, *hi),
            _ => return Ok(summary),
        };

        for issue_id in lo..=hi {
            if !self.bounds.includes(issue_id) {
                debug!("issue {} skipped", issue_id);
                summary.skipped += 1;
                continue;
            }

            match issues.get(&issue_id) {
                Some(issue) => {
                    self.submitter.submit(issue_id, &convert_issue(issue)).await?;
                    summary.converted += 1;
                }
                None => {
                    self.submitter.submit(issue_id, &make_placeholder(issue_id)).await?;
                    summary.placeholders += 1;
                }
            }
        }

        Ok(summary)
    }
}

