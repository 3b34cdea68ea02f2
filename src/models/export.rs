//! Schema of the Google Takeout "project hosting" export.
//!
//! Only the fields the migration reads are modelled. Issue records are kept
//! as raw JSON until their project is selected, so a malformed issue in an
//! unrelated project never blocks a migration.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct ExportDocument {
    pub projects: Vec<ProjectEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectEntry {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub issues: Option<IssueCollection>,
}

impl ProjectEntry {
    /// Raw issue records, empty when the project has no `issues` section
    pub fn raw_issues(&self) -> &[Value] {
        self.issues
            .as_ref()
            .map(|issues| issues.items.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Deserialize)]
pub struct IssueCollection {
    #[serde(default)]
    pub items: Vec<Value>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceIssue {
    pub id: u64,
    pub title: String,
    pub published: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    pub author: Author,
    #[serde(default)]
    pub comments: CommentCollection,
}

impl SourceIssue {
    pub fn is_closed(&self) -> bool {
        self.state.as_deref() == Some("closed")
    }

    /// The first comment carries the issue description
    pub fn description(&self) -> Option<&SourceComment> {
        self.comments.items.first()
    }

    /// Follow-up comments, i.e. everything after the description
    pub fn follow_ups(&self) -> &[SourceComment] {
        self.comments.items.get(1..).unwrap_or(&[])
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CommentCollection {
    #[serde(default)]
    pub items: Vec<SourceComment>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceComment {
    pub published: String,
    pub author: Author,
    #[serde(default)]
    pub content: Option<String>,
}

impl SourceComment {
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct Author {
    pub name: String,
}
