use serde::{Deserialize, Serialize};

/// Issue record accepted by the GitHub issue import endpoint
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TargetIssue {
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub created_at: Option<String>,
    pub closed: bool,
    pub labels: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TargetComment {
    pub created_at: String,
    pub body: String,
}

/// Request body of one import call.
///
/// Placeholders are sent without a `comments` key at all.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ImportPayload {
    pub issue: TargetIssue,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub comments: Option<Vec<TargetComment>>,
}

/// Import status returned by a successful submission
#[derive(Debug, Deserialize)]
pub struct ImportResponse {
    pub id: u64,
    pub status: String,
    #[serde(default)]
    pub url: Option<String>,
}
