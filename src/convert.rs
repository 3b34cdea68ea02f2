use tracing::{debug, warn};

use crate::constants::{PLACEHOLDER_BODY, PLACEHOLDER_LABEL};
use crate::mapping::map_labels;
use crate::models::{ImportPayload, SourceIssue, TargetComment, TargetIssue};

/// Convert one exported issue and its comments into an import payload.
///
/// The first comment becomes the issue body. An issue without any comment
/// gets an empty description rather than failing the run.
pub fn convert_issue(source: &SourceIssue) -> ImportPayload {
    debug!("converting issue {}", source.id);

    let description = match source.description() {
        Some(comment) => comment.text(),
        None => {
            warn!("issue {} has no description comment", source.id);
            ""
        }
    };

    let issue = TargetIssue {
        title: source.title.clone(),
        body: format!(
            "Originally submitted by **{}** as **issue {}**:\n\n{}",
            source.author.name, source.id, description
        ),
        created_at: Some(source.published.clone()),
        closed: source.is_closed(),
        labels: map_labels(&source.labels, source.status.as_deref()),
    };

    let comments = source
        .follow_ups()
        .iter()
        .filter(|comment| !comment.text().is_empty())
        .map(|comment| TargetComment {
            created_at: comment.published.clone(),
            body: format!("Comment by **{}**:\n\n{}", comment.author.name, comment.text()),
        })
        .collect();

    ImportPayload {
        issue,
        comments: Some(comments),
    }
}

/// Closed stand-in for an id missing from the export, keeping GitHub numbering aligned
pub fn make_placeholder(issue_id: u64) -> ImportPayload {
    debug!("creating placeholder for issue id {}", issue_id);

    ImportPayload {
        issue: TargetIssue {
            title: format!("Placeholder for issue {}", issue_id),
            body: PLACEHOLDER_BODY.to_string(),
            created_at: None,
            closed: true,
            labels: vec![PLACEHOLDER_LABEL.to_string()],
        },
        comments: None,
    }
}
