use std::sync::Mutex;

use serde_json::{json, Value};

use crate::client::IssueSubmitter;
use crate::error::{MigrationError, MigrationResult};
use crate::models::{ImportPayload, SourceIssue};

mod error_tests;
mod mapping_tests;

/// Issue record shaped like the Takeout export, with `overrides` merged on top
pub fn issue_json(id: u64, overrides: Value) -> Value {
    let mut base = json!({
        "id": id,
        "title": format!("Issue {}", id),
        "published": "2009-04-10T09:43:48.000Z",
        "state": "open",
        "status": "New",
        "labels": [],
        "author": { "name": "alice" },
        "comments": {
            "items": [
                {
                    "published": "2009-04-10T09:43:48.000Z",
                    "author": { "name": "alice" },
                    "content": "description"
                }
            ]
        }
    });

    if let (Some(base_map), Value::Object(extra)) = (base.as_object_mut(), overrides) {
        for (key, value) in extra {
            base_map.insert(key, value);
        }
    }
    base
}

pub fn issue(id: u64, overrides: Value) -> SourceIssue {
    serde_json::from_value(issue_json(id, overrides)).unwrap()
}

pub fn comment(author: &str, content: &str) -> Value {
    json!({
        "published": "2009-04-11T10:00:00.000Z",
        "author": { "name": author },
        "content": content
    })
}

/// Records every submission; optionally fails on one id with a 422
#[derive(Default)]
pub struct RecordingSubmitter {
    pub calls: Mutex<Vec<(u64, ImportPayload)>>,
    pub fail_on: Option<u64>,
}

impl RecordingSubmitter {
    pub fn failing_on(issue_id: u64) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_on: Some(issue_id),
        }
    }

    pub fn ids(&self) -> Vec<u64> {
        self.calls.lock().unwrap().iter().map(|(id, _)| *id).collect()
    }
}

impl IssueSubmitter for RecordingSubmitter {
    async fn submit(&self, issue_id: u64, payload: &ImportPayload) -> MigrationResult<()> {
        self.calls.lock().unwrap().push((issue_id, payload.clone()));
        if self.fail_on == Some(issue_id) {
            return Err(MigrationError::Submission {
                issue_id,
                status: 422,
                body: r#"{"message":"Validation Failed"}"#.to_string(),
            });
        }
        Ok(())
    }
}
