pub mod github_client;
pub mod submitter;

pub use github_client::{import_url, GitHubImportClient};
pub use submitter::{DryRunSubmitter, IssueSubmitter};
