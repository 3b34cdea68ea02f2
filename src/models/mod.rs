pub mod export;
pub mod github;

// Re-export commonly used types
pub use export::{Author, ExportDocument, IssueCollection, ProjectEntry, SourceComment, SourceIssue};
pub use github::{ImportPayload, ImportResponse, TargetComment, TargetIssue};
