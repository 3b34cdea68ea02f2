use crate::error::{ErrorContext, MigrationError};
use crate::migration_error;

#[test]
fn test_error_context_on_result() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "file not found"
    ));

    match result.context("Failed to create log file") {
        Err(MigrationError::Unknown(msg)) => {
            assert!(msg.contains("Failed to create log file"));
            assert!(msg.contains("file not found"));
        }
        _ => panic!("Expected MigrationError::Unknown"),
    }
}

#[test]
fn test_migration_error_macro() {
    let error = migration_error!(Input, "project not found: {}", "demo");
    match error {
        MigrationError::Input(ref msg) => assert_eq!(msg, "project not found: demo"),
        _ => panic!("Expected MigrationError::Input"),
    }
    assert_eq!(error.to_string(), "project not found: demo");
}

#[test]
fn test_exit_codes_by_kind() {
    let submission = MigrationError::Submission {
        issue_id: 5,
        status: 422,
        body: "Validation Failed".to_string(),
    };
    assert_eq!(submission.exit_code(), 3);
    assert!(submission.is_expected());
    assert!(submission.to_string().contains("issue 5"));

    assert_eq!(migration_error!(Input, "bad").exit_code(), 2);
    assert_eq!(migration_error!(Config, "bad").exit_code(), 2);

    let unexpected = MigrationError::from(serde_json::from_str::<u64>("{").unwrap_err());
    assert_eq!(unexpected.exit_code(), 1);
    assert!(!unexpected.is_expected());
}
