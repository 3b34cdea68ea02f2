use thiserror::Error;

#[derive(Error, Debug)]
pub enum MigrationError {
    #[error("{0}")]
    Input(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("importing issue {issue_id} failed with HTTP {status}")]
    Submission {
        issue_id: u64,
        status: u16,
        body: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type MigrationResult<T> = Result<T, MigrationError>;

impl MigrationError {
    /// Errors the operator can fix from the command line or the export file.
    /// Anything else is reported with full diagnostics.
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            MigrationError::Input(_) | MigrationError::Config(_) | MigrationError::Submission { .. }
        )
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MigrationError::Input(_) | MigrationError::Config(_) => 2,
            MigrationError::Submission { .. } => 3,
            _ => 1,
        }
    }
}

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> MigrationResult<T>;
    fn with_context<F>(self, f: F) -> MigrationResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> MigrationResult<T> {
        self.map_err(|e| MigrationError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> MigrationResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| MigrationError::Unknown(format!("{}: {}", f(), e)))
    }
}

#[macro_export]
macro_rules! migration_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::MigrationError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::MigrationError::$error_type(format!($fmt, $($arg)*))
    };
}
