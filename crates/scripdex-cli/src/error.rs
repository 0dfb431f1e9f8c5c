use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] scripdex_core::ValidationError),

    #[error(transparent)]
    Search(#[from] scripdex_core::SearchError),

    #[error("catalog error: {0}")]
    Catalog(#[from] scripdex_core::CoreError),

    #[error("strict mode failed: warnings={warning_count}, errors={error_count}")]
    StrictModeViolation {
        warning_count: usize,
        error_count: usize,
    },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Search(_) => 3,
            Self::StrictModeViolation { .. } => 5,
            Self::Catalog(_) | Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}
