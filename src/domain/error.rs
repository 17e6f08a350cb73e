//! Domain error types.

/// Recoverable conditions raised by session transitions.
///
/// These never cross the rendering boundary as `Err`; the session stores the
/// most recent one and surfaces it as a message in the dashboard view.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SelectionError {
    #[error("You reached the maximum number of selected companies ({capacity}).")]
    CapacityExceeded { capacity: usize },

    #[error("{ticker} is not available for selection")]
    NotAvailable { ticker: String },

    #[error("{ticker} is not among the selected companies")]
    NotSelected { ticker: String },

    #[error("cannot submit {selected} companies with a limit of {capacity}")]
    SubmissionBlocked { selected: usize, capacity: usize },

    #[error("invalid trading settings: {reason}")]
    InvalidSettings { reason: String },
}

/// Top-level error type for tradeboard.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("reference data error: {reason}")]
    ReferenceData { reason: String },

    #[error("duplicate ticker in reference data: {0}")]
    DuplicateTicker(String),

    #[error("script error on line {line}: {reason}")]
    ScriptParse { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&DashboardError> for std::process::ExitCode {
    fn from(err: &DashboardError) -> Self {
        let code: u8 = match err {
            DashboardError::Io(_) => 1,
            DashboardError::ConfigParse { .. }
            | DashboardError::ConfigMissing { .. }
            | DashboardError::ConfigInvalid { .. } => 2,
            DashboardError::ReferenceData { .. } | DashboardError::DuplicateTicker(_) => 3,
            DashboardError::ScriptParse { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
