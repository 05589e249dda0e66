use thiserror::Error;

/// Row-level failures raised while turning raw records into canonical
/// addresses. In batch mode every variant aborts the run at the
/// orchestrator boundary; only the interactive single-record path recovers
/// from `AmbiguousParse`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("missing required field {field}")]
    MissingField { field: &'static str },
    #[error("field {field} is not numeric: {value:?}")]
    NonNumericField { field: &'static str, value: String },
    #[error("ambiguous parse: label {label} appears at conflicting positions in {text:?}")]
    AmbiguousParse { label: String, text: String },
}

pub type Result<T> = std::result::Result<T, AddressError>;
