use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzerError {
    /// The requested analysis type is not one of the five known modes.
    #[error("Unsupported analysis type: {0}")]
    UnsupportedMode(String),
}
