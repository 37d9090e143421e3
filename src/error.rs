use thiserror::Error;

/// Everything that can go wrong between a form submission and the answer.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// The process is missing something it needs before it can start.
    #[error("configuration: {0}")]
    Configuration(String),

    /// A closed form field arrived with a value outside the published
    /// choices. Raised before any network traffic.
    #[error("unknown {field}: {value:?}")]
    Validation {
        field: &'static str,
        value: String,
    },

    /// The single generation call failed. The user may simply retry;
    /// nothing retries automatically.
    #[error("generation service: {0}")]
    RemoteService(String),
}

impl From<reqwest::Error> for AssistantError {
    fn from(err: reqwest::Error) -> Self {
        AssistantError::RemoteService(format!("request failed: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, AssistantError>;
