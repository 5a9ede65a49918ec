use thiserror::Error;

/// Errors that can occur while fetching a question.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {source}")]
    ClientBuild {
        #[source]
        source: reqwest::Error,
    },

    /// Configured endpoint is not a valid URL.
    #[error("Invalid endpoint '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Request failed before a body was received (connect, timeout, read).
    #[error("Request to '{url}' failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Body was not the expected JSON envelope.
    #[error("Malformed response: {source}")]
    Malformed {
        #[source]
        source: serde_json::Error,
    },

    /// API answered with a non-zero response code.
    #[error("API rejected request with code {code} ({reason})")]
    ApiRejected { code: u8, reason: &'static str },

    /// API reported success but sent no questions.
    #[error("API returned no questions")]
    EmptyResults,

    /// Background fetch worker is gone.
    #[error("Fetch worker unavailable")]
    WorkerUnavailable,

    /// First question cannot be played.
    #[error("Invalid question: {reason}")]
    InvalidQuestion { reason: String },
}

impl FetchError {
    /// User-facing message. Details stay in the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::ClientBuild { .. }
            | FetchError::InvalidUrl { .. }
            | FetchError::Network { .. }
            | FetchError::WorkerUnavailable => {
                "Could not reach the trivia service"
            }
            FetchError::Malformed { .. }
            | FetchError::EmptyResults
            | FetchError::InvalidQuestion { .. } => "The trivia service sent an unexpected response",
            FetchError::ApiRejected { .. } => "The trivia service refused the request",
        }
    }

    /// Short machine-readable kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::ClientBuild { .. } => "client_build",
            FetchError::InvalidUrl { .. } => "invalid_url",
            FetchError::Network { .. } => "network",
            FetchError::Malformed { .. } => "malformed",
            FetchError::ApiRejected { .. } => "api_rejected",
            FetchError::EmptyResults => "empty_results",
            FetchError::WorkerUnavailable => "worker_unavailable",
            FetchError::InvalidQuestion { .. } => "invalid_question",
        }
    }
}
