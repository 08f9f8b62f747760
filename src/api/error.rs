use reqwest::StatusCode;
use thiserror::Error;

/// Failures reported by the market data provider, classified so the HTTP layer
/// can tell "unknown symbol" apart from transport trouble.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("No data found for {0}")]
    NotFound(String),
    #[error("Invalid input {0}")]
    InvalidInput(String),
    #[error("Request for {subject} failed: {status}")]
    Http { subject: String, status: StatusCode },
    #[error("Unexpected API response for {subject}: {detail}")]
    UnexpectedResponse { subject: String, detail: String },
}

impl ProviderError {
    pub fn from_status(subject: &str, status: StatusCode) -> Self {
        match status {
            StatusCode::NOT_FOUND => Self::NotFound(subject.to_string()),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                Self::InvalidInput(subject.to_string())
            }
            _ => Self::Http {
                subject: subject.to_string(),
                status,
            },
        }
    }

    /// Maps the `chart.error.code` values Yahoo embeds in otherwise valid bodies.
    pub fn from_chart_code(subject: &str, code: &str, description: Option<&str>) -> Self {
        match code {
            "Not Found" => Self::NotFound(subject.to_string()),
            "Bad Request" => Self::InvalidInput(subject.to_string()),
            _ => Self::UnexpectedResponse {
                subject: subject.to_string(),
                detail: format!("{} - {}", code, description.unwrap_or("no description")),
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
