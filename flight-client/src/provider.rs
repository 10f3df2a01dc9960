use crate::types::LookupOutcome;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Request timed out after {seconds} seconds")]
    Timeout { seconds: u64 },

    #[error("Cannot connect to flight-search service: {0}")]
    Connect(#[source] reqwest::Error),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl LookupError {
    /// Connection-level failures share one console message.
    pub fn is_transport(&self) -> bool {
        matches!(self, LookupError::Connect(_) | LookupError::Transport(_))
    }
}

pub type LookupResult<T> = Result<T, LookupError>;

/// Anything able to answer a flight-number search.
#[async_trait]
pub trait FlightLookup: Send + Sync {
    async fn search(&self, flight_number: &str) -> LookupResult<LookupOutcome>;

    /// Where searches are sent, for diagnostics.
    fn endpoint(&self) -> &str;

    /// Upper bound on how long one search may take.
    fn timeout(&self) -> Duration;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FlightRecord, FoundFlight, NotFoundReply};

    struct MockLookup;

    #[async_trait]
    impl FlightLookup for MockLookup {
        async fn search(&self, flight_number: &str) -> LookupResult<LookupOutcome> {
            if flight_number == "G31890" {
                Ok(LookupOutcome::Found(FoundFlight {
                    record: FlightRecord::new(flight_number),
                    source: Some("mock".to_string()),
                    timestamp: None,
                }))
            } else {
                Ok(LookupOutcome::NotFound(NotFoundReply::default()))
            }
        }

        fn endpoint(&self) -> &str {
            "mock://flights"
        }

        fn timeout(&self) -> Duration {
            Duration::from_secs(5)
        }
    }

    #[tokio::test]
    async fn test_mock_lookup() {
        let lookup = MockLookup;

        let found = lookup.search("G31890").await.unwrap();
        assert!(found.is_found());

        let missing = lookup.search("XX0000").await.unwrap();
        assert!(!missing.is_found());

        assert_eq!(lookup.endpoint(), "mock://flights");
        assert_eq!(lookup.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_error_display() {
        let err = LookupError::Timeout { seconds: 30 };
        assert_eq!(err.to_string(), "Request timed out after 30 seconds");
        assert!(!err.is_transport());

        let err = LookupError::InvalidConfig {
            message: "Endpoint cannot be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration: Endpoint cannot be empty"
        );

        let decode = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = LookupError::from(decode);
        assert!(err.to_string().starts_with("Invalid response body"));
    }
}
