use crate::config::LookupConfig;
use crate::provider::{FlightLookup, LookupError, LookupResult};
use crate::types::{FlightRecord, FoundFlight, LookupOutcome, SearchRequest, SearchResponse};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub struct HttpFlightClient {
    client: reqwest::Client,
    config: LookupConfig,
}

impl HttpFlightClient {
    pub fn new(config: LookupConfig) -> LookupResult<Self> {
        config
            .validate()
            .map_err(|message| LookupError::InvalidConfig { message })?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LookupError::InvalidConfig {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client, config })
    }

    pub fn with_default_config() -> LookupResult<Self> {
        Self::new(LookupConfig::default())
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    fn handle_http_error(&self, err: reqwest::Error) -> LookupError {
        if err.is_timeout() {
            LookupError::Timeout {
                seconds: self.config.timeout.as_secs(),
            }
        } else if err.is_connect() {
            LookupError::Connect(err)
        } else {
            LookupError::Transport(err)
        }
    }
}

/// Turns a raw HTTP reply into a lookup outcome.
///
/// Only a 200 carrying `success: true` and a `data` object counts as a hit.
/// On every other path `data` is left untouched, and a body that is not JSON
/// is tolerated unless the status was 200.
pub fn classify_response(status: StatusCode, body: &str) -> LookupResult<LookupOutcome> {
    if status != StatusCode::OK {
        let response = serde_json::from_str::<SearchResponse>(body).unwrap_or_default();
        return Ok(LookupOutcome::NotFound(response.into()));
    }

    let mut response: SearchResponse = serde_json::from_str(body)?;
    if !response.success {
        return Ok(LookupOutcome::NotFound(response.into()));
    }

    match response.data.take().filter(|data| !data.is_null()) {
        Some(data) => {
            let record: FlightRecord = serde_json::from_value(data)?;
            Ok(LookupOutcome::Found(FoundFlight {
                record,
                source: response.source,
                timestamp: response.timestamp,
            }))
        }
        None => Ok(LookupOutcome::NotFound(response.into())),
    }
}

#[async_trait]
impl FlightLookup for HttpFlightClient {
    async fn search(&self, flight_number: &str) -> LookupResult<LookupOutcome> {
        debug!("Searching flight {} at {}", flight_number, self.config.endpoint);
        let started = Instant::now();

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&SearchRequest::new(flight_number))
            .send()
            .await
            .map_err(|e| self.handle_http_error(e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.handle_http_error(e))?;

        debug!(
            "Flight search answered {} in {:?} ({} bytes)",
            status,
            started.elapsed(),
            body.len()
        );

        let outcome = classify_response(status, &body)?;
        if outcome.is_found() {
            info!("Flight {} found", flight_number);
        } else {
            warn!("Flight {} not found (HTTP {})", flight_number, status);
        }

        Ok(outcome)
    }

    fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    fn timeout(&self) -> Duration {
        self.config.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    #[test]
    fn test_client_rejects_invalid_config() {
        let config = LookupConfig::new().with_endpoint("flights.example.com");
        let result = HttpFlightClient::new(config);
        assert!(matches!(result, Err(LookupError::InvalidConfig { .. })));

        let config = LookupConfig::new().with_timeout(Duration::ZERO);
        assert!(HttpFlightClient::new(config).is_err());
    }

    #[test]
    fn test_client_keeps_endpoint() {
        let client = HttpFlightClient::with_default_config().unwrap();
        assert_eq!(client.endpoint(), crate::config::DEFAULT_ENDPOINT);
        assert_eq!(client.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_classify_found() {
        let body = json!({
            "success": true,
            "data": { "numeroVoo": "G31890", "companhia": "GOL" },
            "source": "AirLabs",
            "timestamp": "2026-10-19T13:45:00.000Z"
        })
        .to_string();

        match classify_response(StatusCode::OK, &body).unwrap() {
            LookupOutcome::Found(found) => {
                assert_eq!(found.record.flight_number, "G31890");
                assert_eq!(found.record.airline.as_deref(), Some("GOL"));
                assert_eq!(found.source.as_deref(), Some("AirLabs"));
                assert_eq!(found.timestamp.as_deref(), Some("2026-10-19T13:45:00.000Z"));
            }
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_success_false_ignores_data() {
        // A bogus record must not be decoded when the server reports a miss.
        let body = json!({
            "success": false,
            "data": { "companhia": 12 },
            "message": "Nada encontrado"
        })
        .to_string();

        let outcome = classify_response(StatusCode::OK, &body).unwrap();
        assert_eq!(
            outcome,
            LookupOutcome::NotFound(crate::types::NotFoundReply {
                message: Some("Nada encontrado".to_string()),
                suggestions: vec![],
            })
        );
    }

    #[test]
    fn test_classify_non_200_is_not_found() {
        let body = json!({
            "success": true,
            "data": { "numeroVoo": "G31890" },
            "message": "Erro interno"
        })
        .to_string();

        let outcome = classify_response(StatusCode::INTERNAL_SERVER_ERROR, &body).unwrap();
        assert!(!outcome.is_found());
    }

    #[test]
    fn test_classify_non_200_with_html_body() {
        let outcome =
            classify_response(StatusCode::BAD_GATEWAY, "<html>Bad Gateway</html>").unwrap();
        assert_eq!(
            outcome,
            LookupOutcome::NotFound(crate::types::NotFoundReply::default())
        );
    }

    #[test]
    fn test_classify_success_without_data() {
        let body = json!({ "success": true, "data": null }).to_string();
        let outcome = classify_response(StatusCode::OK, &body).unwrap();
        assert!(!outcome.is_found());
    }

    #[test]
    fn test_classify_invalid_json_on_200() {
        let result = classify_response(StatusCode::OK, "definitely not json");
        assert!(matches!(result, Err(LookupError::Decode(_))));
    }

    #[test]
    fn test_classify_malformed_record_on_hit() {
        let body = json!({ "success": true, "data": { "companhia": "GOL" } }).to_string();
        let result = classify_response(StatusCode::OK, &body);
        assert!(matches!(result, Err(LookupError::Decode(_))));
    }

    #[test]
    fn test_classify_hit_with_loosely_typed_fields() {
        let body = json!({
            "success": true,
            "data": {
                "numeroVoo": "G31890",
                "terminal": 2,
                "portao": 12,
                "posicao": { "lat": -23.43, "lng": -46.47 }
            }
        })
        .to_string();

        match classify_response(StatusCode::OK, &body).unwrap() {
            LookupOutcome::Found(found) => {
                assert_eq!(found.record.departure_terminal.as_deref(), Some("2"));
                assert_eq!(found.record.departure_gate.as_deref(), Some("12"));
                assert_eq!(found.record.position, None);
            }
            other => panic!("expected Found, got {:?}", other),
        }
    }
}
