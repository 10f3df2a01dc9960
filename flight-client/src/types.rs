use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of the flight-search POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub flight_number: String,
}

impl SearchRequest {
    pub fn new(flight_number: impl Into<String>) -> Self {
        Self {
            flight_number: flight_number.into(),
        }
    }
}

/// Envelope returned by the flight-search endpoint.
///
/// `data` stays as raw JSON until the response is known to be a hit, so a
/// malformed record on a miss never fails the lookup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub suggestions: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub timestamp: Option<String>,
}

/// One flight as reported by the API. Only the flight number is guaranteed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FlightRecord {
    #[serde(rename = "numeroVoo")]
    pub flight_number: String,
    #[serde(rename = "companhia", default, deserialize_with = "lenient_text")]
    pub airline: Option<String>,
    #[serde(rename = "origem", default, deserialize_with = "lenient_text")]
    pub origin: Option<String>,
    #[serde(rename = "destino", default, deserialize_with = "lenient_text")]
    pub destination: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: Option<String>,
    #[serde(rename = "dataPartida", default, deserialize_with = "lenient_text")]
    pub departure_date: Option<String>,

    #[serde(rename = "horarioPartida", default, deserialize_with = "lenient_text")]
    pub scheduled_departure: Option<String>,
    #[serde(rename = "horarioChegada", default, deserialize_with = "lenient_text")]
    pub scheduled_arrival: Option<String>,
    #[serde(
        rename = "horarioPartidaReal",
        default,
        deserialize_with = "lenient_text"
    )]
    pub actual_departure: Option<String>,
    #[serde(
        rename = "horarioChegadaReal",
        default,
        deserialize_with = "lenient_text"
    )]
    pub actual_arrival: Option<String>,
    #[serde(
        rename = "horarioPartidaEstimado",
        default,
        deserialize_with = "lenient_text"
    )]
    pub estimated_departure: Option<String>,
    #[serde(
        rename = "horarioChegadaEstimado",
        default,
        deserialize_with = "lenient_text"
    )]
    pub estimated_arrival: Option<String>,

    #[serde(rename = "portao", default, deserialize_with = "lenient_text")]
    pub departure_gate: Option<String>,
    #[serde(rename = "portaoChegada", default, deserialize_with = "lenient_text")]
    pub arrival_gate: Option<String>,
    #[serde(rename = "terminal", default, deserialize_with = "lenient_text")]
    pub departure_terminal: Option<String>,
    #[serde(
        rename = "terminalChegada",
        default,
        deserialize_with = "lenient_text"
    )]
    pub arrival_terminal: Option<String>,

    #[serde(rename = "posicao", default, deserialize_with = "lenient_position")]
    pub position: Option<Position>,
    #[serde(rename = "atrasado", default, deserialize_with = "lenient_minutes")]
    pub delay_minutes: Option<i64>,
    #[serde(rename = "duracao", default, deserialize_with = "lenient_text")]
    pub duration: Option<String>,

    #[serde(rename = "aeronave", default, deserialize_with = "lenient_text")]
    pub aircraft: Option<String>,
    #[serde(rename = "registro", default, deserialize_with = "lenient_text")]
    pub registration: Option<String>,
    #[serde(
        rename = "ultimaAtualizacao",
        default,
        deserialize_with = "lenient_text"
    )]
    pub last_updated: Option<String>,
}

impl FlightRecord {
    pub fn new(flight_number: impl Into<String>) -> Self {
        Self {
            flight_number: flight_number.into(),
            ..Default::default()
        }
    }

    pub fn has_gate_info(&self) -> bool {
        self.departure_gate.is_some()
            || self.departure_terminal.is_some()
            || self.arrival_gate.is_some()
            || self.arrival_terminal.is_some()
    }

    pub fn has_aircraft_info(&self) -> bool {
        self.aircraft.is_some() || self.registration.is_some()
    }

    /// Delay in minutes, only when the flight is actually late.
    pub fn delay(&self) -> Option<i64> {
        self.delay_minutes.filter(|minutes| *minutes > 0)
    }
}

/// Live position of an airborne flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub altitude: Option<f64>,
    #[serde(rename = "velocidade", default, deserialize_with = "lenient_number")]
    pub speed: Option<f64>,
    #[serde(rename = "direcao", default, deserialize_with = "lenient_number")]
    pub heading: Option<f64>,
    #[serde(
        rename = "velocidadeVertical",
        default,
        deserialize_with = "lenient_number"
    )]
    pub vertical_speed: Option<f64>,
}

/// A successful hit, with the response metadata needed for display.
#[derive(Debug, Clone, PartialEq)]
pub struct FoundFlight {
    pub record: FlightRecord,
    pub source: Option<String>,
    pub timestamp: Option<String>,
}

/// What the server said when it had no record for the flight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotFoundReply {
    pub message: Option<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(FoundFlight),
    NotFound(NotFoundReply),
}

impl LookupOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found(_))
    }
}

impl From<SearchResponse> for NotFoundReply {
    fn from(response: SearchResponse) -> Self {
        Self {
            message: response.message.or(response.error),
            suggestions: response.suggestions,
        }
    }
}

// Upstream providers are passed through unchanged, so the same field may
// arrive as a string, a number or null.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_minutes<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// A position without numeric coordinates is dropped rather than failing
/// the whole record.
fn lenient_position<'de, D>(deserializer: D) -> Result<Option<Position>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}
