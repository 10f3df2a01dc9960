pub mod client;
pub mod config;
pub mod provider;
pub mod types;

pub use client::{classify_response, HttpFlightClient};
pub use config::{LookupConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use provider::{FlightLookup, LookupError, LookupResult};
pub use types::{
    FlightRecord, FoundFlight, LookupOutcome, NotFoundReply, Position, SearchRequest,
    SearchResponse,
};

pub mod prelude {
    pub use crate::client::*;
    pub use crate::config::*;
    pub use crate::provider::*;
    pub use crate::types::*;
}
