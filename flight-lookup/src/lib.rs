pub mod lookup;
pub mod report;

pub use lookup::{normalize_flight_code, run_lookup, LookupStatus, DEFAULT_FLIGHT_CODE};
