use crate::report;
use flight_client::{FlightLookup, LookupError, LookupOutcome};
use std::io::{self, Write};
use tracing::{error, info, warn};

/// Flight searched when no code is given on the command line.
pub const DEFAULT_FLIGHT_CODE: &str = "G31890";

/// Which console path a lookup ended on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStatus {
    Found,
    NotFound,
    TimedOut,
    Unreachable,
    Failed,
}

/// Trims and uppercases the user's flight code, falling back to
/// [`DEFAULT_FLIGHT_CODE`] when none (or only whitespace) was given.
pub fn normalize_flight_code(arg: Option<&str>) -> String {
    arg.map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_uppercase)
        .unwrap_or_else(|| DEFAULT_FLIGHT_CODE.to_string())
}

/// Runs one search and prints the matching report to `out`.
///
/// Lookup failures are reported, not returned: the only error surfaced to the
/// caller is a failure to write to `out`.
pub async fn run_lookup<L, W>(
    lookup: &L,
    flight_code: &str,
    out: &mut W,
) -> io::Result<LookupStatus>
where
    L: FlightLookup + ?Sized,
    W: Write,
{
    report::write_search_banner(out, flight_code, lookup.timeout().as_secs())?;
    info!("Looking up {} via {}", flight_code, lookup.endpoint());

    let status = match lookup.search(flight_code).await {
        Ok(LookupOutcome::Found(found)) => {
            report::write_found(out, &found)?;
            LookupStatus::Found
        }
        Ok(LookupOutcome::NotFound(reply)) => {
            report::write_not_found(out, &reply)?;
            LookupStatus::NotFound
        }
        Err(LookupError::Timeout { seconds }) => {
            warn!("Lookup for {} timed out after {}s", flight_code, seconds);
            report::write_timeout(out, seconds)?;
            LookupStatus::TimedOut
        }
        Err(e) if e.is_transport() => {
            error!("Lookup for {} failed: {}", flight_code, e);
            report::write_connection_error(out, &e)?;
            LookupStatus::Unreachable
        }
        Err(e) => {
            error!("Unexpected lookup failure for {}: {}", flight_code, e);
            report::write_unexpected_error(out, &e)?;
            LookupStatus::Failed
        }
    };

    out.flush()?;
    Ok(status)
}
