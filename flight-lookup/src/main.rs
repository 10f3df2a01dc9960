use clap::Parser;
use flight_client::prelude::*;
use flight_lookup::{normalize_flight_code, run_lookup};
use std::io;
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(name = "flight-lookup")]
#[command(about = "Look up a flight by number and print its current status")]
struct Cli {
    /// Flight code, e.g. G32067 or LA3789 (defaults to G31890)
    flight_code: Option<String>,
    /// Flight-search endpoint to query
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,
    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let flight_code = normalize_flight_code(cli.flight_code.as_deref());

    let config = LookupConfig::new()
        .with_endpoint(cli.endpoint)
        .with_timeout(Duration::from_secs(cli.timeout));
    let client = HttpFlightClient::new(config)?;

    let mut stdout = io::stdout().lock();
    let status = run_lookup(&client, &flight_code, &mut stdout).await?;
    info!("Lookup for {} finished: {:?}", flight_code, status);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["flight-lookup"]);
        assert_eq!(cli.flight_code, None);
        assert_eq!(cli.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cli.timeout, 30);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "flight-lookup",
            "la3789",
            "--endpoint",
            "http://localhost:3000/search",
            "--timeout",
            "5",
        ]);
        assert_eq!(cli.flight_code.as_deref(), Some("la3789"));
        assert_eq!(cli.endpoint, "http://localhost:3000/search");
        assert_eq!(cli.timeout, 5);
    }
}
