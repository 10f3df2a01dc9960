//! Console presentation of flight lookups
//!
//! Every function writes into a caller-supplied sink so the binary can print
//! to stdout while tests capture the exact text. Optional record fields are
//! only rendered when present; nothing is filled in with placeholders.

use chrono::{DateTime, Local, TimeZone};
use flight_client::{FlightRecord, FoundFlight, NotFoundReply, Position};
use std::fmt::Display;
use std::io::{self, Write};

const RULE_WIDTH: usize = 45;
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";
const DEFAULT_SOURCE: &str = "API";

fn rule() -> String {
    "━".repeat(RULE_WIDTH)
}

pub fn write_search_banner<W: Write>(
    out: &mut W,
    flight_code: &str,
    timeout_secs: u64,
) -> io::Result<()> {
    writeln!(out, "{}", rule())?;
    writeln!(out, "✈️  FLIGHT LOOKUP")?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "\n🔍 Searching for flight: {}...", flight_code)?;
    writeln!(out, "⏳ This can take up to {} seconds...\n", timeout_secs)
}

/// Renders a hit, converting the response timestamp to local time.
pub fn write_found<W: Write>(out: &mut W, found: &FoundFlight) -> io::Result<()> {
    write_found_in(out, found, &Local)
}

pub fn write_found_in<W, Tz>(out: &mut W, found: &FoundFlight, tz: &Tz) -> io::Result<()>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let record = &found.record;

    writeln!(out, "{}", rule())?;
    writeln!(out, "✅ FLIGHT FOUND!")?;
    writeln!(out, "{}", rule())?;

    write_basic_info(out, record)?;
    write_schedule(out, record)?;
    write_gates(out, record)?;

    if let Some(position) = &record.position {
        write_position(out, position)?;
    }

    if let Some(minutes) = record.delay() {
        writeln!(out, "\n⚠️  Delay:")?;
        writeln!(out, "   Delayed by: {} minutes", minutes)?;
    }

    if record.has_aircraft_info() {
        writeln!(out, "\n✈️  Aircraft:")?;
        optional_line(out, "Type", &record.aircraft)?;
        optional_line(out, "Registration", &record.registration)?;
    }

    writeln!(
        out,
        "\n📡 Source: {}",
        found.source.as_deref().unwrap_or(DEFAULT_SOURCE)
    )?;
    if let Some(raw) = &found.timestamp {
        writeln!(out, "🕐 Updated: {}", format_timestamp(raw, tz))?;
    }
    if let Some(raw) = &record.last_updated {
        writeln!(out, "   Record last changed: {}", format_timestamp(raw, tz))?;
    }

    writeln!(out, "\n{}", rule())
}

fn write_basic_info<W: Write>(out: &mut W, record: &FlightRecord) -> io::Result<()> {
    writeln!(out, "\n📦 Basic information:")?;
    writeln!(out, "   Flight: {}", record.flight_number)?;
    optional_line(out, "Airline", &record.airline)?;

    match (&record.origin, &record.destination) {
        (Some(origin), Some(destination)) => {
            writeln!(out, "   Route: {} → {}", origin, destination)?;
        }
        (origin, destination) => {
            optional_line(out, "Origin", origin)?;
            optional_line(out, "Destination", destination)?;
        }
    }

    optional_line(out, "Status", &record.status)?;
    optional_line(out, "Date", &record.departure_date)?;
    optional_line(out, "Duration", &record.duration)
}

fn write_schedule<W: Write>(out: &mut W, record: &FlightRecord) -> io::Result<()> {
    let times = [
        ("Scheduled departure", &record.scheduled_departure),
        ("Scheduled arrival", &record.scheduled_arrival),
        ("Actual departure", &record.actual_departure),
        ("Actual arrival", &record.actual_arrival),
        ("Estimated departure", &record.estimated_departure),
        ("Estimated arrival", &record.estimated_arrival),
    ];

    if times.iter().all(|(_, value)| value.is_none()) {
        return Ok(());
    }

    writeln!(out, "\n⏰ Schedule:")?;
    for (label, value) in times {
        optional_line(out, label, value)?;
    }
    Ok(())
}

fn write_gates<W: Write>(out: &mut W, record: &FlightRecord) -> io::Result<()> {
    if !record.has_gate_info() {
        return Ok(());
    }

    writeln!(out, "\n🚪 Terminal and gate:")?;
    optional_line(out, "Departure terminal", &record.departure_terminal)?;
    optional_line(out, "Departure gate", &record.departure_gate)?;
    optional_line(out, "Arrival terminal", &record.arrival_terminal)?;
    optional_line(out, "Arrival gate", &record.arrival_gate)
}

fn write_position<W: Write>(out: &mut W, position: &Position) -> io::Result<()> {
    writeln!(out, "\n📍 Live position:")?;
    writeln!(out, "   Latitude: {:.4}°", position.latitude)?;
    writeln!(out, "   Longitude: {:.4}°", position.longitude)?;
    if let Some(altitude) = position.altitude {
        writeln!(out, "   Altitude: {} ft", group_thousands(altitude))?;
    }
    if let Some(speed) = position.speed {
        writeln!(out, "   Speed: {} km/h", speed)?;
    }
    if let Some(heading) = position.heading {
        writeln!(out, "   Heading: {}°", heading)?;
    }
    if let Some(vertical_speed) = position.vertical_speed {
        writeln!(out, "   Vertical speed: {} ft/min", vertical_speed)?;
    }
    Ok(())
}

pub fn write_not_found<W: Write>(out: &mut W, reply: &NotFoundReply) -> io::Result<()> {
    writeln!(out, "{}", rule())?;
    writeln!(out, "❌ FLIGHT NOT FOUND")?;
    writeln!(out, "{}", rule())?;

    writeln!(
        out,
        "\n📝 Message: {}\n",
        reply.message.as_deref().unwrap_or("N/A")
    )?;

    if !reply.suggestions.is_empty() {
        writeln!(out, "💡 Suggestions:")?;
        for (i, suggestion) in reply.suggestions.iter().enumerate() {
            writeln!(out, "   {}. {}", i + 1, suggestion)?;
        }
    }

    writeln!(out, "\n{}", rule())
}

pub fn write_timeout<W: Write>(out: &mut W, seconds: u64) -> io::Result<()> {
    writeln!(
        out,
        "\n❌ Timeout: the search took longer than {} seconds",
        seconds
    )?;
    writeln!(out, "\n💡 Try again in a few minutes")?;
    writeln!(out, "{}", rule())
}

pub fn write_connection_error<W: Write>(out: &mut W, err: &dyn Display) -> io::Result<()> {
    writeln!(out, "\n❌ Error while searching for the flight: {}", err)?;
    writeln!(out, "\n💡 Hints:")?;
    writeln!(out, "   1. Check your internet connection")?;
    writeln!(out, "   2. Make sure the flight number is correct")?;
    writeln!(out, "   3. Try again in a few minutes")?;
    writeln!(out, "\n{}", rule())
}

pub fn write_unexpected_error<W: Write>(out: &mut W, err: &dyn Display) -> io::Result<()> {
    writeln!(out, "\n❌ Unexpected error: {}", err)?;
    writeln!(out, "{}", rule())
}

fn optional_line<W: Write>(out: &mut W, label: &str, value: &Option<String>) -> io::Result<()> {
    match value {
        Some(value) => writeln!(out, "   {}: {}", label, value),
        None => Ok(()),
    }
}

/// Formats an RFC 3339 timestamp as `dd/mm/YYYY HH:MM:SS` in `tz`.
/// Unparsable input is returned as-is.
pub fn format_timestamp<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(parsed) => parsed
            .with_timezone(tz)
            .format(TIMESTAMP_FORMAT)
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

/// `35000.0` -> `35,000`
pub fn group_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
