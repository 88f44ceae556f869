//! ISS pass command handlers.

use std::time::Duration;

use tabled::Tabled;

use flyover_api::{Coordinates, FlyoverClient, PassTime};

use crate::cli::{GlobalOpts, OutputFormat, PassesArgs};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct PassRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Rise time (UTC)")]
    rise: String,
    #[tabled(rename = "Timestamp")]
    risetime: i64,
    #[tabled(rename = "Duration")]
    duration: String,
}

fn rise_label(pass: &PassTime, fmt: &str) -> String {
    pass.rise_time()
        .map_or_else(|| pass.risetime.to_string(), |t| t.format(fmt).to_string())
}

fn to_row(index: usize, pass: &PassTime) -> PassRow {
    PassRow {
        index: index + 1,
        rise: rise_label(pass, "%Y-%m-%d %H:%M:%S"),
        risetime: pass.risetime,
        duration: humantime::format_duration(Duration::from_secs(pass.duration)).to_string(),
    }
}

/// `Next pass at Tue, 28 Mar 2023 10:40:00 +0000 for 600 seconds!`
pub fn describe_pass(pass: &PassTime) -> String {
    format!(
        "Next pass at {} for {} seconds!",
        rise_label(pass, "%a, %d %b %Y %H:%M:%S %z"),
        pass.duration
    )
}

fn print_passes(passes: &[PassTime], global: &GlobalOpts, format: OutputFormat) {
    output::print_success(
        &format!("Returned {} flyover times", passes.len()),
        global.color,
        global.quiet,
    );
    let out = output::render_list(format, passes, to_row, describe_pass);
    output::print_output(&out);
}

// ── Handlers ────────────────────────────────────────────────────────

/// `flyover next`: IP, then coordinates, then pass times.
pub async fn handle_next(
    client: &FlyoverClient,
    global: &GlobalOpts,
    format: OutputFormat,
) -> Result<(), CliError> {
    let passes = client.next_passes_for_my_location().await?;
    print_passes(&passes, global, format);
    Ok(())
}

/// `flyover passes --lat .. --lon ..`: pass times for explicit coordinates.
pub async fn handle_passes(
    client: &FlyoverClient,
    args: PassesArgs,
    global: &GlobalOpts,
    format: OutputFormat,
) -> Result<(), CliError> {
    let coords = Coordinates::new(args.lat, args.lon);
    let passes = client.fetch_flyover_times(&coords).await?;
    print_passes(&passes, global, format);
    Ok(())
}
