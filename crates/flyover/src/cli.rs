//! Clap derive structures for the `flyover` CLI.
//!
//! Defines the command tree, global flags, and shared value enums. Kept free
//! of crate-internal imports so `build.rs` can include it for man pages.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// flyover -- when will the ISS pass over you next?
#[derive(Debug, Parser)]
#[command(
    name = "flyover",
    version,
    about = "Find upcoming ISS passes over your current location",
    long_about = "Looks up your public IP, geolocates it, and asks an ISS pass-prediction\n\
        service when the station will next be overhead.\n\n\
        Each lookup is a single HTTP request; the chain stops at the first failure.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config file to load instead of the platform default
    #[arg(long, env = "FLYOVER_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// IP-echo service URL
    #[arg(long, env = "FLYOVER_IP_ECHO_URL", global = true)]
    pub ip_echo_url: Option<String>,

    /// Geolocation service URL (the IP is appended as a path segment)
    #[arg(long, env = "FLYOVER_GEOLOCATION_URL", global = true)]
    pub geolocation_url: Option<String>,

    /// ISS pass-prediction service URL
    #[arg(long, env = "FLYOVER_ISS_PASS_URL", global = true)]
    pub iss_pass_url: Option<String>,

    /// Per-request timeout in seconds (0 waits forever)
    #[arg(long, env = "FLYOVER_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(long, short = 'o', env = "FLYOVER_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress the status line on stderr
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one line per item
    Plain,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Upcoming ISS passes over your current location
    #[command(alias = "passes-here")]
    Next,

    /// Show your public IP address
    Ip,

    /// Geolocate an IP address (yours if omitted)
    #[command(alias = "geo")]
    Coords(CoordsArgs),

    /// Upcoming ISS passes over explicit coordinates
    Passes(PassesArgs),

    /// Inspect configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct CoordsArgs {
    /// IP address to geolocate
    pub ip: Option<String>,
}

#[derive(Debug, Args)]
pub struct PassesArgs {
    /// Latitude, passed to the service verbatim
    #[arg(long, allow_hyphen_values = true)]
    pub lat: String,

    /// Longitude, passed to the service verbatim
    #[arg(long, allow_hyphen_values = true)]
    pub lon: String,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,

    /// Print the config file path
    Path,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
