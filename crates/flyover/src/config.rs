//! CLI-owned configuration: TOML file, environment, and translation to
//! `flyover_api` endpoint and transport settings.
//!
//! The API crate never reads files -- it receives pre-built `Endpoints`
//! and a `TransportConfig`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::ValueEnum;
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use flyover_api::endpoints::{DEFAULT_GEOLOCATION_URL, DEFAULT_IP_ECHO_URL, DEFAULT_ISS_PASS_URL};
use flyover_api::{Endpoints, TransportConfig};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── TOML config structs ──────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// Per-request timeout in seconds. Unset or 0 waits forever.
    pub timeout: Option<u64>,

    /// Default output format (same names as `--output`).
    pub output: Option<String>,

    /// Service base URLs.
    #[serde(default)]
    pub endpoints: EndpointsConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct EndpointsConfig {
    #[serde(default = "default_ip_echo")]
    pub ip_echo: String,

    #[serde(default = "default_geolocation")]
    pub geolocation: String,

    #[serde(default = "default_iss_pass")]
    pub iss_pass: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            ip_echo: default_ip_echo(),
            geolocation: default_geolocation(),
            iss_pass: default_iss_pass(),
        }
    }
}

fn default_ip_echo() -> String {
    DEFAULT_IP_ECHO_URL.into()
}
fn default_geolocation() -> String {
    DEFAULT_GEOLOCATION_URL.into()
}
fn default_iss_pass() -> String {
    DEFAULT_ISS_PASS_URL.into()
}

// ── Config file path ─────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("rs", "flyover", "flyover").map_or_else(
        || {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("flyover");
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

/// The `--config` flag if given, otherwise the platform default.
pub fn active_config_path(global: &GlobalOpts) -> PathBuf {
    global.config.clone().unwrap_or_else(config_path)
}

// ── Config loading ───────────────────────────────────────────────────

/// Load config from defaults, the TOML file (if present), and
/// `FLYOVER_*` environment variables. Nested keys use `__`, e.g.
/// `FLYOVER_ENDPOINTS__IP_ECHO`.
pub fn load_config(path: &Path) -> Result<Config, CliError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("FLYOVER_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Fold flag overrides into a loaded config, for `config show`.
pub fn with_overrides(mut config: Config, global: &GlobalOpts) -> Config {
    if let Some(ref url) = global.ip_echo_url {
        config.endpoints.ip_echo.clone_from(url);
    }
    if let Some(ref url) = global.geolocation_url {
        config.endpoints.geolocation.clone_from(url);
    }
    if let Some(ref url) = global.iss_pass_url {
        config.endpoints.iss_pass.clone_from(url);
    }
    if global.timeout.is_some() {
        config.timeout = global.timeout;
    }
    if let Some(format) = global.output.and_then(|f| f.to_possible_value()) {
        config.output = Some(format.get_name().to_owned());
    }
    config
}

// ── Settings resolution ──────────────────────────────────────────────

/// Everything a lookup command needs, with flags applied over config.
#[derive(Debug)]
pub struct Settings {
    pub endpoints: Endpoints,
    pub transport: TransportConfig,
    pub output: OutputFormat,
}

/// Translate config + global flags into API settings.
///
/// Flags (and their env vars) win over config values.
pub fn resolve_settings(global: &GlobalOpts, config: &Config) -> Result<Settings, CliError> {
    let endpoints = Endpoints::parse(
        global
            .ip_echo_url
            .as_deref()
            .unwrap_or(&config.endpoints.ip_echo),
        global
            .geolocation_url
            .as_deref()
            .unwrap_or(&config.endpoints.geolocation),
        global
            .iss_pass_url
            .as_deref()
            .unwrap_or(&config.endpoints.iss_pass),
    )?;

    let transport = match global.timeout.or(config.timeout) {
        None | Some(0) => TransportConfig::default(),
        Some(secs) => TransportConfig::with_timeout(Duration::from_secs(secs)),
    };

    let output = match (global.output, config.output.as_deref()) {
        (Some(format), _) => format,
        (None, Some(name)) => {
            OutputFormat::from_str(name, true).map_err(|reason| CliError::Validation {
                field: "output".into(),
                reason,
            })?
        }
        (None, None) => OutputFormat::Table,
    };

    Ok(Settings {
        endpoints,
        transport,
        output,
    })
}
