// Endpoint set for the three lookup services.
//
// Each URL builder returns a fresh `Url`; the configured bases are never
// mutated, so one `Endpoints` can serve any number of lookups.

use url::Url;

use crate::error::Error;
use crate::models::Coordinates;

pub const DEFAULT_IP_ECHO_URL: &str = "https://api.ipify.org/";
pub const DEFAULT_GEOLOCATION_URL: &str = "https://freegeoip.app/json/";
pub const DEFAULT_ISS_PASS_URL: &str = "http://api.open-notify.org/iss-pass.json";

/// Base URLs of the IP-echo, geolocation, and ISS pass-prediction services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Answers `{ "ip": ... }` when queried with `format=json`.
    pub ip_echo: Url,
    /// The IP is appended as the final path segment.
    pub geolocation: Url,
    /// Queried with `lat` and `lon` parameters.
    pub iss_pass: Url,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            ip_echo: Url::parse(DEFAULT_IP_ECHO_URL).expect("default IP echo URL is valid"),
            geolocation: Url::parse(DEFAULT_GEOLOCATION_URL)
                .expect("default geolocation URL is valid"),
            iss_pass: Url::parse(DEFAULT_ISS_PASS_URL).expect("default ISS pass URL is valid"),
        }
    }
}

impl Endpoints {
    /// Parse all three endpoints from strings.
    pub fn parse(ip_echo: &str, geolocation: &str, iss_pass: &str) -> Result<Self, Error> {
        Ok(Self {
            ip_echo: parse_endpoint(ip_echo)?,
            geolocation: parse_endpoint(geolocation)?,
            iss_pass: parse_endpoint(iss_pass)?,
        })
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// `{ip_echo}?format=json`
    pub fn ip_url(&self) -> Url {
        let mut url = self.ip_echo.clone();
        url.query_pairs_mut().append_pair("format", "json");
        url
    }

    /// `{geolocation}/{ip}`, with the IP percent-encoded as one segment.
    pub fn coords_url(&self, ip: &str) -> Result<Url, Error> {
        let mut url = self.geolocation.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidEndpoint {
                url: self.geolocation.to_string(),
                reason: "URL cannot carry a path".into(),
            })?
            .pop_if_empty()
            .push(ip);
        Ok(url)
    }

    /// `{iss_pass}?lat={latitude}&lon={longitude}`
    pub fn passes_url(&self, coords: &Coordinates) -> Url {
        let mut url = self.iss_pass.clone();
        url.query_pairs_mut()
            .append_pair("lat", &coords.latitude.to_string())
            .append_pair("lon", &coords.longitude.to_string());
        url
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, Error> {
    Url::parse(raw).map_err(|e| Error::InvalidEndpoint {
        url: raw.into(),
        reason: e.to_string(),
    })
}
