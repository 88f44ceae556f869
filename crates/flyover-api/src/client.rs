// Flyover HTTP client
//
// Wraps `reqwest::Client` with the endpoint set and the shared
// status/body handling. Each lookup is one GET and one JSON parse; the
// orchestrator chains them and stops at the first failure.

use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

use crate::endpoints::Endpoints;
use crate::error::Error;
use crate::models::{Coordinates, IpResponse, PassTime, PassTimesResponse};
use crate::transport::TransportConfig;

/// Client for the IP-echo, geolocation, and ISS pass-prediction services.
///
/// Holds no per-request state: every call is independent, and clones share
/// the underlying connection pool.
#[derive(Debug, Clone)]
pub struct FlyoverClient {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl FlyoverClient {
    /// Create a client from a `TransportConfig`.
    pub fn new(endpoints: Endpoints, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, endpoints })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, endpoints: Endpoints) -> Self {
        Self { http, endpoints }
    }

    // ── Lookups ──────────────────────────────────────────────────────

    /// Discover the caller's public IP address.
    ///
    /// `GET {ip_echo}?format=json` → `{ "ip": "..." }`
    pub async fn fetch_my_ip(&self) -> Result<String, Error> {
        let body: IpResponse = self.get(self.endpoints.ip_url()).await?;
        info!(ip = %body.ip, "resolved public IP");
        Ok(body.ip)
    }

    /// Look up the coordinates of an IP address.
    ///
    /// `GET {geolocation}/{ip}` → `{ "latitude": ..., "longitude": ..., ... }`
    pub async fn fetch_coords_by_ip(&self, ip: &str) -> Result<Coordinates, Error> {
        let url = self.endpoints.coords_url(ip)?;
        let coords: Coordinates = self.get(url).await?;
        info!(
            latitude = %coords.latitude,
            longitude = %coords.longitude,
            "resolved coordinates"
        );
        Ok(coords)
    }

    /// Fetch upcoming ISS passes over the given coordinates.
    ///
    /// `GET {iss_pass}?lat=..&lon=..` → `{ "response": [ { risetime, duration } ] }`
    pub async fn fetch_flyover_times(&self, coords: &Coordinates) -> Result<Vec<PassTime>, Error> {
        let body: PassTimesResponse = self.get(self.endpoints.passes_url(coords)).await?;
        info!(count = body.response.len(), "fetched ISS pass times");
        Ok(body.response)
    }

    /// Upcoming ISS passes over the caller's current location.
    ///
    /// IP, then coordinates, then pass times. The first failing step's
    /// error is returned as-is and later steps are not attempted.
    pub async fn next_passes_for_my_location(&self) -> Result<Vec<PassTime>, Error> {
        let ip = self.fetch_my_ip().await?;
        let coords = self.fetch_coords_by_ip(&ip).await?;
        self.fetch_flyover_times(&coords).await
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode a `200 OK` body as `T`.
    ///
    /// Any other status is a service error carrying the raw body. The body is
    /// read before the status is checked, so a body that cannot be read is a
    /// network error whatever the status.
    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {url}");

        let resp = self.http.get(url).send().await.map_err(Error::Network)?;
        let status = resp.status();
        let body = resp.text().await.map_err(Error::Network)?;

        if status != reqwest::StatusCode::OK {
            debug!(status = status.as_u16(), "service returned an error status");
            return Err(Error::Service {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}
