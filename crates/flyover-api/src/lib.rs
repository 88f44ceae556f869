// flyover-api: Async Rust client for upcoming ISS passes over the caller's location

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod transport;

pub use client::FlyoverClient;
pub use endpoints::Endpoints;
pub use error::Error;
pub use models::{Coordinate, Coordinates, PassTime};
pub use transport::TransportConfig;
