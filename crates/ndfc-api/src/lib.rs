// ndfc-api: Async Rust client for the Cisco Nexus Dashboard Fabric
// Controller (NDFC) LAN-fabric REST API.

pub mod client;
pub mod error;
pub mod model;
pub mod networks;
pub mod payload;
pub mod transport;

mod auth;

pub use client::NdfcClient;
pub use error::Error;
pub use model::Network;
pub use networks::{UpdateOutcome, find_by_display_name};
pub use payload::{UPDATE_FIELDS, sanitized_update_payload};
pub use transport::{TlsMode, TransportConfig};
