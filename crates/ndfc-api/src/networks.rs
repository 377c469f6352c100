// LAN-fabric network endpoints
//
// Fabric-scoped network listing and the display-name update. The update
// succeeds purely on status code; the response body is parsed best-effort
// for an echo of the stored record.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::client::{NdfcClient, excerpt};
use crate::error::Error;
use crate::model::Network;
use crate::payload::sanitized_update_payload;

/// What the controller echoed back after a successful update.
///
/// Echo-only data: an empty outcome still means the update was accepted
/// (the verdict is decided by status code alone).
#[derive(Debug, Default, Deserialize)]
pub struct UpdateOutcome {
    /// Record id confirmed by the controller, if echoed.
    pub id: Option<serde_json::Value>,
    /// Display name confirmed by the controller, if echoed.
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
}

/// Linear first-match scan for an exact `displayName`.
///
/// Case-sensitive, whole-string. Display names are not guaranteed unique;
/// when several records share one, the first in server response order wins.
pub fn find_by_display_name<'a>(networks: &'a [Network], display_name: &str) -> Option<&'a Network> {
    networks
        .iter()
        .find(|n| n.display_name() == Some(display_name))
}

impl NdfcClient {
    /// List all networks in a fabric.
    ///
    /// `GET .../fabrics/{fabric}/networks`
    pub async fn list_networks(&self, fabric: &str) -> Result<Vec<Network>, Error> {
        let url = self.lan_fabric_url(&format!("fabrics/{fabric}/networks"));
        debug!(fabric, "listing networks");
        self.get(url).await
    }

    /// Update a network's display name.
    ///
    /// `PUT .../fabrics/{fabric}/networks/{networkName}` with the
    /// sanitized payload. `networkName` addresses the record in the URL,
    /// so a record without it fails before any request is issued.
    /// HTTP 200, 201, and 202 all count as success.
    pub async fn update_network(
        &self,
        fabric: &str,
        network: &Network,
        new_display_name: &str,
    ) -> Result<UpdateOutcome, Error> {
        let Some(network_name) = network.network_name() else {
            return Err(Error::MissingField {
                field: "networkName",
            });
        };

        let url = self.lan_fabric_url(&format!("fabrics/{fabric}/networks/{network_name}"));
        debug!(
            network_name,
            old = network.display_name().unwrap_or("N/A"),
            new = new_display_name,
            "updating network display name"
        );

        let payload = sanitized_update_payload(network, new_display_name);
        let resp = self.put_raw(url, &payload).await?;

        let status = resp.status();
        if !matches!(status.as_u16(), 200 | 201 | 202) {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body: excerpt(&body).to_owned(),
            });
        }

        // Echo only: a body that fails to parse does not flip the verdict.
        match resp.json::<UpdateOutcome>().await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                warn!("update accepted (HTTP {status}) but response body was unreadable: {e}");
                Ok(UpdateOutcome::default())
            }
        }
    }
}
