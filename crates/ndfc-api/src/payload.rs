// Update payload sanitizer.
//
// The controller rejects PUT bodies carrying server-assigned fields, so an
// update payload is a projection of the fetched record onto a fixed
// allowlist rather than the record itself.

use serde_json::{Map, Value};

use crate::model::Network;

/// Fields permitted in a network update request body. Everything else in
/// the fetched record is dropped before sending.
pub const UPDATE_FIELDS: [&str; 19] = [
    "id",
    "fabric",
    "networkName",
    "displayName",
    "networkId",
    "networkTemplate",
    "networkExtensionTemplate",
    "networkTemplateConfig",
    "vrf",
    "tenantName",
    "serviceNetworkTemplate",
    "source",
    "interfaceGroups",
    "primaryNetworkId",
    "type",
    "primaryNetworkName",
    "vlanId",
    "vlanName",
    "hierarchicalKey",
];

/// Build the minimal update payload for renaming `network`.
///
/// Copies the record, sets `displayName` to `new_display_name`, keeps only
/// the [`UPDATE_FIELDS`] that exist in the source, and strips
/// `networkStatus` (server-assigned; must never be sent back). The caller's
/// record is left untouched.
pub fn sanitized_update_payload(network: &Network, new_display_name: &str) -> Map<String, Value> {
    let mut payload = network.as_map().clone();
    payload.insert(
        "displayName".into(),
        Value::String(new_display_name.to_owned()),
    );

    payload.retain(|key, _| UPDATE_FIELDS.contains(&key.as_str()));

    // Not in the allowlist, so currently a no-op; kept as an invariant in
    // case the allowlist ever grows.
    payload.remove("networkStatus");

    payload
}
