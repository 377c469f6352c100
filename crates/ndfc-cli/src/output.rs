//! Presentation: the network detail block, the available-networks table,
//! and JSON file output.
//!
//! The console output is the tool's primary UI, so layouts here are part
//! of its observable contract.

use std::fmt::Write as _;
use std::path::Path;

use serde_json::Value;
use tabled::{Table, Tabled, settings::Style};

use ndfc_api::Network;

const RULE: &str = "============================================================";

/// Core fields of the detail block, in print order.
const CORE_FIELDS: [(&str, &str); 8] = [
    ("Network Name", "networkName"),
    ("Display Name", "displayName"),
    ("Network ID", "networkId"),
    ("Fabric", "fabric"),
    ("Type", "type"),
    ("Status", "networkStatus"),
    ("VRF", "vrf"),
    ("Tenant", "tenantName"),
];

/// Known sub-keys of the embedded template configuration, with their
/// human labels. Only present, non-empty values are printed.
const TEMPLATE_CONFIG_KEYS: [(&str, &str); 8] = [
    ("vlanId", "VLAN ID"),
    ("segmentId", "Segment ID"),
    ("mcastGroup", "Multicast Group"),
    ("gatewayIpAddress", "Gateway IP"),
    ("mtu", "MTU"),
    ("tag", "Tag"),
    ("enableIR", "Enable IR"),
    ("isLayer2Only", "Layer 2 Only"),
];

// ── Detail block ─────────────────────────────────────────────────────

/// Render a network record as the fixed-layout detail block.
///
/// Missing fields fall back to `N/A`. If `networkTemplateConfig` is
/// present it is parsed as an embedded JSON string; a parse failure is
/// noted and the rest of the block still renders.
pub fn render_detail(network: &Network) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "NETWORK DETAILS");
    let _ = writeln!(out, "{RULE}");

    for (label, key) in CORE_FIELDS {
        let value = network.field_display(key).unwrap_or_else(|| "N/A".into());
        let _ = writeln!(out, "{label}: {value}");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Template Information:");
    for (label, key) in [
        ("Network Template", "networkTemplate"),
        ("Extension Template", "networkExtensionTemplate"),
    ] {
        let value = network.field_display(key).unwrap_or_else(|| "N/A".into());
        let _ = writeln!(out, "   {label}: {value}");
    }

    if let Some(raw) = network.get("networkTemplateConfig") {
        if non_empty(raw) {
            render_template_config(&mut out, raw);
        }
    }

    let _ = writeln!(out);
    let _ = write!(out, "{RULE}");
    out
}

/// Render the embedded template-configuration subsection.
fn render_template_config(out: &mut String, raw: &Value) {
    let parsed = raw.as_str().map(serde_json::from_str::<Value>);
    match parsed {
        Some(Ok(config)) => {
            let _ = writeln!(out);
            let _ = writeln!(out, "Network Configuration:");
            for (key, label) in TEMPLATE_CONFIG_KEYS {
                if let Some(value) = config.get(key) {
                    if non_empty(value) {
                        let _ = writeln!(out, "   {label}: {}", display_value(value));
                    }
                }
            }
        }
        Some(Err(_)) | None => {
            let _ = writeln!(out);
            let _ = writeln!(out, "   (unable to parse network template configuration)");
        }
    }
}

/// Empty/zero/false values are omitted from the configuration subsection.
fn non_empty(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i != 0
            } else if let Some(u) = n.as_u64() {
                u != 0
            } else {
                n.as_f64().is_some_and(|f| f.abs() > f64::EPSILON)
            }
        }
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ── Available-networks table ─────────────────────────────────────────

#[derive(Tabled)]
struct AvailableRow {
    #[tabled(rename = "Display Name")]
    display_name: String,
    #[tabled(rename = "Network Name")]
    network_name: String,
}

/// Render the display/network name of every record, for the diagnostic
/// listing printed when a lookup misses.
pub fn render_available(networks: &[Network]) -> String {
    let rows: Vec<AvailableRow> = networks
        .iter()
        .map(|n| AvailableRow {
            display_name: n.display_name().unwrap_or("N/A").to_owned(),
            network_name: n.network_name().unwrap_or("N/A").to_owned(),
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

// ── File output ──────────────────────────────────────────────────────

/// File name for a saved record: `network_{name}[_updated].json`, with
/// spaces in the display name replaced by underscores.
pub fn output_filename(display_name: &str, updated: bool) -> String {
    let stem = display_name.replace(' ', "_");
    if updated {
        format!("network_{stem}_updated.json")
    } else {
        format!("network_{stem}.json")
    }
}

/// Serialize a record as indented JSON to `path`.
pub fn save_network(network: &Network, path: &Path) -> Result<(), crate::error::CliError> {
    let json = serde_json::to_string_pretty(network)?;
    std::fs::write(path, json)?;
    Ok(())
}
