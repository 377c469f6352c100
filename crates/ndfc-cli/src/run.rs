//! The interactive flow: resolve parameters, authenticate, look up the
//! network, render it, and optionally rename and save.
//!
//! Linear by design. Each step either succeeds or maps to a failure exit;
//! the only branch point is what to do with the new display name.

use std::path::Path;

use ndfc_api::{NdfcClient, Network, TlsMode, TransportConfig, find_by_display_name};

use crate::cli::Cli;
use crate::config::{self, Connection, RenameRequest};
use crate::error::CliError;
use crate::output;

pub async fn run(cli: Cli) -> Result<(), CliError> {
    let (conn, request) = config::resolve(&cli)?;
    tracing::debug!(fabric = %conn.fabric, base_url = %conn.base_url, "resolved connection parameters");

    eprintln!("Connecting to NDFC at {}", conn.base_url);
    let client = build_client(&conn)?;

    eprintln!("Authenticating with domain: {}", conn.domain);
    client
        .login(&conn.username, &conn.password)
        .await
        .map_err(|source| CliError::AuthFailed { source })?;
    eprintln!("Authentication successful");

    let network = fetch_network(&client, &conn.fabric, &request.current_display_name).await?;
    println!("{}", output::render_detail(&network));

    match request.new_display_name.as_deref() {
        None => {
            eprintln!("No new display name provided - showing current details only");
            offer_save(&network, &request.current_display_name, false, cli.save)?;
        }

        Some(new_name) if new_name == request.current_display_name => {
            eprintln!("New display name is the same as the current one - no update needed");
        }

        Some(new_name) => {
            rename(&client, &conn, &request, &network, new_name, &cli).await?;
        }
    }

    Ok(())
}

fn build_client(conn: &Connection) -> Result<NdfcClient, CliError> {
    let transport = TransportConfig {
        tls: if conn.verify_tls {
            TlsMode::System
        } else {
            TlsMode::DangerAcceptInvalid
        },
        timeout: conn.timeout,
        cookie_store: true,
    };
    NdfcClient::new(conn.base_url.clone(), conn.domain.clone(), &transport).map_err(CliError::Api)
}

/// List the fabric's networks and resolve the display name.
///
/// On a miss, every record's display/network name pair is printed before
/// the not-found error surfaces.
async fn fetch_network(
    client: &NdfcClient,
    fabric: &str,
    display_name: &str,
) -> Result<Network, CliError> {
    eprintln!("Retrieving networks from fabric: {fabric}");
    let networks = client.list_networks(fabric).await?;
    eprintln!("Retrieved {} networks", networks.len());

    eprintln!("Searching for network with display name '{display_name}'");
    match find_by_display_name(&networks, display_name) {
        Some(network) => {
            eprintln!(
                "Found matching network: {}",
                network.network_name().unwrap_or("N/A")
            );
            Ok(network.clone())
        }
        None => {
            if !networks.is_empty() {
                eprintln!("Available networks:");
                eprintln!("{}", output::render_available(&networks));
            }
            Err(CliError::NetworkNotFound {
                display_name: display_name.to_owned(),
                fabric: fabric.to_owned(),
            })
        }
    }
}

/// Confirm, update, re-fetch, and offer to save the renamed record.
async fn rename(
    client: &NdfcClient,
    conn: &Connection,
    request: &RenameRequest,
    network: &Network,
    new_name: &str,
    cli: &Cli,
) -> Result<(), CliError> {
    let question = format!(
        "Rename '{}' to '{new_name}'?",
        request.current_display_name
    );
    if !confirm(&question, cli.yes)? {
        eprintln!("Update cancelled");
        return Ok(());
    }

    let outcome = client
        .update_network(&conn.fabric, network, new_name)
        .await
        .map_err(|source| CliError::UpdateFailed { source })?;

    eprintln!("Network display name updated successfully");
    if let Some(id) = outcome.id {
        eprintln!("   Confirmed network ID: {id}");
    }
    if let Some(confirmed) = outcome.display_name {
        eprintln!("   Confirmed display name: {confirmed}");
    }

    // Best-effort refresh; the rename already succeeded, so a failure
    // here only costs the updated detail view.
    eprintln!("Fetching updated network details...");
    let refreshed = match client.list_networks(&conn.fabric).await {
        Ok(networks) => find_by_display_name(&networks, new_name).cloned(),
        Err(err) => {
            eprintln!("Could not re-fetch updated details: {err}");
            None
        }
    };

    if let Some(ref updated) = refreshed {
        eprintln!("UPDATED NETWORK DETAILS");
        println!("{}", output::render_detail(updated));
    }

    let record = refreshed.as_ref().unwrap_or(network);
    offer_save(record, new_name, true, cli.save)
}

/// Offer to write the record to a JSON file in the working directory.
fn offer_save(
    network: &Network,
    display_name: &str,
    updated: bool,
    auto: bool,
) -> Result<(), CliError> {
    let question = if updated {
        "Save updated network details to a JSON file?"
    } else {
        "Save current network details to a JSON file?"
    };
    if !confirm(question, auto)? {
        return Ok(());
    }

    let filename = output::output_filename(display_name, updated);
    output::save_network(network, Path::new(&filename))?;
    eprintln!("Network details saved to: {filename}");
    Ok(())
}

/// Prompt for confirmation, auto-approving when the matching flag was set.
fn confirm(message: &str, auto: bool) -> Result<bool, CliError> {
    if auto {
        return Ok(true);
    }
    dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Prompt {
            reason: e.to_string(),
        })
}
