//! Connection-parameter resolution.
//!
//! Each parameter is tried against an ordered list of providers until one
//! yields a non-empty value: CLI flag, then environment (clap merges those
//! two), then an interactive prompt. Presence is validated once, after
//! everything is collected, so a partially-configured environment still
//! walks the user through the remaining prompts.

use std::time::Duration;

use dialoguer::Input;
use secrecy::SecretString;
use url::Url;

use crate::cli::Cli;
use crate::error::CliError;

/// Resolved connection parameters for one controller session.
pub struct Connection {
    pub base_url: Url,
    pub fabric: String,
    pub username: String,
    pub password: SecretString,
    pub domain: String,
    pub verify_tls: bool,
    pub timeout: Duration,
}

/// What the user asked for.
pub struct RenameRequest {
    pub current_display_name: String,
    /// `None` means no update was requested.
    pub new_display_name: Option<String>,
}

/// Resolve every parameter, prompting for whatever the flags and
/// environment did not provide.
pub fn resolve(cli: &Cli) -> Result<(Connection, RenameRequest), CliError> {
    let host = resolve_text(cli.host.as_deref(), "NDFC host or IP (e.g. https://10.107.70.70)")?;
    let fabric = resolve_text(cli.fabric.as_deref(), "Fabric name")?;
    let username = resolve_text(cli.username.as_deref(), "Username")?;
    let password = resolve_password(cli.password.as_deref())?;
    eprintln!("Using login domain: {}", cli.domain);

    let current_display_name = resolve_text(
        cli.display_name.as_deref(),
        "Current network display name to search",
    )?;
    let new_display_name = resolve_new_display_name(cli.new_display_name.as_deref())?;

    // Presence checks happen only now, mirroring the prompt order above.
    require("host", &host)?;
    require("fabric", &fabric)?;
    require("display-name", &current_display_name)?;
    require("username", &username)?;
    let Some(password) = password else {
        return Err(CliError::MissingParameter { name: "password" });
    };

    let host = normalize_host(&host);
    let base_url: Url = host.parse().map_err(|_| CliError::Validation {
        field: "host".into(),
        reason: format!("invalid URL: {host}"),
    })?;

    Ok((
        Connection {
            base_url,
            fabric,
            username,
            password,
            domain: cli.domain.clone(),
            verify_tls: cli.verify_tls,
            timeout: Duration::from_secs(cli.timeout),
        },
        RenameRequest {
            current_display_name,
            new_display_name,
        },
    ))
}

// ── Providers ────────────────────────────────────────────────────────

/// Flag/env value if non-empty, else an interactive prompt.
///
/// The prompt allows an empty answer; emptiness is rejected later by the
/// collective presence check.
fn resolve_text(provided: Option<&str>, prompt: &str) -> Result<String, CliError> {
    if let Some(value) = provided {
        let value = value.trim();
        if !value.is_empty() {
            return Ok(value.to_owned());
        }
    }

    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_err)?;
    Ok(value.trim().to_owned())
}

/// Password from flag/env, else a non-echoing prompt.
fn resolve_password(provided: Option<&str>) -> Result<Option<SecretString>, CliError> {
    if let Some(value) = provided {
        if !value.is_empty() {
            eprintln!("Using password from environment");
            return Ok(Some(SecretString::from(value.to_owned())));
        }
    }

    let value = rpassword::prompt_password("Password: ").map_err(prompt_err)?;
    if value.is_empty() {
        return Ok(None);
    }
    Ok(Some(SecretString::from(value)))
}

/// New display name; an empty answer means "no update requested".
fn resolve_new_display_name(provided: Option<&str>) -> Result<Option<String>, CliError> {
    let value = match provided {
        Some(value) => value.trim().to_owned(),
        None => {
            let answered: String = Input::new()
                .with_prompt("New display name (leave empty to skip the update)")
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_err)?;
            answered.trim().to_owned()
        }
    };

    Ok(if value.is_empty() { None } else { Some(value) })
}

// ── Helpers ──────────────────────────────────────────────────────────

fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Prompt {
        reason: e.to_string(),
    }
}

fn require(name: &'static str, value: &str) -> Result<(), CliError> {
    if value.is_empty() {
        return Err(CliError::MissingParameter { name });
    }
    Ok(())
}

/// Prefix the host with `https://` when no scheme was given.
fn normalize_host(host: &str) -> String {
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_owned()
    } else {
        format!("https://{host}")
    }
}
