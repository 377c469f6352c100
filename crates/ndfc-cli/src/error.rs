//! CLI error types with miette diagnostics.
//!
//! Maps `ndfc_api::Error` and local failures into user-facing errors with
//! actionable help text. The tool's exit contract is binary: 0 on success,
//! 1 on any failure path.

use miette::Diagnostic;
use thiserror::Error;

/// Exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Input ────────────────────────────────────────────────────────
    #[error("Required parameter '{name}' is missing")]
    #[diagnostic(
        code(ndfc::missing_parameter),
        help("Pass --{name}, set its environment variable, or answer the prompt.")
    )]
    MissingParameter { name: &'static str },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(ndfc::validation))]
    Validation { field: String, reason: String },

    #[error("Prompt failed: {reason}")]
    #[diagnostic(
        code(ndfc::prompt),
        help("Interactive input was interrupted or unavailable.\nPass the value as a flag or environment variable instead.")
    )]
    Prompt { reason: String },

    // ── Controller ───────────────────────────────────────────────────
    #[error("Authentication failed")]
    #[diagnostic(
        code(ndfc::auth_failed),
        help(
            "Verify the username, password, and login domain.\n\
             Self-signed controllers need TLS verification off (the default)."
        )
    )]
    AuthFailed {
        #[source]
        source: ndfc_api::Error,
    },

    #[error("Network '{display_name}' not found in fabric '{fabric}'")]
    #[diagnostic(
        code(ndfc::not_found),
        help("Display names are case-sensitive; the available networks are listed above.")
    )]
    NetworkNotFound {
        display_name: String,
        fabric: String,
    },

    #[error("Failed to update the network display name")]
    #[diagnostic(code(ndfc::update_failed))]
    UpdateFailed {
        #[source]
        source: ndfc_api::Error,
    },

    #[error(transparent)]
    Api(#[from] ndfc_api::Error),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    #[diagnostic(code(ndfc::json))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code. Every failure exits 1 -- success
    /// paths return before this is called.
    pub fn exit_code(&self) -> i32 {
        exit_code::FAILURE
    }
}
