//! Clap derive structure for the `ndfc` CLI.
//!
//! Every connection parameter resolves flag → environment → interactive
//! prompt; the flags here cover the first two rungs.

use clap::Parser;

/// ndfc -- rename NDFC networks by display name
#[derive(Debug, Parser)]
#[command(
    name = "ndfc",
    version,
    about = "Look up an NDFC network by display name and optionally rename it",
    long_about = "Connects to a Nexus Dashboard Fabric Controller, resolves a network\n\
        by its human-readable display name within a fabric, shows its details,\n\
        and optionally updates the display name.\n\n\
        Any parameter not given as a flag or environment variable is prompted for."
)]
pub struct Cli {
    /// NDFC host or base URL (scheme defaults to https://)
    #[arg(long, env = "NDFC_HOST")]
    pub host: Option<String>,

    /// Fabric that scopes the network lookup
    #[arg(long, short = 'f', env = "DEFAULT_FABRIC")]
    pub fabric: Option<String>,

    /// Username for authentication
    #[arg(long, short = 'u', env = "NDFC_USERNAME")]
    pub username: Option<String>,

    /// Password (prefer the environment variable or the hidden prompt)
    #[arg(long, env = "NDFC_PASSWORD", hide_env = true)]
    pub password: Option<String>,

    /// Login domain
    #[arg(long, env = "NDFC_DOMAIN", default_value = "local")]
    pub domain: String,

    /// Current display name of the network to look up
    #[arg(long, short = 'n')]
    pub display_name: Option<String>,

    /// New display name (empty skips the update)
    #[arg(long)]
    pub new_display_name: Option<String>,

    /// Verify TLS certificates (off by default; NDFC ships self-signed)
    #[arg(long, env = "NDFC_VERIFY_TLS")]
    pub verify_tls: bool,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,

    /// Skip the update confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Save the resulting record to a JSON file without prompting
    #[arg(long)]
    pub save: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}
