//! `brightid`: operator tool for BrightID verification and sponsorship.

use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use brightid_attestation::client::{BrightIdClient, BrightIdClientBuilder};
use brightid_attestation::config::BrightIdConfig;
use brightid_attestation::network::{DEFAULT_APP, DEFAULT_NODE_URL};
use brightid_attestation::signing::SigningKeyMaterial;

#[derive(Parser)]
#[command(name = "brightid", about = "BrightID verification and sponsorship tool")]
struct Cli {
    /// BrightID node REST base URL.
    #[arg(long, default_value = DEFAULT_NODE_URL, env = "BRIGHTID_NODE_URL")]
    node_url: String,

    /// App namespace registered with BrightID.
    #[arg(long, default_value = DEFAULT_APP, env = "BRIGHTID_APP")]
    app: String,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 30, env = "BRIGHTID_TIMEOUT_SECS")]
    timeout_secs: u64,

    /// Log level used when RUST_LOG is unset.
    #[arg(long, default_value = "info", env = "BRIGHTID_LOG_LEVEL")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check whether a DID is verified unique for the app.
    Verify {
        #[arg(long)]
        did: String,
    },
    /// Show the app's remaining sponsorships.
    Quota,
    /// Sponsor a context id (requires BRIGHTID_PRIVATE_KEY).
    Sponsor {
        #[arg(long)]
        context_id: String,
    },
    /// Generate a new sponsor keypair.
    Keygen,
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Build the client from env plus flags. A sponsoring client refuses to build
/// without a key, before any request is made.
fn connect(cli: &Cli, sponsoring: bool) -> anyhow::Result<BrightIdClient> {
    let mut config = BrightIdConfig::from_env().context("loading BrightID configuration")?;
    config.node_url = cli.node_url.clone();
    config.app = cli.app.clone();
    config.timeout = Duration::from_secs(cli.timeout_secs);

    let mut builder = BrightIdClientBuilder::from_config(config);
    if sponsoring {
        builder = builder.require_signing_key();
    }
    builder.build().context("building BrightID client")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let out = match &cli.command {
        Command::Keygen => {
            let key = SigningKeyMaterial::generate();
            json!({
                "publicKey": key.public_key_base64(),
                "privateKey": key.export_secret_base64(),
            })
        }
        Command::Verify { did } => {
            let client = connect(&cli, false)?;
            serde_json::to_value(client.verifications().verify_did(did).await)?
        }
        Command::Quota => {
            let client = connect(&cli, false)?;
            let app = client.quota().app_info(client.app()).await?;
            serde_json::to_value(app)?
        }
        Command::Sponsor { context_id } => {
            let client = connect(&cli, true)?;
            let outcome = client.sponsorships()?.trigger(context_id).await;
            serde_json::to_value(outcome)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
