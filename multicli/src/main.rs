use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use multichain_sdk::{
    Address,
    config::{ContractName, StaticRegistry},
};

mod compose;
mod deposit;

#[derive(Parser)]
#[command(author, version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode an OFT compose envelope.
    EncodeCompose(compose::EncodeComposeCmd),
    /// Decode an OFT compose envelope and the deposit it carries.
    DecodeCompose(compose::DecodeComposeCmd),
    /// Build the Stargate send parameters of a deposit or withdrawal.
    SendParams(deposit::SendParamsCmd),
    /// Simulate the settlement chain's compose step.
    EstimateComposeGas(deposit::EstimateComposeGasCmd),
    /// Quote a deposit end to end.
    QuoteSend(deposit::QuoteSendCmd),
}

/// Where chain, pool and contract addresses come from.
#[derive(Args, Clone)]
pub struct RegistryArgs {
    /// JSON registry merged over the bundled one.
    #[arg(long, env = "MULTICHAIN_REGISTRY")]
    pub registry: Option<PathBuf>,
    /// LayerZeroProvider of the settlement chain.
    #[arg(long, env = "LAYER_ZERO_PROVIDER")]
    pub layer_zero_provider: Option<Address>,
}

impl RegistryArgs {
    pub fn load(&self, settlement_chain_id: u64) -> anyhow::Result<StaticRegistry> {
        let mut registry = StaticRegistry::builtin();
        if let Some(path) = &self.registry {
            let json = std::fs::read_to_string(path)?;
            registry = registry.merge(StaticRegistry::from_json(&json)?);
        }
        if let Some(provider) = self.layer_zero_provider {
            registry = registry.with_contract(
                settlement_chain_id,
                ContractName::LayerZeroProvider,
                provider,
            );
        }
        Ok(registry)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    simple_logger::init_with_env()?;

    let args = Cli::parse();
    match args.command {
        Commands::EncodeCompose(cmd) => cmd.run(),
        Commands::DecodeCompose(cmd) => cmd.run(),
        Commands::SendParams(cmd) => cmd.run(),
        Commands::EstimateComposeGas(cmd) => cmd.run().await,
        Commands::QuoteSend(cmd) => cmd.run().await,
    }
}
