//! Estimate the compose gas of a USDC deposit from Base into Arbitrum.
//!
//! The `lzCompose` call is simulated against a live Arbitrum node with state
//! overrides, so the account doesn't need to hold any funds.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example estimate_compose_gas -- \
//!   --rpc-url https://arb1.arbitrum.io/rpc \
//!   --layer-zero-provider <ADDRESS> \
//!   --account <ADDRESS>
//! ```

use clap::Parser;
use multichain_sdk::{
    Address, address,
    config::{ARBITRUM, BASE, ContractName, StaticRegistry},
    multichain::{DepositComposeGas, GasLimitBuffer, estimate_deposit_compose_gas},
};

const ARBITRUM_USDC: Address = address!("0xaf88d065e77c8cC2239327C5EDb3A432268e5831");

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value = "https://arb1.arbitrum.io/rpc")]
    rpc_url: String,
    /// LayerZeroProvider deployed on Arbitrum.
    #[arg(long)]
    layer_zero_provider: Address,
    #[arg(long)]
    account: Address,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = simple_logger::init_with_level(log::Level::Debug);

    let args = Cli::parse();

    let registry = StaticRegistry::builtin().with_contract(
        ARBITRUM,
        ContractName::LayerZeroProvider,
        args.layer_zero_provider,
    );
    let provider = multichain_sdk::provider_with_url(&args.rpc_url)?;

    let params = DepositComposeGas {
        chain_id: ARBITRUM,
        src_chain_id: BASE,
        account: args.account,
        token: ARBITRUM_USDC,
        action: None,
    };
    let raw = estimate_deposit_compose_gas(&provider, &registry, &params, GasLimitBuffer::NONE).await?;
    let buffered =
        estimate_deposit_compose_gas(&provider, &registry, &params, GasLimitBuffer::default()).await?;

    println!("estimated: {raw}");
    println!("with buffer: {buffered}");

    Ok(())
}
