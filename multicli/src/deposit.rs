//! Deposit and withdrawal commands.

use std::io::{Write, stdout};

use clap::Args;
use multichain_sdk::{
    Address, Decimal, U256,
    config::{ARBITRUM, Registry},
    multichain::{
        DepositComposeGas, DepositQuoteRequest, GasLimitBuffer, MultichainTransfer,
        estimate_deposit_compose_gas, quote::native_fee_usd, quote_deposit, transfer_send_params,
    },
};

use crate::RegistryArgs;

/// Build the Stargate send parameters of a transfer.
///
/// Deposits target the settlement chain and need `--compose-gas`.
/// Withdrawals are plain transfers to the account.
#[derive(Args)]
pub struct SendParamsCmd {
    #[command(flatten)]
    pub registry: RegistryArgs,
    /// Destination chain id.
    #[arg(long, default_value_t = ARBITRUM)]
    pub dst_chain_id: u64,
    #[arg(long)]
    pub account: Address,
    /// Amount in local decimals.
    #[arg(long)]
    pub amount_ld: U256,
    /// Gas reserved for the compose call.
    #[arg(long)]
    pub compose_gas: Option<u64>,
    /// Build a withdrawal instead of a deposit.
    #[arg(long)]
    pub withdrawal: bool,
}

impl SendParamsCmd {
    pub fn run(self) -> anyhow::Result<()> {
        let registry = self.registry.load(self.dst_chain_id)?;
        let transfer = MultichainTransfer {
            dst_chain_id: self.dst_chain_id,
            account: self.account,
            src_chain_id: None,
            amount_ld: self.amount_ld,
            compose_gas: self.compose_gas,
            is_deposit: !self.withdrawal,
            action: None,
        };
        let params = transfer_send_params(&registry, &transfer)?;

        let mut writer = tabwriter::TabWriter::new(stdout());
        writeln!(&mut writer, "dstEid\t{}", params.dstEid)?;
        writeln!(&mut writer, "to\t{}", params.to)?;
        writeln!(&mut writer, "amountLD\t{}", params.amountLD)?;
        writeln!(&mut writer, "minAmountLD\t{}", params.minAmountLD)?;
        writeln!(&mut writer, "extraOptions\t{}", params.extraOptions)?;
        writeln!(&mut writer, "composeMsg\t{}", params.composeMsg)?;
        writeln!(&mut writer, "oftCmd\t{}", params.oftCmd)?;
        writer.flush()?;

        Ok(())
    }
}

/// Simulate the compose step of a deposit on the settlement chain.
///
/// # Example
///
/// ```bash
/// multicli estimate-compose-gas \
///   --rpc-url https://arb1.arbitrum.io/rpc \
///   --layer-zero-provider 0x... \
///   --src-chain-id 8453 \
///   --account 0x0D1d9635D0640821d15e323ac8AdADfA9c111414 \
///   --token 0xaf88d065e77c8cC2239327C5EDb3A432268e5831
/// ```
#[derive(Args)]
pub struct EstimateComposeGasCmd {
    #[command(flatten)]
    pub registry: RegistryArgs,
    /// RPC endpoint of the settlement chain.
    #[arg(long, env = "SETTLEMENT_RPC_URL")]
    pub rpc_url: String,
    /// Settlement chain id.
    #[arg(long, default_value_t = ARBITRUM)]
    pub chain_id: u64,
    #[arg(long)]
    pub src_chain_id: u64,
    #[arg(long)]
    pub account: Address,
    /// Deposited token on the settlement chain.
    #[arg(long)]
    pub token: Address,
    /// Relative gas margin in basis points.
    #[arg(long, default_value_t = 1000)]
    pub buffer_bps: u64,
    /// Minimum gas margin.
    #[arg(long, default_value_t = 0)]
    pub min_extra_gas: u64,
}

impl EstimateComposeGasCmd {
    pub async fn run(self) -> anyhow::Result<()> {
        let registry = self.registry.load(self.chain_id)?;
        let provider = multichain_sdk::provider_with_url(&self.rpc_url)?;

        let gas = estimate_deposit_compose_gas(
            &provider,
            &registry,
            &DepositComposeGas {
                chain_id: self.chain_id,
                src_chain_id: self.src_chain_id,
                account: self.account,
                token: self.token,
                action: None,
            },
            GasLimitBuffer {
                bps: self.buffer_bps,
                min_extra: self.min_extra_gas,
            },
        )
        .await?;

        println!("{gas}");
        Ok(())
    }
}

/// Quote a deposit: compose gas, send parameters and messaging fee.
#[derive(Args)]
pub struct QuoteSendCmd {
    #[command(flatten)]
    pub registry: RegistryArgs,
    /// RPC endpoint of the source chain.
    #[arg(long, env = "SOURCE_RPC_URL")]
    pub src_rpc_url: String,
    /// RPC endpoint of the settlement chain.
    #[arg(long, env = "SETTLEMENT_RPC_URL")]
    pub settlement_rpc_url: String,
    #[arg(long)]
    pub src_chain_id: u64,
    /// Token sent on the source chain.
    #[arg(long)]
    pub src_token: Address,
    #[arg(long, default_value_t = ARBITRUM)]
    pub settlement_chain_id: u64,
    /// Same token on the settlement chain.
    #[arg(long)]
    pub settlement_token: Address,
    #[arg(long)]
    pub account: Address,
    /// Amount in local decimals.
    #[arg(long)]
    pub amount_ld: U256,
    /// Price of the source chain's native token, to show the fee in USD.
    #[arg(long)]
    pub native_price_usd: Option<Decimal>,
    /// Relative gas margin in basis points.
    #[arg(long, default_value_t = 1000)]
    pub buffer_bps: u64,
}

impl QuoteSendCmd {
    pub async fn run(self) -> anyhow::Result<()> {
        let registry = self.registry.load(self.settlement_chain_id)?;
        let src_provider = multichain_sdk::provider_with_url(&self.src_rpc_url)?;
        let settlement_provider = multichain_sdk::provider_with_url(&self.settlement_rpc_url)?;

        let request = DepositQuoteRequest {
            src_chain_id: self.src_chain_id,
            src_token: self.src_token,
            settlement_chain_id: self.settlement_chain_id,
            settlement_token: self.settlement_token,
            account: self.account,
            amount_ld: self.amount_ld,
            action: None,
        };
        let quote = quote_deposit(
            src_provider,
            &settlement_provider,
            &registry,
            &request,
            GasLimitBuffer {
                bps: self.buffer_bps,
                min_extra: 0,
            },
        )
        .await?;

        let mut writer = tabwriter::TabWriter::new(stdout());
        writeln!(&mut writer, "pool\tcompose gas\tnative fee\tlz token fee")?;
        writeln!(
            &mut writer,
            "{}\t{}\t{}\t{}",
            quote.pool, quote.compose_gas, quote.fee.nativeFee, quote.fee.lzTokenFee
        )?;
        writer.flush()?;

        if let Some(price) = self.native_price_usd {
            let native = registry.token(self.src_chain_id, Address::ZERO)?;
            match native_fee_usd(quote.fee.nativeFee, native.decimals, price) {
                Some(usd) => println!("native fee: {} {} (${usd})", quote.fee.nativeFee, native.symbol),
                None => log::warn!("native fee {} out of range", quote.fee.nativeFee),
            }
        }

        Ok(())
    }
}
