//! # multichain-sdk
//!
//! A Rust SDK for moving funds and protocol actions across chains with
//! LayerZero and Stargate V2.
//!
//! Users on a source chain (Ethereum, Base, ...) send tokens to a settlement
//! chain (Arbitrum, Avalanche) through a Stargate pool. The tokens arrive with
//! a compose message that tells the settlement chain which account to credit
//! and, optionally, which protocol action to run with them.
//!
//! ## Features
//!
//! - Bit-exact LayerZero OFT compose envelopes
//! - ABI encoding of deposits, withdrawals, GLV operations, referral codes and
//!   bridge-outs
//! - Stargate `SendParam` construction with executor compose options
//! - Compose gas estimation by `eth_estimateGas` simulation with state overrides
//! - Stargate fee and limit quotes
//!
//! ## Quick Start
//!
//! ### Encode a compose envelope
//!
//! ```
//! use multichain_sdk::{U256, address, multichain::{codec, oft_codec}};
//!
//! let account = address!("0x0D1d9635D0640821d15e323ac8AdADfA9c111414");
//! let endpoint = address!("0x1a44076050125825900e736c501f859c50fE728c");
//!
//! let deposit = codec::encode_deposit_message(account, None);
//! let compose_msg = codec::encode_compose_msg_bytes(endpoint, &deposit);
//! let envelope = oft_codec::encode(1, 30184, U256::from(1_000_000), &compose_msg);
//!
//! assert_eq!(oft_codec::src_eid(&envelope), 30184);
//! assert_eq!(oft_codec::compose_msg(&envelope), &deposit[..]);
//! ```
//!
//! ### Estimate the compose gas of a deposit
//!
//! ```no_run
//! use multichain_sdk::{
//!     address,
//!     config::{ARBITRUM, BASE, ContractName, StaticRegistry},
//!     multichain::{DepositComposeGas, GasLimitBuffer, estimate_deposit_compose_gas},
//! };
//!
//! # async fn example() -> multichain_sdk::Result<()> {
//! let registry = StaticRegistry::builtin().with_contract(
//!     ARBITRUM,
//!     ContractName::LayerZeroProvider,
//!     address!("0x00000000000000000000000000000000000000aa"),
//! );
//! let provider = multichain_sdk::provider_with_url("https://arb1.arbitrum.io/rpc")?;
//!
//! let gas = estimate_deposit_compose_gas(
//!     &provider,
//!     &registry,
//!     &DepositComposeGas {
//!         chain_id: ARBITRUM,
//!         src_chain_id: BASE,
//!         account: address!("0x0D1d9635D0640821d15e323ac8AdADfA9c111414"),
//!         token: address!("0xaf88d065e77c8cC2239327C5EDb3A432268e5831"),
//!         action: None,
//!     },
//!     GasLimitBuffer::default(),
//! )
//! .await?;
//! println!("compose gas: {gas}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`config`]: chains, tokens, pools and contract addresses
//! - [`multichain`]: encoders, send parameters, gas estimation and quotes
//! - [`error`]: the SDK error type

pub mod config;
pub mod error;
pub mod multichain;

use alloy::providers::{DynProvider, Provider, ProviderBuilder};

pub use error::{Error, Result};

/// Re-exported primitive types from Alloy.
pub use alloy::primitives::{Address, B256, Bytes, U256, address};
/// Re-exported decimal type from rust_decimal.
///
/// Used for fee conversions.
pub use rust_decimal::Decimal;

/// Creates an HTTP provider for `url`.
pub fn provider_with_url(url: &str) -> Result<DynProvider> {
    let url = url::Url::parse(url)?;
    Ok(ProviderBuilder::new().connect_http(url).erased())
}
