//! Cross-chain deposits, withdrawals and actions over LayerZero and Stargate.
//!
//! A deposit moves tokens from a source chain into the settlement chain with
//! a Stargate `send`. The tokens land in the settlement chain's
//! `LayerZeroProvider`, and the LayerZero executor then calls its `lzCompose`
//! with the compose message built here, which credits the account and
//! optionally executes a [`MultichainAction`].
//!
//! # Modules
//!
//! - [`oft_codec`]: the compose envelope delivered to `lzCompose`
//! - [`abi`]: ABI schemas of the action payloads
//! - [`codec`]: deposit, compose and action encoders
//! - [`send_params`]: Stargate `SendParam` construction
//! - [`gas`]: compose gas estimation by simulation
//! - [`quote`]: Stargate pool quotes
//!
//! # Example
//!
//! ```
//! use multichain_sdk::{
//!     U256, address,
//!     config::{ARBITRUM, ContractName, StaticRegistry},
//!     multichain::{MultichainTransfer, transfer_send_params},
//! };
//!
//! # fn main() -> multichain_sdk::Result<()> {
//! let registry = StaticRegistry::builtin().with_contract(
//!     ARBITRUM,
//!     ContractName::LayerZeroProvider,
//!     address!("0x00000000000000000000000000000000000000aa"),
//! );
//! let account = address!("0x0D1d9635D0640821d15e323ac8AdADfA9c111414");
//!
//! let transfer = MultichainTransfer::deposit(ARBITRUM, account, U256::from(1_000_000), 500_000);
//! let send_param = transfer_send_params(&registry, &transfer)?;
//! assert_eq!(send_param.dstEid, 30110);
//! # Ok(())
//! # }
//! ```

pub mod abi;
mod action;
pub mod codec;
pub mod contracts;
pub mod gas;
pub mod oft_codec;
mod options;
pub mod quote;
pub mod send_params;

pub use action::*;
pub use codec::{
    compose_deposit_message, decode_action_envelope, decode_deposit_message, encode_compose_msg,
    encode_deposit_message, encode_multichain_action_data,
};
pub use contracts::SendParam;
pub use gas::{DepositComposeGas, GasLimitBuffer, estimate_deposit_compose_gas};
pub use options::{ExecutorOptions, OftCmd};
pub use quote::{DepositQuote, DepositQuoteRequest, OftQuote, StargateClient, quote_deposit};
pub use send_params::{MultichainTransfer, transfer_send_params};
