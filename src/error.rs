use alloy::{contract, primitives::Address, sol_types, transports::TransportError};

use crate::config::ContractName;

/// Result type used across the SDK.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by the multichain SDK.
///
/// Missing registry entries are never replaced by defaults.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("chain {0} is not configured")]
    ChainNotFound(u64),

    #[error("no layer zero endpoint id for chain: {0}")]
    EndpointIdNotFound(u64),

    #[error("contract {name} not found on chain: {chain_id}")]
    ContractNotFound { chain_id: u64, name: ContractName },

    #[error("stargate pool not found for token: {token} on chain: {chain_id}")]
    StargatePoolNotFound { chain_id: u64, token: Address },

    #[error("token {token} not found on chain: {chain_id}")]
    TokenNotFound { chain_id: u64, token: Address },

    #[error("layer zero provider is not supported on chain: {0}")]
    NotSettlementChain(u64),

    #[error("compose gas is required for deposits")]
    MissingComposeGas,

    #[error("invalid hex string: {0:?}")]
    InvalidHex(String),

    #[error("compose message too short: {len} bytes, expected at least {min}")]
    MessageTooShort { len: usize, min: usize },

    #[error("unsupported action type {0}")]
    UnsupportedActionType(u8),

    #[error("abi error: {0}")]
    Abi(#[from] sol_types::Error),

    #[error("contract error: {0}")]
    Contract(#[from] contract::Error),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid registry config: {0}")]
    Config(#[from] serde_json::Error),
}
