//! Chain, token and contract configuration.
//!
//! Every cross-chain operation in the SDK reads its static data (LayerZero
//! endpoint ids, contract addresses, Stargate pools, token metadata) through
//! the [`Registry`] trait. The registry is passed explicitly so callers can
//! plug in their own deployment tables and tests can use fixtures.
//!
//! [`StaticRegistry`] is the in-memory implementation. It ships with the
//! public LayerZero and Stargate infrastructure for known chains
//! ([`StaticRegistry::builtin`]) and can be extended from JSON with the
//! protocol contracts of a given deployment:
//!
//! ```json
//! {
//!   "chains": [
//!     {
//!       "chainId": 42161,
//!       "name": "arbitrum",
//!       "isSettlement": true,
//!       "contracts": { "LayerZeroProvider": "0x..." }
//!     }
//!   ]
//! }
//! ```

mod builtin;

use std::collections::HashMap;

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

pub use builtin::*;

use crate::{Error, Result};

/// Contracts looked up by name on a chain.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum ContractName {
    /// LayerZero EndpointV2.
    LayerZeroEndpoint,
    /// Protocol contract receiving Stargate transfers and running the compose step.
    LayerZeroProvider,
}

/// Token metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub symbol: String,
    pub address: Address,
    pub decimals: u8,
    /// The chain's native asset, always at the zero address.
    #[serde(default)]
    pub is_native: bool,
    /// ERC-20 wrapper of the native asset.
    #[serde(default)]
    pub is_wrapped: bool,
}

impl Token {
    pub fn erc20(symbol: &str, address: Address, decimals: u8) -> Self {
        Self {
            symbol: symbol.to_owned(),
            address,
            decimals,
            is_native: false,
            is_wrapped: false,
        }
    }

    pub fn native(symbol: &str, decimals: u8) -> Self {
        Self {
            symbol: symbol.to_owned(),
            address: Address::ZERO,
            decimals,
            is_native: true,
            is_wrapped: false,
        }
    }

    pub fn wrapped(symbol: &str, address: Address, decimals: u8) -> Self {
        Self {
            is_wrapped: true,
            ..Self::erc20(symbol, address, decimals)
        }
    }
}

/// Stargate pool serving a token. Native pools use the zero address as token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StargatePool {
    pub token: Address,
    pub pool: Address,
}

/// Configuration of a single chain.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
    pub chain_id: u64,
    #[serde(default)]
    pub name: String,
    /// LayerZero endpoint id (eid).
    #[serde(default)]
    pub endpoint_id: Option<u32>,
    /// Whether the protocol's core contracts are deployed on this chain.
    #[serde(default)]
    pub is_settlement: bool,
    #[serde(default)]
    pub contracts: HashMap<ContractName, Address>,
    #[serde(default)]
    pub stargate_pools: Vec<StargatePool>,
    #[serde(default)]
    pub tokens: Vec<Token>,
}

impl ChainConfig {
    pub fn new(chain_id: u64) -> Self {
        Self {
            chain_id,
            ..Default::default()
        }
    }

    /// Merges `other` into `self`. Values present in `other` win.
    fn merge(&mut self, other: ChainConfig) {
        if !other.name.is_empty() {
            self.name = other.name;
        }
        if other.endpoint_id.is_some() {
            self.endpoint_id = other.endpoint_id;
        }
        self.is_settlement |= other.is_settlement;
        self.contracts.extend(other.contracts);
        for pool in other.stargate_pools {
            self.stargate_pools.retain(|p| p.token != pool.token);
            self.stargate_pools.push(pool);
        }
        for token in other.tokens {
            self.tokens.retain(|t| t.address != token.address);
            self.tokens.push(token);
        }
    }
}

/// Read-only lookup of static chain configuration.
///
/// Every lookup fails with a descriptive [`Error`] when the key is unknown.
pub trait Registry {
    /// Returns the LayerZero endpoint id of a chain.
    fn layer_zero_endpoint_id(&self, chain_id: u64) -> Result<u32>;

    /// Returns the address of a named contract on a chain.
    fn contract(&self, chain_id: u64, name: ContractName) -> Result<Address>;

    /// Returns the Stargate pool serving `token` on a chain.
    fn stargate_pool(&self, chain_id: u64, token: Address) -> Result<Address>;

    /// Returns the token at `address` on a chain.
    fn token(&self, chain_id: u64, address: Address) -> Result<&Token>;

    /// Whether the chain hosts the protocol's core contracts.
    fn is_settlement_chain(&self, chain_id: u64) -> bool;

    /// Maps the wrapped native token to the native (zero) address and returns
    /// any other token unchanged.
    fn unwrapped_token_address(&self, chain_id: u64, address: Address) -> Result<Address> {
        let token = self.token(chain_id, address)?;
        Ok(if token.is_wrapped {
            Address::ZERO
        } else {
            token.address
        })
    }
}

#[derive(Deserialize)]
struct RegistryFile {
    chains: Vec<ChainConfig>,
}

/// In-memory [`Registry`].
#[derive(Clone, Debug, Default)]
pub struct StaticRegistry {
    chains: HashMap<u64, ChainConfig>,
}

impl StaticRegistry {
    /// Registry with the bundled LayerZero/Stargate infrastructure.
    ///
    /// Protocol contracts such as [`ContractName::LayerZeroProvider`] are
    /// deployment specific and have to be added with [`Self::with_contract`]
    /// or [`Self::merge`].
    pub fn builtin() -> Self {
        builtin::chains()
            .into_iter()
            .fold(Self::default(), |registry, chain| registry.with_chain(chain))
    }

    /// Parses a registry from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: RegistryFile = serde_json::from_str(json)?;
        Ok(file
            .chains
            .into_iter()
            .fold(Self::default(), |registry, chain| registry.with_chain(chain)))
    }

    /// Inserts or replaces a chain.
    pub fn with_chain(mut self, chain: ChainConfig) -> Self {
        self.chains.insert(chain.chain_id, chain);
        self
    }

    /// Sets a contract address, creating the chain entry if needed.
    pub fn with_contract(mut self, chain_id: u64, name: ContractName, address: Address) -> Self {
        self.chains
            .entry(chain_id)
            .or_insert_with(|| ChainConfig::new(chain_id))
            .contracts
            .insert(name, address);
        self
    }

    /// Layers `other` on top of this registry.
    pub fn merge(mut self, other: StaticRegistry) -> Self {
        for (chain_id, chain) in other.chains {
            match self.chains.get_mut(&chain_id) {
                Some(existing) => existing.merge(chain),
                None => {
                    self.chains.insert(chain_id, chain);
                }
            }
        }
        self
    }

    /// Returns the configuration of a chain.
    pub fn chain(&self, chain_id: u64) -> Result<&ChainConfig> {
        self.chains
            .get(&chain_id)
            .ok_or(Error::ChainNotFound(chain_id))
    }

    /// Iterates the configured chains.
    pub fn chains(&self) -> impl Iterator<Item = &ChainConfig> {
        self.chains.values()
    }
}

impl Registry for StaticRegistry {
    fn layer_zero_endpoint_id(&self, chain_id: u64) -> Result<u32> {
        self.chains
            .get(&chain_id)
            .and_then(|chain| chain.endpoint_id)
            .ok_or(Error::EndpointIdNotFound(chain_id))
    }

    fn contract(&self, chain_id: u64, name: ContractName) -> Result<Address> {
        self.chains
            .get(&chain_id)
            .and_then(|chain| chain.contracts.get(&name).copied())
            .ok_or(Error::ContractNotFound { chain_id, name })
    }

    fn stargate_pool(&self, chain_id: u64, token: Address) -> Result<Address> {
        self.chains
            .get(&chain_id)
            .and_then(|chain| chain.stargate_pools.iter().find(|p| p.token == token))
            .map(|p| p.pool)
            .ok_or(Error::StargatePoolNotFound { chain_id, token })
    }

    fn token(&self, chain_id: u64, address: Address) -> Result<&Token> {
        self.chains
            .get(&chain_id)
            .and_then(|chain| chain.tokens.iter().find(|t| t.address == address))
            .ok_or(Error::TokenNotFound {
                chain_id,
                token: address,
            })
    }

    fn is_settlement_chain(&self, chain_id: u64) -> bool {
        self.chains
            .get(&chain_id)
            .is_some_and(|chain| chain.is_settlement)
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;

    const PROVIDER: Address = address!("0x0000000000000000000000000000000000000abc");

    #[test]
    fn test_builtin_lookups() {
        let registry = StaticRegistry::builtin();
        assert_eq!(registry.layer_zero_endpoint_id(ARBITRUM).unwrap(), 30110);
        assert_eq!(
            registry
                .contract(ARBITRUM, ContractName::LayerZeroEndpoint)
                .unwrap(),
            LAYER_ZERO_ENDPOINT_V2
        );
        assert_eq!(
            registry.stargate_pool(ARBITRUM, Address::ZERO).unwrap(),
            address!("0xA45B5130f36CDcA45667738e2a258AB09f4A5f7F")
        );
        assert!(registry.is_settlement_chain(ARBITRUM));
        assert!(!registry.is_settlement_chain(BASE));
    }

    #[test]
    fn test_missing_keys_fail() {
        let registry = StaticRegistry::builtin();
        assert!(matches!(
            registry.layer_zero_endpoint_id(999),
            Err(Error::EndpointIdNotFound(999))
        ));
        assert!(matches!(
            registry.contract(ARBITRUM, ContractName::LayerZeroProvider),
            Err(Error::ContractNotFound {
                chain_id: ARBITRUM,
                name: ContractName::LayerZeroProvider
            })
        ));
        assert!(matches!(
            registry.stargate_pool(ARBITRUM, PROVIDER),
            Err(Error::StargatePoolNotFound { .. })
        ));
        assert!(matches!(
            registry.token(ARBITRUM, PROVIDER),
            Err(Error::TokenNotFound { .. })
        ));
    }

    #[test]
    fn test_unwrapped_token_address() {
        let registry = StaticRegistry::builtin();
        let weth = address!("0x82aF49447D8a07e3bd95BD0d56f35241523fBab1");
        let usdc = address!("0xaf88d065e77c8cC2239327C5EDb3A432268e5831");
        assert_eq!(
            registry.unwrapped_token_address(ARBITRUM, weth).unwrap(),
            Address::ZERO
        );
        assert_eq!(
            registry.unwrapped_token_address(ARBITRUM, usdc).unwrap(),
            usdc
        );
    }

    #[test]
    fn test_json_merge() {
        let json = r#"{
            "chains": [
                {
                    "chainId": 42161,
                    "isSettlement": true,
                    "contracts": {
                        "LayerZeroProvider": "0x0000000000000000000000000000000000000abc"
                    }
                },
                { "chainId": 31337, "name": "local", "endpointId": 40999 }
            ]
        }"#;
        let registry = StaticRegistry::builtin().merge(StaticRegistry::from_json(json).unwrap());

        assert_eq!(
            registry
                .contract(ARBITRUM, ContractName::LayerZeroProvider)
                .unwrap(),
            PROVIDER
        );
        // builtin data survives the merge
        assert_eq!(registry.layer_zero_endpoint_id(ARBITRUM).unwrap(), 30110);
        assert_eq!(registry.chain(ARBITRUM).unwrap().name, "arbitrum");
        assert_eq!(registry.layer_zero_endpoint_id(31337).unwrap(), 40999);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            StaticRegistry::from_json("{\"chains\": 1}"),
            Err(Error::Config(_))
        ));
    }
}
