//! Gas estimation of the settlement chain's compose step.
//!
//! Before a deposit is sent, the `lzCompose` call the LayerZero executor will
//! make on the settlement chain is simulated with `eth_estimateGas`. The
//! result, plus a [`GasLimitBuffer`], is what the deposit's executor compose
//! option reserves.
//!
//! The simulation can't know the final transfer amount, so the compose
//! envelope carries a representative amount per token (see
//! [`fake_input_amount`]). State overrides make the call succeed without the
//! caller holding any funds:
//!
//! - ERC-20 tokens get their code replaced by [`OVERRIDE_ERC20_BYTECODE`] and
//!   the `LayerZeroProvider`'s balance slot in it
//!   ([`override_erc20_balance_slot`]) set to twice the fake amount;
//! - the native asset is credited to the `LayerZeroProvider` (twice the fake
//!   amount).

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, B256, Bytes, U256, hex, keccak256},
    providers::Provider,
    rpc::types::{
        TransactionRequest,
        state::{AccountOverride, StateOverride},
    },
    sol_types::SolCall,
};
use serde::{Deserialize, Serialize};

use super::{
    MultichainAction,
    codec::{compose_deposit_message, encode_multichain_action_data, lz_endpoint},
    contracts::LayerZeroProvider,
    oft_codec,
};
use crate::{
    Result,
    config::{ContractName, Registry},
};

/// Minimal ERC-20 deployed over tokens during simulation.
///
/// Keeps `mapping(address => uint256) balances` at slot
/// [`OVERRIDE_ERC20_BALANCES_SLOT`]:
///
/// - `balanceOf(holder)` reads it;
/// - `transfer` and `transferFrom` move balances, reverting on insufficient
///   balance, and return `true` (`transferFrom` ignores allowances);
/// - `allowance` returns `type(uint256).max`;
/// - any other call returns `uint256(1)`.
pub const OVERRIDE_ERC20_BYTECODE: [u8; 188] = hex!(
    "60003560e01c806370a082311461003c578063a9059cbb1461006257806323b872dd1461006e578063dd62ed3e1461005657600160005260206000f35b600435600052600060205260406000205460005260206000f35b60001960005260206000f35b3360043560243561007c565b60043560243560443561007c565b826000526000602052604060002080548083116100b75782900390558160005260006020526040600020805482019055600160005260206000f35b600080fd"
);

/// Storage slot of the balances mapping in [`OVERRIDE_ERC20_BYTECODE`].
pub const OVERRIDE_ERC20_BALANCES_SLOT: U256 = U256::ZERO;

/// Storage slot holding `holder`'s balance in [`OVERRIDE_ERC20_BYTECODE`]:
/// `keccak256(abi.encode(holder, balancesSlot))`.
pub fn override_erc20_balance_slot(holder: Address) -> B256 {
    keccak256(alloy::sol_types::SolValue::abi_encode(&(holder, OVERRIDE_ERC20_BALANCES_SLOT)))
}

/// Representative amount used when no per-symbol amount is known: 10^18.
pub const DEFAULT_FAKE_INPUT_AMOUNT: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// Representative amount of `symbol` used for the simulated compose envelope.
pub fn fake_input_amount(symbol: &str) -> U256 {
    match symbol {
        // 1 unit of the 6-decimal stablecoins
        "USDC" | "USDC.e" | "USDT" => U256::from(1_000_000u64),
        _ => DEFAULT_FAKE_INPUT_AMOUNT,
    }
}

/// Safety margin added to an estimated gas limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GasLimitBuffer {
    /// Relative margin in basis points.
    pub bps: u64,
    /// Lower bound of the margin, in gas units.
    pub min_extra: u64,
}

impl Default for GasLimitBuffer {
    fn default() -> Self {
        Self {
            bps: 1_000,
            min_extra: 0,
        }
    }
}

impl GasLimitBuffer {
    pub const NONE: Self = Self {
        bps: 0,
        min_extra: 0,
    };

    pub fn apply(&self, gas: u64) -> u64 {
        let relative = u64::try_from(gas as u128 * self.bps as u128 / 10_000).unwrap_or(u64::MAX);
        gas.saturating_add(relative.max(self.min_extra))
    }
}

/// Inputs of the compose gas simulation.
#[derive(Clone, Debug)]
pub struct DepositComposeGas {
    /// Settlement chain.
    pub chain_id: u64,
    /// Source chain of the deposit.
    pub src_chain_id: u64,
    pub account: Address,
    /// Token deposited, as known on the settlement chain.
    pub token: Address,
    pub action: Option<MultichainAction>,
}

/// Fully resolved `lzCompose` simulation.
#[derive(Clone, Debug)]
pub struct ComposeGasRequest {
    /// `LayerZeroProvider` on the settlement chain.
    pub target: Address,
    /// LayerZero endpoint, the only caller `lzCompose` accepts.
    pub sender: Address,
    pub call: LayerZeroProvider::lzComposeCall,
    pub state_override: StateOverride,
}

impl ComposeGasRequest {
    pub fn transaction(&self) -> TransactionRequest {
        TransactionRequest::default()
            .with_from(self.sender)
            .with_to(self.target)
            .with_input(Bytes::from(self.call.abi_encode()))
    }
}

/// Resolves everything the `lzCompose` simulation needs.
///
/// Fails if either chain has no endpoint id, the token is unknown, there is no
/// Stargate pool for it, or the `LayerZeroProvider` isn't configured.
pub fn compose_gas_request<R: Registry + ?Sized>(
    registry: &R,
    params: &DepositComposeGas,
) -> Result<ComposeGasRequest> {
    let chain_id = params.chain_id;

    let data = params.action.as_ref().map(encode_multichain_action_data);
    let compose_from_with_msg =
        compose_deposit_message(registry, chain_id, params.account, data.as_deref())?;

    let token = registry.token(chain_id, params.token)?;
    let fake_amount = fake_input_amount(&token.symbol);

    let src_eid = registry.layer_zero_endpoint_id(params.src_chain_id)?;
    let message = oft_codec::encode(0, src_eid, fake_amount, &compose_from_with_msg);

    let token = registry.unwrapped_token_address(chain_id, params.token)?;
    let stargate_pool = registry.stargate_pool(chain_id, token)?;
    let lz_provider = registry.contract(chain_id, ContractName::LayerZeroProvider)?;

    // the tokens have already landed in the provider when lzCompose runs
    let provider_balance = fake_amount * U256::from(2);
    let mut state_override = StateOverride::default();
    if !token.is_zero() {
        state_override.insert(
            token,
            AccountOverride {
                code: Some(Bytes::from_static(&OVERRIDE_ERC20_BYTECODE)),
                state_diff: Some(
                    [(
                        override_erc20_balance_slot(lz_provider),
                        B256::from(provider_balance.to_be_bytes::<32>()),
                    )]
                    .into_iter()
                    .collect(),
                ),
                ..Default::default()
            },
        );
    } else {
        state_override.insert(
            lz_provider,
            AccountOverride {
                balance: Some(provider_balance),
                ..Default::default()
            },
        );
    }

    Ok(ComposeGasRequest {
        target: lz_provider,
        sender: lz_endpoint(registry, chain_id)?,
        call: LayerZeroProvider::lzComposeCall {
            from: stargate_pool,
            guid: B256::ZERO,
            message,
            executor: Address::ZERO,
            extraData: Bytes::new(),
        },
        state_override,
    })
}

/// Simulates the compose step on the settlement chain and returns the
/// buffered gas limit.
///
/// RPC failures, including reverts, are returned unchanged.
pub async fn estimate_deposit_compose_gas<P, R>(
    provider: &P,
    registry: &R,
    params: &DepositComposeGas,
    buffer: GasLimitBuffer,
) -> Result<u64>
where
    P: Provider,
    R: Registry + ?Sized,
{
    let request = compose_gas_request(registry, params)?;
    log::debug!(
        "simulating lzCompose on {} at {} from {}",
        params.chain_id,
        request.target,
        request.sender
    );

    let gas = provider
        .estimate_gas(request.transaction())
        .overrides(request.state_override)
        .await?;

    let buffered = buffer.apply(gas);
    log::debug!("compose gas: estimated={gas} buffered={buffered}");
    Ok(buffered)
}
