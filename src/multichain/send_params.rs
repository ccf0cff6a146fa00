use alloy::primitives::{Address, Bytes, U256};

use super::{
    MultichainAction, OftCmd,
    codec::{encode_deposit_message, encode_multichain_action_data},
    contracts::SendParam,
    oft_codec::address_to_bytes32,
    options::ExecutorOptions,
};
use crate::{
    Error, Result,
    config::{ContractName, Registry},
};

/// A cross-chain token transfer to be turned into a Stargate [`SendParam`].
///
/// Deposits land in the settlement chain's `LayerZeroProvider`, which runs the
/// compose step with the encoded deposit message. Withdrawals are plain
/// transfers to the account itself.
#[derive(Clone, Debug)]
pub struct MultichainTransfer {
    pub dst_chain_id: u64,
    pub account: Address,
    pub src_chain_id: Option<u64>,
    pub amount_ld: U256,
    /// Gas reserved for the compose call. Required for deposits.
    pub compose_gas: Option<u64>,
    pub is_deposit: bool,
    pub action: Option<MultichainAction>,
}

impl MultichainTransfer {
    /// Transfer into the settlement chain running the compose step.
    pub fn deposit(dst_chain_id: u64, account: Address, amount_ld: U256, compose_gas: u64) -> Self {
        Self {
            dst_chain_id,
            account,
            src_chain_id: None,
            amount_ld,
            compose_gas: Some(compose_gas),
            is_deposit: true,
            action: None,
        }
    }

    /// Plain transfer to `account` on `dst_chain_id`.
    pub fn withdrawal(dst_chain_id: u64, account: Address, amount_ld: U256) -> Self {
        Self {
            dst_chain_id,
            account,
            src_chain_id: None,
            amount_ld,
            compose_gas: None,
            is_deposit: false,
            action: None,
        }
    }

    pub fn with_src_chain_id(mut self, src_chain_id: u64) -> Self {
        self.src_chain_id = Some(src_chain_id);
        self
    }

    pub fn with_action(mut self, action: MultichainAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// Builds the Stargate send parameters of a transfer.
///
/// `minAmountLD` is always zero: slippage is not bounded here. Transfers are
/// sent in taxi mode.
pub fn transfer_send_params<R: Registry + ?Sized>(
    registry: &R,
    transfer: &MultichainTransfer,
) -> Result<SendParam> {
    let dst_eid = registry.layer_zero_endpoint_id(transfer.dst_chain_id)?;

    let (to, compose_msg, extra_options) = if transfer.is_deposit {
        if !registry.is_settlement_chain(transfer.dst_chain_id) {
            return Err(Error::NotSettlementChain(transfer.dst_chain_id));
        }
        let compose_gas = transfer.compose_gas.ok_or(Error::MissingComposeGas)?;

        let data = transfer.action.as_ref().map(encode_multichain_action_data);
        let compose_msg = encode_deposit_message(transfer.account, data.as_deref());
        let extra_options = ExecutorOptions::new()
            .add_executor_compose_option(0, compose_gas.into(), 0)
            .to_bytes();
        let provider = registry.contract(transfer.dst_chain_id, ContractName::LayerZeroProvider)?;

        (provider, compose_msg, extra_options)
    } else {
        (transfer.account, Bytes::new(), Bytes::new())
    };

    log::debug!(
        "send params: src={:?} dst={} eid={dst_eid} to={to} amount={} deposit={}",
        transfer.src_chain_id,
        transfer.dst_chain_id,
        transfer.amount_ld,
        transfer.is_deposit
    );

    Ok(SendParam {
        dstEid: dst_eid,
        to: address_to_bytes32(to),
        amountLD: transfer.amount_ld,
        minAmountLD: U256::ZERO,
        extraOptions: extra_options,
        composeMsg: compose_msg,
        oftCmd: OftCmd::Taxi.to_bytes(),
    })
}
