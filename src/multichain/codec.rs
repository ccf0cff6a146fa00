//! Encoders for every outward-facing multichain payload.
//!
//! All cross-chain actions are serialized through this module:
//!
//! - [`encode_deposit_message`]: `abi.encode(address account, bytes data)`,
//!   the message the settlement chain decodes to credit an account.
//! - [`encode_compose_msg`]: `[composeFrom (bytes32)][msg]`, the compose
//!   message layout consumed by [`super::oft_codec`].
//! - [`encode_multichain_action_data`]: `abi.encode(uint8 actionType, bytes actionData)`
//!   where `actionData` is the ABI encoding of the action variant.

use alloy::{
    primitives::{Address, Bytes},
    sol_types::SolValue,
};

use super::{
    MultichainAction, MultichainActionType, abi::BridgeOutParams, action::BridgeOut,
    oft_codec::address_to_bytes32,
};
use crate::{
    Error, Result,
    config::{ContractName, Registry},
};

/// ABI-encodes `(account, data)`. Missing data is encoded as empty bytes.
pub fn encode_deposit_message(account: Address, data: Option<&[u8]>) -> Bytes {
    let data = Bytes::copy_from_slice(data.unwrap_or_default());
    (account, data).abi_encode_params().into()
}

/// Inverse of [`encode_deposit_message`].
pub fn decode_deposit_message(msg: &[u8]) -> Result<(Address, Bytes)> {
    Ok(<(Address, Bytes)>::abi_decode_params(msg)?)
}

/// Prefixes a `0x`-prefixed hex message with the 32 byte padded `compose_from`.
pub fn encode_compose_msg(compose_from: Address, msg: &str) -> Result<Bytes> {
    let invalid = || Error::InvalidHex(msg.to_owned());
    let hex = msg.strip_prefix("0x").ok_or_else(invalid)?;
    let msg = const_hex::decode(hex).map_err(|_| invalid())?;
    Ok(encode_compose_msg_bytes(compose_from, &msg))
}

/// Byte-slice counterpart of [`encode_compose_msg`].
pub fn encode_compose_msg_bytes(compose_from: Address, msg: &[u8]) -> Bytes {
    let mut out = Vec::with_capacity(32 + msg.len());
    out.extend_from_slice(address_to_bytes32(compose_from).as_slice());
    out.extend_from_slice(msg);
    out.into()
}

/// Deposit message for `account` wrapped as a compose message originating
/// from the LayerZero endpoint of `dst_chain_id`.
pub fn compose_deposit_message<R: Registry + ?Sized>(
    registry: &R,
    dst_chain_id: u64,
    account: Address,
    data: Option<&[u8]>,
) -> Result<Bytes> {
    let msg = encode_deposit_message(account, data);
    let endpoint = lz_endpoint(registry, dst_chain_id)?;
    Ok(encode_compose_msg_bytes(endpoint, &msg))
}

/// LayerZero endpoint contract of a chain.
pub fn lz_endpoint<R: Registry + ?Sized>(registry: &R, chain_id: u64) -> Result<Address> {
    registry.contract(chain_id, ContractName::LayerZeroEndpoint)
}

/// Serializes an action into `abi.encode(uint8 actionType, bytes actionData)`.
pub fn encode_multichain_action_data(action: &MultichainAction) -> Bytes {
    let action_data = match action {
        MultichainAction::SetTraderReferralCode(action) => {
            (action.signed_relay_params(), action.data.referral_code).abi_encode_params()
        }
        MultichainAction::Deposit(action) => (
            action.signed_relay_params(),
            action.data.transfer_requests.clone(),
            action.data.params.clone(),
        )
            .abi_encode_params(),
        MultichainAction::GlvDeposit(action) => (
            action.signed_relay_params(),
            action.data.transfer_requests.clone(),
            action.data.params.clone(),
        )
            .abi_encode_params(),
        MultichainAction::Withdrawal(action) => (
            action.signed_relay_params(),
            action.data.transfer_requests.clone(),
            action.data.params.clone(),
        )
            .abi_encode_params(),
        MultichainAction::GlvWithdrawal(action) => (
            action.signed_relay_params(),
            action.data.transfer_requests.clone(),
            action.data.params.clone(),
        )
            .abi_encode_params(),
        MultichainAction::BridgeOut(bridge_out) => encode_bridge_out(bridge_out),
    };

    log::trace!(
        "{} action data: {}",
        action.action_type(),
        const_hex::encode_prefixed(&action_data)
    );

    (u8::from(action.action_type()), Bytes::from(action_data))
        .abi_encode_params()
        .into()
}

/// Bridge-out payload.
///
/// Without a secondary provider this is the five-field parameter list
/// `(desChainId, deadline, provider, providerData, minAmountOut)`; with one it
/// is a single [`BridgeOutParams`] tuple. The two are not interchangeable.
fn encode_bridge_out(bridge_out: &BridgeOut) -> Vec<u8> {
    if !bridge_out.has_secondary_provider() {
        return (
            bridge_out.des_chain_id,
            bridge_out.deadline,
            bridge_out.provider,
            bridge_out.provider_data.clone(),
            bridge_out.min_amount_out,
        )
            .abi_encode_params();
    }

    BridgeOutParams {
        desChainId: bridge_out.des_chain_id,
        deadline: bridge_out.deadline,
        provider: bridge_out.provider,
        providerData: bridge_out.provider_data.clone(),
        minAmountOut: bridge_out.min_amount_out,
        secondaryProvider: bridge_out.secondary_provider,
        secondaryProviderData: bridge_out.secondary_provider_data.clone(),
        secondaryMinAmountOut: bridge_out.secondary_min_amount_out,
    }
    .abi_encode()
}

/// Splits `abi.encode(uint8 actionType, bytes actionData)`.
///
/// Fails on tags outside the protocol set and on `None`/`RegisterCode`, which
/// never travel in a compose message.
pub fn decode_action_envelope(data: &[u8]) -> Result<(MultichainActionType, Bytes)> {
    let (tag, action_data) = <(u8, Bytes)>::abi_decode_params(data)?;
    match MultichainActionType::try_from(tag)? {
        MultichainActionType::None | MultichainActionType::RegisterCode => {
            Err(Error::UnsupportedActionType(tag))
        }
        action_type => Ok((action_type, action_data)),
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{B256, U256, address, b256, bytes};

    use super::*;
    use crate::{
        config::{ARBITRUM, LAYER_ZERO_ENDPOINT_V2, StaticRegistry},
        multichain::{
            RelayedAction,
            abi::{
                CreateDepositParams, CreateGlvDepositParams, CreateGlvWithdrawalParams,
                CreateWithdrawalParams, RelayParams, TransferRequests,
            },
            action::{Deposit, GlvDeposit, GlvWithdrawal, SetTraderReferralCode, Withdrawal},
        },
    };

    const ACCOUNT: Address = address!("0x0D1d9635D0640821d15e323ac8AdADfA9c111414");

    fn relay_params() -> RelayParams {
        RelayParams {
            userNonce: U256::from(1),
            deadline: U256::from(1_700_000_000u64),
            desChainId: U256::from(42161),
            ..Default::default()
        }
    }

    fn relayed<T>(data: T) -> RelayedAction<T> {
        RelayedAction::new(relay_params(), bytes!("00"), data)
    }

    fn all_actions() -> Vec<MultichainAction> {
        vec![
            MultichainAction::SetTraderReferralCode(relayed(SetTraderReferralCode {
                referral_code: b256!(
                    "0x6162630000000000000000000000000000000000000000000000000000000000"
                ),
            })),
            MultichainAction::Deposit(relayed(Deposit::default())),
            MultichainAction::BridgeOut(BridgeOut::default()),
            MultichainAction::GlvDeposit(relayed(GlvDeposit::default())),
            MultichainAction::Withdrawal(relayed(Withdrawal::default())),
            MultichainAction::GlvWithdrawal(relayed(GlvWithdrawal::default())),
        ]
    }

    #[test]
    fn test_deposit_message() {
        let encoded = encode_deposit_message(ACCOUNT, None);
        let (account, data) = <(Address, Bytes)>::abi_decode_params(&encoded).unwrap();
        assert_eq!(account, ACCOUNT);
        assert!(data.is_empty());

        let encoded = encode_deposit_message(ACCOUNT, Some(&[1, 2, 3]));
        let (_, data) = <(Address, Bytes)>::abi_decode_params(&encoded).unwrap();
        assert_eq!(data, bytes!("010203"));
    }

    #[test]
    fn test_compose_msg_validation() {
        assert!(matches!(
            encode_compose_msg(ACCOUNT, "not-hex"),
            Err(Error::InvalidHex(_))
        ));
        assert!(matches!(
            encode_compose_msg(ACCOUNT, "0xzz"),
            Err(Error::InvalidHex(_))
        ));

        let msg = encode_compose_msg(ACCOUNT, "0x1234").unwrap();
        assert_eq!(msg.len(), 32 + 2);
        assert_eq!(&msg[..12], &[0u8; 12]);
        assert_eq!(&msg[12..32], ACCOUNT.as_slice());
        assert_eq!(&msg[32..], &[0x12, 0x34]);
    }

    #[test]
    fn test_compose_deposit_message() {
        let registry = StaticRegistry::builtin();
        let msg = compose_deposit_message(&registry, ARBITRUM, ACCOUNT, None).unwrap();

        assert_eq!(&msg[12..32], LAYER_ZERO_ENDPOINT_V2.as_slice());
        assert_eq!(&msg[32..], &encode_deposit_message(ACCOUNT, None)[..]);

        assert!(matches!(
            compose_deposit_message(&registry, 999, ACCOUNT, None),
            Err(Error::ContractNotFound { chain_id: 999, .. })
        ));
    }

    #[test]
    fn test_every_action_is_tagged() {
        for action in all_actions() {
            let encoded = encode_multichain_action_data(&action);
            assert!(!encoded.is_empty());

            let (action_type, data) = decode_action_envelope(&encoded).unwrap();
            assert_eq!(action_type, action.action_type());
            assert!(!data.is_empty());
        }
    }

    #[test]
    fn test_deposit_scenario() {
        let action = MultichainAction::Deposit(RelayedAction::new(
            relay_params(),
            bytes!("00"),
            Deposit {
                transfer_requests: TransferRequests::default(),
                params: CreateDepositParams::default(),
            },
        ));
        let encoded = encode_multichain_action_data(&action);
        assert!(const_hex::encode_prefixed(&encoded).starts_with("0x"));

        let (tag, data) = <(u8, Bytes)>::abi_decode_params(&encoded).unwrap();
        assert_eq!(tag, 1);

        let (relay, transfers, params) =
            <(RelayParams, TransferRequests, CreateDepositParams)>::abi_decode_params(&data)
                .unwrap();
        assert_eq!(relay.signature, bytes!("00"));
        assert_eq!(relay.userNonce, U256::from(1));
        assert_eq!(relay.deadline, U256::from(1_700_000_000u64));
        assert_eq!(relay.desChainId, U256::from(42161));
        assert!(transfers.tokens.is_empty());
        assert_eq!(params.minMarketTokens, U256::ZERO);
        assert_eq!(params.addresses.market, Address::ZERO);
    }

    #[test]
    fn test_relay_variants_round_trip() {
        let referral_code = b256!("0x0000000000000000000000000000000000000000000000000000000000000abc");
        let encoded = encode_multichain_action_data(&MultichainAction::SetTraderReferralCode(
            relayed(SetTraderReferralCode { referral_code }),
        ));
        let (_, data) = decode_action_envelope(&encoded).unwrap();
        let (relay, code) = <(RelayParams, B256)>::abi_decode_params(&data).unwrap();
        assert_eq!(relay.signature, bytes!("00"));
        assert_eq!(code, referral_code);

        let mut withdrawal = Withdrawal::default();
        withdrawal.params.minLongTokenAmount = U256::from(11);
        let encoded =
            encode_multichain_action_data(&MultichainAction::Withdrawal(relayed(withdrawal)));
        let (_, data) = decode_action_envelope(&encoded).unwrap();
        let (_, _, params) =
            <(RelayParams, TransferRequests, CreateWithdrawalParams)>::abi_decode_params(&data)
                .unwrap();
        assert_eq!(params.minLongTokenAmount, U256::from(11));

        let mut glv_deposit = GlvDeposit::default();
        glv_deposit.params.isMarketTokenDeposit = true;
        let encoded =
            encode_multichain_action_data(&MultichainAction::GlvDeposit(relayed(glv_deposit)));
        let (_, data) = decode_action_envelope(&encoded).unwrap();
        let (_, _, params) =
            <(RelayParams, TransferRequests, CreateGlvDepositParams)>::abi_decode_params(&data)
                .unwrap();
        assert!(params.isMarketTokenDeposit);

        let encoded = encode_multichain_action_data(&MultichainAction::GlvWithdrawal(relayed(
            GlvWithdrawal::default(),
        )));
        let (_, data) = decode_action_envelope(&encoded).unwrap();
        assert!(
            <(RelayParams, TransferRequests, CreateGlvWithdrawalParams)>::abi_decode_params(&data)
                .is_ok()
        );
    }

    #[test]
    fn test_bridge_out_short_form() {
        let bridge_out = BridgeOut {
            des_chain_id: U256::from(8453),
            deadline: U256::from(1_700_000_000u64),
            provider: address!("0x00000000000000000000000000000000000000aa"),
            provider_data: bytes!("beef"),
            min_amount_out: U256::from(99),
            secondary_provider: address!("0x00000000000000000000000000000000000000bb"),
            secondary_provider_data: Bytes::new(),
            secondary_min_amount_out: U256::from(1),
        };
        let encoded = encode_multichain_action_data(&MultichainAction::BridgeOut(bridge_out));
        let (action_type, data) = decode_action_envelope(&encoded).unwrap();
        assert_eq!(action_type, MultichainActionType::BridgeOut);

        let decoded = <(U256, U256, Address, Bytes, U256)>::abi_decode_params(&data).unwrap();
        assert_eq!(decoded.0, U256::from(8453));
        assert_eq!(decoded.3, bytes!("beef"));
        assert_eq!(decoded.4, U256::from(99));
        assert_eq!(decoded.abi_encode_params(), data.to_vec());
    }

    #[test]
    fn test_bridge_out_long_form() {
        let bridge_out = BridgeOut {
            des_chain_id: U256::from(8453),
            deadline: U256::from(1_700_000_000u64),
            provider: address!("0x00000000000000000000000000000000000000aa"),
            provider_data: bytes!("beef"),
            min_amount_out: U256::from(99),
            secondary_provider: address!("0x00000000000000000000000000000000000000bb"),
            secondary_provider_data: bytes!("cafe"),
            secondary_min_amount_out: U256::from(7),
        };
        let encoded = encode_multichain_action_data(&MultichainAction::BridgeOut(bridge_out));
        let (_, data) = decode_action_envelope(&encoded).unwrap();

        // a single dynamic tuple starts with its offset
        assert_eq!(U256::from_be_slice(&data[..32]), U256::from(32));

        let params = BridgeOutParams::abi_decode(&data).unwrap();
        assert_eq!(params.secondaryProvider, address!("0x00000000000000000000000000000000000000bb"));
        assert_eq!(params.secondaryProviderData, bytes!("cafe"));
        assert_eq!(params.secondaryMinAmountOut, U256::from(7));
        assert_eq!(params.abi_encode(), data.to_vec());
    }

    #[test]
    fn test_envelope_rejects_unknown_tags() {
        for tag in [0u8, 7, 8, 200] {
            let encoded = (tag, bytes!("01")).abi_encode_params();
            assert!(matches!(
                decode_action_envelope(&encoded),
                Err(Error::UnsupportedActionType(t)) if t == tag
            ));
        }
    }

    #[test]
    fn test_decode_deposit_message() {
        let data = encode_multichain_action_data(&MultichainAction::BridgeOut(BridgeOut::default()));
        let msg = encode_deposit_message(ACCOUNT, Some(&data));

        let (account, decoded) = decode_deposit_message(&msg).unwrap();
        assert_eq!(account, ACCOUNT);
        assert_eq!(decoded, data);
        assert_eq!(
            decode_action_envelope(&decoded).unwrap().0,
            MultichainActionType::BridgeOut
        );

        assert!(matches!(
            decode_deposit_message(&msg[..40]),
            Err(Error::Abi(_))
        ));
    }
}
