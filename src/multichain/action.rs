//! Actions carried by a cross-chain compose message.

use alloy::primitives::{Address, B256, Bytes, U256};

use super::abi::{
    CreateDepositParams, CreateGlvDepositParams, CreateGlvWithdrawalParams,
    CreateWithdrawalParams, RelayParams, TransferRequests,
};
use crate::Error;

/// Tag of a [`MultichainAction`], as decoded by the settlement chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::Display)]
#[repr(u8)]
pub enum MultichainActionType {
    None = 0,
    Deposit = 1,
    GlvDeposit = 2,
    BridgeOut = 3,
    SetTraderReferralCode = 4,
    Withdrawal = 5,
    GlvWithdrawal = 6,
    RegisterCode = 7,
}

impl TryFrom<u8> for MultichainActionType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Self::None,
            1 => Self::Deposit,
            2 => Self::GlvDeposit,
            3 => Self::BridgeOut,
            4 => Self::SetTraderReferralCode,
            5 => Self::Withdrawal,
            6 => Self::GlvWithdrawal,
            7 => Self::RegisterCode,
            _ => return Err(Error::UnsupportedActionType(value)),
        })
    }
}

impl From<MultichainActionType> for u8 {
    fn from(value: MultichainActionType) -> Self {
        value as u8
    }
}

/// An action signed by the user and submitted by a relayer.
///
/// `relay_params.signature` is ignored on encoding; `signature` is written
/// into that slot instead.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelayedAction<T> {
    pub relay_params: RelayParams,
    pub signature: Bytes,
    pub data: T,
}

impl<T> RelayedAction<T> {
    pub fn new(relay_params: RelayParams, signature: Bytes, data: T) -> Self {
        Self {
            relay_params,
            signature,
            data,
        }
    }

    /// Relay params with the action's signature injected.
    pub fn signed_relay_params(&self) -> RelayParams {
        RelayParams {
            signature: self.signature.clone(),
            ..self.relay_params.clone()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SetTraderReferralCode {
    pub referral_code: B256,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deposit {
    pub transfer_requests: TransferRequests,
    pub params: CreateDepositParams,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlvDeposit {
    pub transfer_requests: TransferRequests,
    pub params: CreateGlvDepositParams,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Withdrawal {
    pub transfer_requests: TransferRequests,
    pub params: CreateWithdrawalParams,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlvWithdrawal {
    pub transfer_requests: TransferRequests,
    pub params: CreateGlvWithdrawalParams,
}

/// Direct bridge-out instruction, not relayed.
///
/// A zero `secondary_provider` or empty `secondary_provider_data` means no
/// secondary bridging leg.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BridgeOut {
    pub des_chain_id: U256,
    pub deadline: U256,
    pub provider: Address,
    pub provider_data: Bytes,
    pub min_amount_out: U256,
    pub secondary_provider: Address,
    pub secondary_provider_data: Bytes,
    pub secondary_min_amount_out: U256,
}

impl BridgeOut {
    pub fn has_secondary_provider(&self) -> bool {
        !self.secondary_provider.is_zero() && !self.secondary_provider_data.is_empty()
    }
}

/// Protocol action executed on the settlement chain after a cross-chain transfer.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::IsVariant)]
pub enum MultichainAction {
    SetTraderReferralCode(RelayedAction<SetTraderReferralCode>),
    Deposit(RelayedAction<Deposit>),
    BridgeOut(BridgeOut),
    GlvDeposit(RelayedAction<GlvDeposit>),
    Withdrawal(RelayedAction<Withdrawal>),
    GlvWithdrawal(RelayedAction<GlvWithdrawal>),
}

impl MultichainAction {
    pub fn action_type(&self) -> MultichainActionType {
        match self {
            MultichainAction::SetTraderReferralCode(_) => {
                MultichainActionType::SetTraderReferralCode
            }
            MultichainAction::Deposit(_) => MultichainActionType::Deposit,
            MultichainAction::BridgeOut(_) => MultichainActionType::BridgeOut,
            MultichainAction::GlvDeposit(_) => MultichainActionType::GlvDeposit,
            MultichainAction::Withdrawal(_) => MultichainActionType::Withdrawal,
            MultichainAction::GlvWithdrawal(_) => MultichainActionType::GlvWithdrawal,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, bytes};

    use super::*;

    #[test]
    fn test_action_type_tags() {
        for tag in 0u8..=7 {
            let ty = MultichainActionType::try_from(tag).unwrap();
            assert_eq!(u8::from(ty), tag);
        }
        assert!(matches!(
            MultichainActionType::try_from(8),
            Err(Error::UnsupportedActionType(8))
        ));
        assert!(matches!(
            MultichainActionType::try_from(255),
            Err(Error::UnsupportedActionType(255))
        ));
    }

    #[test]
    fn test_signature_injection() {
        let action = RelayedAction::new(
            RelayParams {
                signature: bytes!("ffff"),
                userNonce: U256::from(3),
                ..Default::default()
            },
            bytes!("00"),
            SetTraderReferralCode::default(),
        );
        let params = action.signed_relay_params();
        assert_eq!(params.signature, bytes!("00"));
        assert_eq!(params.userNonce, U256::from(3));
    }

    #[test]
    fn test_secondary_provider_detection() {
        let mut bridge_out = BridgeOut::default();
        assert!(!bridge_out.has_secondary_provider());

        bridge_out.secondary_provider = address!("0x0000000000000000000000000000000000000001");
        assert!(!bridge_out.has_secondary_provider());

        bridge_out.secondary_provider_data = bytes!("01");
        assert!(bridge_out.has_secondary_provider());

        bridge_out.secondary_provider = Address::ZERO;
        assert!(!bridge_out.has_secondary_provider());
    }
}
