//! LayerZero OFT compose message envelope.
//!
//! The envelope is packed big-endian with fixed offsets; the receiving
//! contract decodes it by slicing, never by a self-describing format:
//!
//! | field         | offset | width     |
//! |---------------|--------|-----------|
//! | `nonce`       | 0      | 8         |
//! | `srcEid`      | 8      | 4         |
//! | `amountLD`    | 12     | 32        |
//! | `composeFrom` | 44     | 32        |
//! | `composeMsg`  | 76     | remainder |
//!
//! [`encode`] takes the compose message *including* its `composeFrom` prefix,
//! as produced by [`crate::multichain::codec::encode_compose_msg`].
//!
//! The unchecked accessors ([`nonce`], [`src_eid`], ...) panic when the input
//! is shorter than the field they read. Use [`OftComposeMsg::parse`] for
//! untrusted input.

use alloy::primitives::{Address, B256, Bytes, U256};

use crate::{Error, Result};

pub const NONCE_OFFSET: usize = 0;
pub const NONCE_LEN: usize = 8;
pub const SRC_EID_OFFSET: usize = 8;
pub const SRC_EID_LEN: usize = 4;
pub const AMOUNT_LD_OFFSET: usize = 12;
pub const AMOUNT_LD_LEN: usize = 32;
pub const COMPOSE_FROM_OFFSET: usize = 44;
pub const COMPOSE_FROM_LEN: usize = 32;
pub const COMPOSE_MSG_OFFSET: usize = 76;

/// Minimum length of a well-formed envelope.
pub const MIN_LEN: usize = COMPOSE_MSG_OFFSET;

/// Packs a compose envelope.
///
/// `compose_msg` is `[composeFrom (32 bytes)][payload]`.
pub fn encode(nonce: u64, src_eid: u32, amount_ld: U256, compose_msg: &[u8]) -> Bytes {
    let mut out = Vec::with_capacity(COMPOSE_FROM_OFFSET + compose_msg.len());
    out.extend_from_slice(&nonce.to_be_bytes());
    out.extend_from_slice(&src_eid.to_be_bytes());
    out.extend_from_slice(&amount_ld.to_be_bytes::<32>());
    out.extend_from_slice(compose_msg);
    out.into()
}

#[inline]
fn field<const N: usize>(msg: &[u8], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(&msg[offset..offset + N]);
    out
}

/// Nonce of the originating OFT message.
pub fn nonce(msg: &[u8]) -> u64 {
    u64::from_be_bytes(field::<NONCE_LEN>(msg, NONCE_OFFSET))
}

/// LayerZero endpoint id of the source chain.
pub fn src_eid(msg: &[u8]) -> u32 {
    u32::from_be_bytes(field::<SRC_EID_LEN>(msg, SRC_EID_OFFSET))
}

/// Amount in local decimals credited on the destination chain.
pub fn amount_ld(msg: &[u8]) -> U256 {
    U256::from_be_bytes(field::<AMOUNT_LD_LEN>(msg, AMOUNT_LD_OFFSET))
}

/// Sender of the compose message, as a 32 byte word.
pub fn compose_from(msg: &[u8]) -> B256 {
    B256::from(field::<COMPOSE_FROM_LEN>(msg, COMPOSE_FROM_OFFSET))
}

/// Payload following `composeFrom`.
pub fn compose_msg(msg: &[u8]) -> &[u8] {
    &msg[COMPOSE_MSG_OFFSET..]
}

/// Left-pads an address into a 32 byte word.
pub fn address_to_bytes32(address: Address) -> B256 {
    address.into_word()
}

/// Takes the low 20 bytes of a word as an address.
pub fn bytes32_to_address(word: B256) -> Address {
    Address::from_word(word)
}

/// Length-checked view over an encoded compose envelope.
#[derive(Clone, Copy, Debug)]
pub struct OftComposeMsg<'a> {
    raw: &'a [u8],
}

impl<'a> OftComposeMsg<'a> {
    /// Wraps `raw`, failing if it can't hold the fixed-size header.
    pub fn parse(raw: &'a [u8]) -> Result<Self> {
        if raw.len() < MIN_LEN {
            return Err(Error::MessageTooShort {
                len: raw.len(),
                min: MIN_LEN,
            });
        }
        Ok(Self { raw })
    }

    pub fn nonce(&self) -> u64 {
        nonce(self.raw)
    }

    pub fn src_eid(&self) -> u32 {
        src_eid(self.raw)
    }

    pub fn amount_ld(&self) -> U256 {
        amount_ld(self.raw)
    }

    pub fn compose_from(&self) -> B256 {
        compose_from(self.raw)
    }

    /// `composeFrom` as an address.
    pub fn compose_from_address(&self) -> Address {
        bytes32_to_address(self.compose_from())
    }

    pub fn compose_msg(&self) -> &'a [u8] {
        compose_msg(self.raw)
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.raw
    }
}
