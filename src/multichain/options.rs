//! LayerZero executor options and Stargate OFT commands.

use alloy::primitives::Bytes;

/// Options format version.
const TYPE_3: u16 = 3;

const EXECUTOR_WORKER_ID: u8 = 1;

const OPTION_TYPE_LZ_RECEIVE: u8 = 1;
const OPTION_TYPE_LZ_COMPOSE: u8 = 3;

/// Builder of type 3 LayerZero message options.
///
/// Each option is serialized as
/// `[workerId: u8][size: u16][optionType: u8][option]` where `size` counts the
/// option type byte plus the option body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutorOptions {
    buf: Vec<u8>,
}

impl Default for ExecutorOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutorOptions {
    pub fn new() -> Self {
        Self {
            buf: TYPE_3.to_be_bytes().to_vec(),
        }
    }

    /// Gas (and optional native value) for the destination `lzReceive`.
    pub fn add_executor_lz_receive_option(self, gas: u128, value: u128) -> Self {
        let mut option = gas.to_be_bytes().to_vec();
        if value != 0 {
            option.extend_from_slice(&value.to_be_bytes());
        }
        self.push(OPTION_TYPE_LZ_RECEIVE, &option)
    }

    /// Gas (and optional native value) reserved for the compose call at `index`.
    pub fn add_executor_compose_option(self, index: u16, gas: u128, value: u128) -> Self {
        let mut option = index.to_be_bytes().to_vec();
        option.extend_from_slice(&gas.to_be_bytes());
        if value != 0 {
            option.extend_from_slice(&value.to_be_bytes());
        }
        self.push(OPTION_TYPE_LZ_COMPOSE, &option)
    }

    fn push(mut self, option_type: u8, option: &[u8]) -> Self {
        // option bodies are at most 34 bytes
        let size = (option.len() + 1) as u16;
        self.buf.push(EXECUTOR_WORKER_ID);
        self.buf.extend_from_slice(&size.to_be_bytes());
        self.buf.push(option_type);
        self.buf.extend_from_slice(option);
        self
    }

    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(&self.buf)
    }
}

/// Stargate transfer mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum OftCmd {
    /// Immediate delivery, paid by the sender alone.
    #[default]
    Taxi,
    /// Batched delivery sharing the messaging cost with other passengers.
    Bus,
}

impl OftCmd {
    pub fn to_bytes(self) -> Bytes {
        match self {
            OftCmd::Taxi => Bytes::new(),
            OftCmd::Bus => Bytes::from_static(&[0]),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::hex;

    use super::*;

    #[test]
    fn test_compose_option() {
        let options = ExecutorOptions::new()
            .add_executor_compose_option(0, 500_000, 0)
            .to_bytes();
        assert_eq!(
            &options[..],
            &hex!("00030100130300000000000000000000000000000007a120")
        );
    }

    #[test]
    fn test_lz_receive_option_with_value() {
        let options = ExecutorOptions::new()
            .add_executor_lz_receive_option(200_000, 1)
            .to_bytes();
        assert_eq!(options.len(), 2 + 1 + 2 + 1 + 32);
        assert_eq!(&options[..6], &hex!("000301002101"));
        assert_eq!(options[options.len() - 1], 1);
    }

    #[test]
    fn test_empty_options() {
        assert_eq!(&ExecutorOptions::default().to_bytes()[..], &hex!("0003"));
    }

    #[test]
    fn test_oft_cmd() {
        assert!(OftCmd::default().is_taxi());
        assert!(OftCmd::Taxi.to_bytes().is_empty());
        assert_eq!(OftCmd::Bus.to_bytes().len(), 1);
    }
}
