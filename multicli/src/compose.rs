//! Compose envelope commands.

use std::io::{Write, stdout};

use clap::Args;
use multichain_sdk::{
    Address, Bytes, U256,
    multichain::{codec, oft_codec},
};

/// Encode an OFT compose envelope.
///
/// # Example
///
/// ```bash
/// multicli encode-compose \
///   --src-eid 30184 \
///   --amount-ld 1000000 \
///   --compose-from 0x1a44076050125825900e736c501f859c50fE728c \
///   --msg 0x1234
/// ```
#[derive(Args)]
pub struct EncodeComposeCmd {
    #[arg(long, default_value_t = 0)]
    pub nonce: u64,
    /// LayerZero endpoint id of the source chain.
    #[arg(long)]
    pub src_eid: u32,
    /// Amount in local decimals.
    #[arg(long)]
    pub amount_ld: U256,
    /// Sender of the compose message.
    #[arg(long)]
    pub compose_from: Address,
    /// `0x`-prefixed hex message.
    #[arg(long, default_value = "0x")]
    pub msg: String,
}

impl EncodeComposeCmd {
    pub fn run(self) -> anyhow::Result<()> {
        let compose_msg = codec::encode_compose_msg(self.compose_from, &self.msg)?;
        let envelope = oft_codec::encode(self.nonce, self.src_eid, self.amount_ld, &compose_msg);
        println!("{envelope}");
        Ok(())
    }
}

/// Decode an OFT compose envelope.
///
/// The compose message is further decoded as a deposit message and, if it
/// carries one, as an action envelope.
#[derive(Args)]
pub struct DecodeComposeCmd {
    /// `0x`-prefixed envelope.
    pub envelope: Bytes,
}

impl DecodeComposeCmd {
    pub fn run(self) -> anyhow::Result<()> {
        let msg = oft_codec::OftComposeMsg::parse(&self.envelope)?;

        let mut writer = tabwriter::TabWriter::new(stdout());

        writeln!(&mut writer, "nonce\tsrc eid\tamount ld\tcompose from")?;
        writeln!(
            &mut writer,
            "{}\t{}\t{}\t{}",
            msg.nonce(),
            msg.src_eid(),
            msg.amount_ld(),
            msg.compose_from_address()
        )?;
        writer.flush()?;

        let (account, data) = match codec::decode_deposit_message(msg.compose_msg()) {
            Ok(deposit) => deposit,
            Err(err) => {
                log::warn!("compose message is not a deposit: {err}");
                return Ok(());
            }
        };
        println!("account: {account}");

        if !data.is_empty() {
            let (action_type, action_data) = codec::decode_action_envelope(&data)?;
            println!("action: {action_type}");
            println!("action data: {action_data}");
        }

        Ok(())
    }
}
