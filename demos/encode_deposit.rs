//! Encode the compose envelope of a deposit that also sets a referral code.
//!
//! This example builds the message the settlement chain's `LayerZeroProvider`
//! receives in `lzCompose` once a Stargate transfer has landed, then decodes
//! it back field by field. No RPC access is needed.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example encode_deposit -- --account <ADDRESS> --referral-code abc
//! ```

use clap::Parser;
use multichain_sdk::{
    Address, B256, U256,
    config::{ARBITRUM, BASE, Registry, StaticRegistry},
    multichain::{
        MultichainAction, RelayedAction, SetTraderReferralCode, abi::RelayParams, codec,
        compose_deposit_message, encode_multichain_action_data, oft_codec,
    },
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Account credited on the settlement chain.
    #[arg(long)]
    account: Address,
    /// Referral code, at most 32 bytes.
    #[arg(long, default_value = "")]
    referral_code: String,
    /// Amount in local decimals.
    #[arg(long, default_value_t = U256::from(1_000_000))]
    amount_ld: U256,
}

fn main() -> anyhow::Result<()> {
    let _ = simple_logger::init_with_level(log::Level::Debug);

    let args = Cli::parse();
    let registry = StaticRegistry::builtin();

    let code = args.referral_code.as_bytes();
    anyhow::ensure!(code.len() <= 32, "referral code longer than 32 bytes");
    let mut referral_code = B256::ZERO;
    referral_code[..code.len()].copy_from_slice(code);

    let action = MultichainAction::SetTraderReferralCode(RelayedAction::new(
        RelayParams {
            desChainId: U256::from(ARBITRUM),
            ..Default::default()
        },
        Default::default(),
        SetTraderReferralCode { referral_code },
    ));
    let data = encode_multichain_action_data(&action);
    let compose_msg = compose_deposit_message(&registry, ARBITRUM, args.account, Some(&data))?;

    let src_eid = registry.layer_zero_endpoint_id(BASE)?;
    let envelope = oft_codec::encode(1, src_eid, args.amount_ld, &compose_msg);
    println!("envelope: {envelope}");
    println!();

    let msg = oft_codec::OftComposeMsg::parse(&envelope)?;
    println!("nonce: {}", msg.nonce());
    println!("src eid: {}", msg.src_eid());
    println!("amount: {}", msg.amount_ld());
    println!("compose from: {}", msg.compose_from_address());

    let (account, data) = codec::decode_deposit_message(msg.compose_msg())?;
    let (action_type, _) = codec::decode_action_envelope(&data)?;
    println!("account: {account}");
    println!("action: {action_type}");

    Ok(())
}
