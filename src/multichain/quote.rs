//! Stargate pool quotes.

use alloy::{
    primitives::{Address, U256},
    providers::Provider,
};
use rust_decimal::Decimal;

use super::{
    MultichainAction,
    contracts::{IStargate, MessagingFee, OFTFeeDetail, OFTLimit, OFTReceipt, SendParam},
    gas::{DepositComposeGas, GasLimitBuffer, estimate_deposit_compose_gas},
    send_params::{MultichainTransfer, transfer_send_params},
};
use crate::{Result, config::Registry};

/// Result of `quoteOFT`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OftQuote {
    pub limit: OFTLimit,
    pub fee_details: Vec<OFTFeeDetail>,
    pub receipt: OFTReceipt,
}

/// Read-only client of a Stargate V2 pool.
pub struct StargateClient<P> {
    instance: IStargate::IStargateInstance<P>,
}

impl<P: Provider> StargateClient<P> {
    pub fn new(pool: Address, provider: P) -> Self {
        Self {
            instance: IStargate::new(pool, provider),
        }
    }

    /// Client of the pool moving `token` on `chain_id`. Wrapped native tokens
    /// resolve to the native pool.
    pub fn from_registry<R: Registry + ?Sized>(
        registry: &R,
        chain_id: u64,
        token: Address,
        provider: P,
    ) -> Result<Self> {
        let token = registry.unwrapped_token_address(chain_id, token)?;
        let pool = registry.stargate_pool(chain_id, token)?;
        Ok(Self::new(pool, provider))
    }

    pub fn pool(&self) -> Address {
        *self.instance.address()
    }

    /// Token moved by the pool, zero for native pools.
    pub async fn token(&self) -> Result<Address> {
        Ok(self.instance.token().call().await?)
    }

    /// Transfer limits, fees and the amount received on the destination.
    pub async fn quote_oft(&self, send_param: &SendParam) -> Result<OftQuote> {
        let quote = self.instance.quoteOFT(send_param.clone()).call().await?;
        Ok(OftQuote {
            limit: quote.limit,
            fee_details: quote.oftFeeDetails,
            receipt: quote.receipt,
        })
    }

    /// Messaging fee to attach to `send`.
    pub async fn quote_send(
        &self,
        send_param: &SendParam,
        pay_in_lz_token: bool,
    ) -> Result<MessagingFee> {
        Ok(self
            .instance
            .quoteSend(send_param.clone(), pay_in_lz_token)
            .call()
            .await?)
    }
}

/// Converts a native fee in wei into USD.
///
/// Returns `None` if the fee doesn't fit a [`Decimal`].
pub fn native_fee_usd(native_fee: U256, decimals: u8, price_usd: Decimal) -> Option<Decimal> {
    let mantissa = i128::try_from(native_fee).ok()?;
    let fee = Decimal::try_from_i128_with_scale(mantissa, decimals.into()).ok()?;
    fee.checked_mul(price_usd)
}

/// A deposit from a source chain into the settlement chain.
#[derive(Clone, Debug)]
pub struct DepositQuoteRequest {
    pub src_chain_id: u64,
    /// Token sent, as known on the source chain.
    pub src_token: Address,
    pub settlement_chain_id: u64,
    /// Same token, as known on the settlement chain.
    pub settlement_token: Address,
    pub account: Address,
    pub amount_ld: U256,
    pub action: Option<MultichainAction>,
}

/// Everything needed to submit a deposit through Stargate.
#[derive(Clone, Debug)]
pub struct DepositQuote {
    pub pool: Address,
    pub compose_gas: u64,
    pub send_param: SendParam,
    pub fee: MessagingFee,
}

/// Estimates the compose gas on the settlement chain, builds the send
/// parameters and quotes the messaging fee on the source chain.
pub async fn quote_deposit<S, D, R>(
    src_provider: S,
    settlement_provider: &D,
    registry: &R,
    request: &DepositQuoteRequest,
    buffer: GasLimitBuffer,
) -> Result<DepositQuote>
where
    S: Provider,
    D: Provider,
    R: Registry + ?Sized,
{
    let client = StargateClient::from_registry(
        registry,
        request.src_chain_id,
        request.src_token,
        src_provider,
    )?;

    let compose_gas = estimate_deposit_compose_gas(
        settlement_provider,
        registry,
        &DepositComposeGas {
            chain_id: request.settlement_chain_id,
            src_chain_id: request.src_chain_id,
            account: request.account,
            token: request.settlement_token,
            action: request.action.clone(),
        },
        buffer,
    )
    .await?;

    let mut transfer = MultichainTransfer::deposit(
        request.settlement_chain_id,
        request.account,
        request.amount_ld,
        compose_gas,
    )
    .with_src_chain_id(request.src_chain_id);
    transfer.action = request.action.clone();
    let send_param = transfer_send_params(registry, &transfer)?;

    let fee = client.quote_send(&send_param, false).await?;
    log::info!(
        "deposit quote via pool {}: compose gas {compose_gas}, native fee {}",
        client.pool(),
        fee.nativeFee
    );

    Ok(DepositQuote {
        pool: client.pool(),
        compose_gas,
        send_param,
        fee,
    })
}

#[cfg(test)]
mod tests {
    use alloy::{
        primitives::{Bytes, I256, U64, address},
        providers::ProviderBuilder,
        sol_types::SolValue,
        transports::mock::Asserter,
    };
    use rust_decimal::dec;

    use super::*;
    use crate::{
        config::{ARBITRUM, BASE, ContractName, StaticRegistry},
        multichain::{ExecutorOptions, oft_codec},
    };

    const ACCOUNT: Address = address!("0x0D1d9635D0640821d15e323ac8AdADfA9c111414");
    const PROVIDER: Address = address!("0x00000000000000000000000000000000000000aa");
    const BASE_USDC: Address = address!("0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913");
    const ARBITRUM_USDC: Address = address!("0xaf88d065e77c8cC2239327C5EDb3A432268e5831");

    fn registry() -> StaticRegistry {
        StaticRegistry::builtin().with_contract(ARBITRUM, ContractName::LayerZeroProvider, PROVIDER)
    }

    #[test]
    fn test_native_fee_usd() {
        // 0.001 ETH at 2500 USD
        let fee = U256::from(1_000_000_000_000_000u64);
        assert_eq!(native_fee_usd(fee, 18, dec!(2500)), Some(dec!(2.5)));
        assert_eq!(native_fee_usd(U256::ZERO, 18, dec!(2500)), Some(Decimal::ZERO));
        assert_eq!(native_fee_usd(U256::MAX, 18, dec!(2500)), None);
    }

    #[test]
    fn test_client_from_registry() {
        let asserter = Asserter::new();
        let provider = ProviderBuilder::new().connect_mocked_client(asserter);

        let client = StargateClient::from_registry(
            &registry(),
            BASE,
            address!("0x4200000000000000000000000000000000000006"),
            provider,
        )
        .unwrap();
        assert_eq!(
            client.pool(),
            address!("0xdc181Bd607330aeeBEF6ea62e03e5e1Fb4B6F7C7")
        );
    }

    #[tokio::test]
    async fn test_quote_oft() {
        let asserter = Asserter::new();
        let provider = ProviderBuilder::new().connect_mocked_client(asserter.clone());
        let client = StargateClient::new(
            address!("0x27a16dc786820B16E5c9028b75B99F6f604b5d26"),
            provider,
        );

        let limit = OFTLimit {
            minAmountLD: U256::from(1),
            maxAmountLD: U256::from(1_000_000_000u64),
        };
        let details = vec![OFTFeeDetail {
            feeAmountLD: I256::try_from(-600i64).unwrap(),
            description: "reward".to_owned(),
        }];
        let receipt = OFTReceipt {
            amountSentLD: U256::from(1_000_000),
            amountReceivedLD: U256::from(999_400),
        };
        asserter.push_success(&Bytes::from(
            (limit.clone(), details.clone(), receipt.clone()).abi_encode_params(),
        ));

        let quote = client.quote_oft(&SendParam::default()).await.unwrap();
        assert_eq!(quote.limit, limit);
        assert_eq!(quote.fee_details, details);
        assert_eq!(quote.receipt, receipt);
    }

    #[tokio::test]
    async fn test_quote_deposit() {
        let settlement = Asserter::new();
        settlement.push_success(&U64::from(300_000));
        let source = Asserter::new();
        source.push_success(&Bytes::from(
            MessagingFee {
                nativeFee: U256::from(42),
                lzTokenFee: U256::ZERO,
            }
            .abi_encode(),
        ));

        let request = DepositQuoteRequest {
            src_chain_id: BASE,
            src_token: BASE_USDC,
            settlement_chain_id: ARBITRUM,
            settlement_token: ARBITRUM_USDC,
            account: ACCOUNT,
            amount_ld: U256::from(5_000_000),
            action: None,
        };
        let quote = quote_deposit(
            ProviderBuilder::new().connect_mocked_client(source),
            &ProviderBuilder::new().connect_mocked_client(settlement),
            &registry(),
            &request,
            GasLimitBuffer::default(),
        )
        .await
        .unwrap();

        assert_eq!(
            quote.pool,
            address!("0x27a16dc786820B16E5c9028b75B99F6f604b5d26")
        );
        assert_eq!(quote.compose_gas, 330_000);
        assert_eq!(quote.fee.nativeFee, U256::from(42));
        assert_eq!(quote.send_param.dstEid, 30110);
        assert_eq!(oft_codec::bytes32_to_address(quote.send_param.to), PROVIDER);
        assert_eq!(quote.send_param.amountLD, U256::from(5_000_000));
        assert_eq!(
            quote.send_param.extraOptions,
            ExecutorOptions::new()
                .add_executor_compose_option(0, 330_000, 0)
                .to_bytes()
        );
    }
}
