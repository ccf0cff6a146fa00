//! Bundled LayerZero and Stargate V2 infrastructure.

use alloy::primitives::{Address, address};

use super::{ChainConfig, ContractName, StargatePool, Token};

pub const ETHEREUM: u64 = 1;
pub const ARBITRUM: u64 = 42161;
pub const AVALANCHE: u64 = 43114;
pub const BASE: u64 = 8453;
pub const SEPOLIA: u64 = 11155111;
pub const ARBITRUM_SEPOLIA: u64 = 421614;

/// LayerZero EndpointV2 on mainnets.
pub const LAYER_ZERO_ENDPOINT_V2: Address = address!("0x1a44076050125825900e736c501f859c50fE728c");
/// LayerZero EndpointV2 on testnets.
pub const LAYER_ZERO_ENDPOINT_V2_TESTNET: Address =
    address!("0x6EDCE65403992e310A62460808c4b910D972f10f");

fn chain(
    chain_id: u64,
    name: &str,
    endpoint_id: u32,
    endpoint: Address,
    is_settlement: bool,
) -> ChainConfig {
    ChainConfig {
        chain_id,
        name: name.to_owned(),
        endpoint_id: Some(endpoint_id),
        is_settlement,
        contracts: [(ContractName::LayerZeroEndpoint, endpoint)].into(),
        stargate_pools: vec![],
        tokens: vec![],
    }
}

fn pool(token: Address, pool: Address) -> StargatePool {
    StargatePool { token, pool }
}

pub(super) fn chains() -> Vec<ChainConfig> {
    let arbitrum_usdc = address!("0xaf88d065e77c8cC2239327C5EDb3A432268e5831");
    let arbitrum_usdt = address!("0xFd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9");
    let arbitrum = ChainConfig {
        tokens: vec![
            Token::native("ETH", 18),
            Token::wrapped(
                "WETH",
                address!("0x82aF49447D8a07e3bd95BD0d56f35241523fBab1"),
                18,
            ),
            Token::erc20("USDC", arbitrum_usdc, 6),
            Token::erc20("USDT", arbitrum_usdt, 6),
        ],
        stargate_pools: vec![
            pool(
                Address::ZERO,
                address!("0xA45B5130f36CDcA45667738e2a258AB09f4A5f7F"),
            ),
            pool(
                arbitrum_usdc,
                address!("0xe8CDF27AcD73a434D661C84887215F7598e7d0d3"),
            ),
            pool(
                arbitrum_usdt,
                address!("0xcE8CcA271Ebc0533920C83d39F417ED6A0abB7D0"),
            ),
        ],
        ..chain(ARBITRUM, "arbitrum", 30110, LAYER_ZERO_ENDPOINT_V2, true)
    };

    let avalanche_usdc = address!("0xB97EF9Ef8734C71904D8002F8b6Bc66Dd9c48a6E");
    let avalanche_usdt = address!("0x9702230A8Ea53601f5cD2dc00fDBc13d4dF4A8c7");
    let avalanche = ChainConfig {
        tokens: vec![
            Token::native("AVAX", 18),
            Token::wrapped(
                "WAVAX",
                address!("0xB31f66AA3C1e785363F0875A1B74E27b85FD66c7"),
                18,
            ),
            Token::erc20("USDC", avalanche_usdc, 6),
            Token::erc20("USDT", avalanche_usdt, 6),
        ],
        stargate_pools: vec![
            pool(
                avalanche_usdc,
                address!("0x5634c4a5FEd09819E3c46D86A965Dd9447d86e47"),
            ),
            pool(
                avalanche_usdt,
                address!("0x12dC9256Acc9895B076f6638D628382881e62CeE"),
            ),
        ],
        ..chain(AVALANCHE, "avalanche", 30106, LAYER_ZERO_ENDPOINT_V2, true)
    };

    let ethereum_usdc = address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
    let ethereum_usdt = address!("0xdAC17F958D2ee523a2206206994597C13D831ec7");
    let ethereum = ChainConfig {
        tokens: vec![
            Token::native("ETH", 18),
            Token::wrapped(
                "WETH",
                address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
                18,
            ),
            Token::erc20("USDC", ethereum_usdc, 6),
            Token::erc20("USDT", ethereum_usdt, 6),
        ],
        stargate_pools: vec![
            pool(
                Address::ZERO,
                address!("0x77b2043768d28E9C9aB44E1aBfC95944bcE57931"),
            ),
            pool(
                ethereum_usdc,
                address!("0xc026395860Db2d07ee33e05fE50ed7bD583189C7"),
            ),
            pool(
                ethereum_usdt,
                address!("0x933597a323Eb81cAe705C5bC29985172fd5A3973"),
            ),
        ],
        ..chain(ETHEREUM, "ethereum", 30101, LAYER_ZERO_ENDPOINT_V2, false)
    };

    let base_usdc = address!("0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913");
    let base = ChainConfig {
        tokens: vec![
            Token::native("ETH", 18),
            Token::wrapped(
                "WETH",
                address!("0x4200000000000000000000000000000000000006"),
                18,
            ),
            Token::erc20("USDC", base_usdc, 6),
        ],
        stargate_pools: vec![
            pool(
                Address::ZERO,
                address!("0xdc181Bd607330aeeBEF6ea62e03e5e1Fb4B6F7C7"),
            ),
            pool(
                base_usdc,
                address!("0x27a16dc786820B16E5c9028b75B99F6f604b5d26"),
            ),
        ],
        ..chain(BASE, "base", 30184, LAYER_ZERO_ENDPOINT_V2, false)
    };

    // testnet pools are deployment specific
    let arbitrum_sepolia = ChainConfig {
        tokens: vec![Token::native("ETH", 18)],
        ..chain(
            ARBITRUM_SEPOLIA,
            "arbitrum-sepolia",
            40231,
            LAYER_ZERO_ENDPOINT_V2_TESTNET,
            true,
        )
    };
    let sepolia = ChainConfig {
        tokens: vec![Token::native("ETH", 18)],
        ..chain(
            SEPOLIA,
            "sepolia",
            40161,
            LAYER_ZERO_ENDPOINT_V2_TESTNET,
            false,
        )
    };

    vec![
        arbitrum,
        avalanche,
        ethereum,
        base,
        arbitrum_sepolia,
        sepolia,
    ]
}
