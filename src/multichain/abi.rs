//! ABI tuple schemas of the multichain action payloads.
//!
//! These mirror the Solidity structs the settlement chain decodes compose
//! messages with, so field order and types are part of the wire protocol.

use alloy::sol;

sol! {
    /// Oracle price parameters. All three arrays have the same length.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct OracleParams {
        address[] tokens;
        address[] providers;
        bytes[] data;
    }

    /// External call batch executed before the relayed action.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct ExternalCalls {
        address[] sendTokens;
        uint256[] sendAmounts;
        address[] externalCallTargets;
        bytes[] externalCallDataList;
        address[] refundTokens;
        address[] refundReceivers;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct TokenPermit {
        address owner;
        address spender;
        uint256 value;
        uint256 deadline;
        address token;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct FeeParams {
        address feeToken;
        uint256 feeAmount;
        address[] feeSwapPath;
    }

    /// Signed bundle allowing a relayer to submit an action on the user's behalf.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct RelayParams {
        OracleParams oracleParams;
        ExternalCalls externalCalls;
        TokenPermit[] tokenPermits;
        FeeParams fee;
        uint256 userNonce;
        uint256 deadline;
        bytes signature;
        uint256 desChainId;
    }

    /// Cross-chain transfer legs, one per index.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct TransferRequests {
        address[] tokens;
        address[] receivers;
        uint256[] amounts;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct CreateDepositParamsAddresses {
        address receiver;
        address callbackContract;
        address uiFeeReceiver;
        address market;
        address initialLongToken;
        address initialShortToken;
        address[] longTokenSwapPath;
        address[] shortTokenSwapPath;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct CreateDepositParams {
        CreateDepositParamsAddresses addresses;
        uint256 minMarketTokens;
        bool shouldUnwrapNativeToken;
        uint256 executionFee;
        uint256 callbackGasLimit;
        bytes32[] dataList;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct CreateWithdrawalParamsAddresses {
        address receiver;
        address callbackContract;
        address uiFeeReceiver;
        address market;
        address[] longTokenSwapPath;
        address[] shortTokenSwapPath;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct CreateWithdrawalParams {
        CreateWithdrawalParamsAddresses addresses;
        uint256 minLongTokenAmount;
        uint256 minShortTokenAmount;
        bool shouldUnwrapNativeToken;
        uint256 executionFee;
        uint256 callbackGasLimit;
        bytes32[] dataList;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct CreateGlvDepositParamsAddresses {
        address glv;
        address market;
        address receiver;
        address callbackContract;
        address uiFeeReceiver;
        address initialLongToken;
        address initialShortToken;
        address[] longTokenSwapPath;
        address[] shortTokenSwapPath;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct CreateGlvDepositParams {
        CreateGlvDepositParamsAddresses addresses;
        uint256 minGlvTokens;
        uint256 executionFee;
        uint256 callbackGasLimit;
        bool shouldUnwrapNativeToken;
        bool isMarketTokenDeposit;
        bytes32[] dataList;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct CreateGlvWithdrawalParamsAddresses {
        address receiver;
        address callbackContract;
        address uiFeeReceiver;
        address market;
        address glv;
        address[] longTokenSwapPath;
        address[] shortTokenSwapPath;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct CreateGlvWithdrawalParams {
        CreateGlvWithdrawalParamsAddresses addresses;
        uint256 minLongTokenAmount;
        uint256 minShortTokenAmount;
        bool shouldUnwrapNativeToken;
        uint256 executionFee;
        uint256 callbackGasLimit;
        bytes32[] dataList;
    }

    /// Long form of a bridge-out instruction, used when a secondary provider
    /// is configured.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct BridgeOutParams {
        uint256 desChainId;
        uint256 deadline;
        address provider;
        bytes providerData;
        uint256 minAmountOut;
        address secondaryProvider;
        bytes secondaryProviderData;
        uint256 secondaryMinAmountOut;
    }
}
