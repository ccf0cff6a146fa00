use alloy::sol;

sol! {
    /// Parameters of an OFT `send`.
    #[derive(Debug, Default, PartialEq, Eq)]
    struct SendParam {
        uint32 dstEid;
        bytes32 to;
        uint256 amountLD;
        uint256 minAmountLD;
        bytes extraOptions;
        bytes composeMsg;
        bytes oftCmd;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct MessagingFee {
        uint256 nativeFee;
        uint256 lzTokenFee;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct MessagingReceipt {
        bytes32 guid;
        uint64 nonce;
        MessagingFee fee;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct OFTLimit {
        uint256 minAmountLD;
        uint256 maxAmountLD;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct OFTFeeDetail {
        int256 feeAmountLD;
        string description;
    }

    #[derive(Debug, Default, PartialEq, Eq)]
    struct OFTReceipt {
        uint256 amountSentLD;
        uint256 amountReceivedLD;
    }

    /// See more:
    ///
    /// <https://github.com/stargate-protocol/stargate-v2/blob/main/packages/stg-evm-v2/src/interfaces/IStargate.sol>
    #[derive(Debug)]
    #[sol(rpc)]
    contract IStargate {
        function token() external view returns (address);
        function quoteOFT(SendParam calldata sendParam)
            external
            view
            returns (OFTLimit memory limit, OFTFeeDetail[] memory oftFeeDetails, OFTReceipt memory receipt);
        function quoteSend(SendParam calldata sendParam, bool payInLzToken)
            external
            view
            returns (MessagingFee memory fee);
        function send(SendParam calldata sendParam, MessagingFee calldata fee, address refundAddress)
            external
            payable
            returns (MessagingReceipt memory msgReceipt, OFTReceipt memory oftReceipt);
    }

    /// Settlement-chain receiver of Stargate transfers. The LayerZero executor
    /// calls `lzCompose` once the tokens have landed.
    #[derive(Debug)]
    #[sol(rpc)]
    contract LayerZeroProvider {
        function lzCompose(
            address from,
            bytes32 guid,
            bytes calldata message,
            address executor,
            bytes calldata extraData
        ) external payable;
    }
}
