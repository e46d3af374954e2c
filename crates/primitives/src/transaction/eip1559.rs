use crate::{AccessList, Bytes, ChainId, TxKind, U256};
use alloy_rlp::{RlpDecodable, RlpEncodable};
use serde::{Deserialize, Serialize};

/// Fee market transaction
/// ([EIP-1559](https://eips.ethereum.org/EIPS/eip-1559)).
///
/// Replaces the single `gas_price` of earlier formats with a fee cap and a
/// priority fee. Wire envelope: `0x02 || rlp(fields)`.
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize, RlpEncodable, RlpDecodable,
)]
#[serde(rename_all = "camelCase")]
pub struct TxEip1559 {
    /// Chain this transaction is valid on.
    pub chain_id: ChainId,
    /// Sender nonce.
    pub nonce: U256,
    /// Maximum tip, in wei per unit of gas, paid to the block producer on top
    /// of the base fee.
    pub max_priority_fee_per_gas: U256,
    /// Maximum total price, in wei per unit of gas, the sender is willing to
    /// pay; covers base fee and priority fee.
    pub max_fee_per_gas: U256,
    /// Gas limit.
    pub gas: U256,
    /// Recipient of the call, or the empty marker when the transaction
    /// creates a contract.
    pub to: TxKind,
    /// Amount of wei transferred to the recipient.
    pub value: U256,
    /// Input data of the call.
    pub data: Bytes,
    /// Addresses and storage keys the transaction plans to access.
    pub access_list: AccessList,
    /// Parity of the y value of the signature.
    pub y_parity: U256,
    /// First half of the ECDSA signature.
    pub r: U256,
    /// Second half of the ECDSA signature.
    pub s: U256,
}
