use crate::{AccessList, Bytes, ChainId, TxKind, U256};
use alloy_rlp::{RlpDecodable, RlpEncodable};
use serde::{Deserialize, Serialize};

/// Transaction with an access list
/// ([EIP-2930](https://eips.ethereum.org/EIPS/eip-2930)).
///
/// Wire envelope: `0x01 || rlp(fields)`.
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize, RlpEncodable, RlpDecodable,
)]
#[serde(rename_all = "camelCase")]
pub struct TxEip2930 {
    /// Chain this transaction is valid on.
    pub chain_id: ChainId,
    /// Sender nonce.
    pub nonce: U256,
    /// Price, in wei, the sender pays per unit of gas.
    pub gas_price: U256,
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
