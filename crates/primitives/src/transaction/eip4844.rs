use crate::{AccessList, Address, Bytes, ChainId, B256, U256};
use alloy_rlp::{RlpDecodable, RlpEncodable};
use serde::{Deserialize, Serialize};

/// Blob transaction
/// ([EIP-4844](https://eips.ethereum.org/EIPS/eip-4844)).
///
/// Carries commitments to blob data that travels outside the envelope. Blob
/// transactions always name a concrete recipient: `to` is an [`Address`]
/// rather than a create-capable kind, so contract creation is
/// unrepresentable. Wire envelope: `0x03 || rlp(fields)`.
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize, RlpEncodable, RlpDecodable,
)]
#[serde(rename_all = "camelCase")]
pub struct TxEip4844 {
    /// Chain this transaction is valid on.
    pub chain_id: ChainId,
    /// Sender nonce.
    pub nonce: U256,
    /// Maximum tip, in wei per unit of gas, paid to the block producer on top
    /// of the base fee.
    pub max_priority_fee_per_gas: U256,
    /// Maximum total price, in wei per unit of gas, the sender is willing to
    /// pay.
    pub max_fee_per_gas: U256,
    /// Gas limit.
    pub gas: U256,
    /// Recipient of the call.
    pub to: Address,
    /// Amount of wei transferred to the recipient.
    pub value: U256,
    /// Input data of the call.
    pub data: Bytes,
    /// Addresses and storage keys the transaction plans to access.
    pub access_list: AccessList,
    /// Maximum price, in wei per unit of blob gas, the sender is willing to
    /// pay for the carried blobs.
    pub max_fee_per_blob_gas: U256,
    /// Versioned hashes committing to the blobs of this transaction.
    pub blob_versioned_hashes: Vec<B256>,
    /// Parity of the y value of the signature.
    pub y_parity: U256,
    /// First half of the ECDSA signature.
    pub r: U256,
    /// Second half of the ECDSA signature.
    pub s: U256,
}
