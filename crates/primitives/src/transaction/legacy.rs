use crate::{Bytes, TxKind, U256};
use alloy_rlp::{RlpDecodable, RlpEncodable};
use serde::{Deserialize, Serialize};

/// Legacy transaction, the original format predating typed envelopes.
///
/// On the wire a legacy transaction is the bare RLP list of its nine fields
/// with no discriminant byte: the first byte of its envelope is a list header,
/// which is how decoders tell it apart from the typed formats.
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize, RlpEncodable, RlpDecodable,
)]
#[serde(rename_all = "camelCase")]
pub struct TxLegacy {
    /// Number of transactions sent by the sender before this one.
    pub nonce: U256,
    /// Price, in wei, the sender pays per unit of gas.
    pub gas_price: U256,
    /// Maximum amount of gas the transaction may consume.
    pub gas: U256,
    /// Recipient of the call, or the empty marker when the transaction
    /// creates a contract.
    pub to: TxKind,
    /// Amount of wei transferred to the recipient.
    pub value: U256,
    /// Input data of the call, or the initialization code when creating a
    /// contract.
    pub data: Bytes,
    /// Signature recovery value. Carries the chain id for replay protected
    /// transactions (EIP-155).
    pub v: U256,
    /// First half of the ECDSA signature.
    pub r: U256,
    /// Second half of the ECDSA signature.
    pub s: U256,
}
