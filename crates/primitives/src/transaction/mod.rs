pub use access_list::{AccessList, AccessListItem};
pub use eip1559::TxEip1559;
pub use eip2930::TxEip2930;
pub use eip4844::TxEip4844;
pub use error::EnvelopeError;
pub use legacy::TxLegacy;
pub use tx_type::{
    TxType, EIP1559_TX_TYPE_ID, EIP2930_TX_TYPE_ID, EIP4844_TX_TYPE_ID, LEGACY_TX_TYPE_ID,
};

mod access_list;
mod eip1559;
mod eip2930;
mod eip4844;
mod error;
mod legacy;
mod tx_type;

use crate::{Bytes, ChainId, TxKind, B256, U256};
use alloy_rlp::{BufMut, Decodable, Encodable, Header};
use serde::{Deserialize, Serialize};

/// A decoded Ethereum transaction, one variant per recognized family.
///
/// The set of variants is closed: a value of this type is always one of the
/// four families the protocol accepts, so code matching on it never has to
/// handle an unknown kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transaction {
    /// Untyped transaction from before
    /// [EIP-2718](https://eips.ethereum.org/EIPS/eip-2718) envelopes existed.
    Legacy(TxLegacy),
    /// Access list transaction, type `0x01`.
    Eip2930(TxEip2930),
    /// Fee market transaction, type `0x02`.
    Eip1559(TxEip1559),
    /// Blob transaction, type `0x03`.
    Eip4844(TxEip4844),
}

impl Transaction {
    /// Envelope type of this transaction.
    pub const fn tx_type(&self) -> TxType {
        match self {
            Self::Legacy(_) => TxType::Legacy,
            Self::Eip2930(_) => TxType::Eip2930,
            Self::Eip1559(_) => TxType::Eip1559,
            Self::Eip4844(_) => TxType::Eip4844,
        }
    }

    /// Chain the transaction commits to, if it names one.
    ///
    /// Legacy transactions predate replay protection and carry the chain id,
    /// if any, folded into `v`.
    pub const fn chain_id(&self) -> Option<ChainId> {
        match self {
            Self::Legacy(_) => None,
            Self::Eip2930(tx) => Some(tx.chain_id),
            Self::Eip1559(tx) => Some(tx.chain_id),
            Self::Eip4844(tx) => Some(tx.chain_id),
        }
    }

    /// Sender nonce.
    pub const fn nonce(&self) -> U256 {
        match self {
            Self::Legacy(tx) => tx.nonce,
            Self::Eip2930(tx) => tx.nonce,
            Self::Eip1559(tx) => tx.nonce,
            Self::Eip4844(tx) => tx.nonce,
        }
    }

    /// Gas limit.
    pub const fn gas(&self) -> U256 {
        match self {
            Self::Legacy(tx) => tx.gas,
            Self::Eip2930(tx) => tx.gas,
            Self::Eip1559(tx) => tx.gas,
            Self::Eip4844(tx) => tx.gas,
        }
    }

    /// Recipient of the call, or [`TxKind::Create`] when the transaction
    /// deploys a contract. Blob transactions always call a concrete address.
    pub const fn to(&self) -> TxKind {
        match self {
            Self::Legacy(tx) => tx.to,
            Self::Eip2930(tx) => tx.to,
            Self::Eip1559(tx) => tx.to,
            Self::Eip4844(tx) => TxKind::Call(tx.to),
        }
    }

    /// Amount of wei transferred to the recipient.
    pub const fn value(&self) -> U256 {
        match self {
            Self::Legacy(tx) => tx.value,
            Self::Eip2930(tx) => tx.value,
            Self::Eip1559(tx) => tx.value,
            Self::Eip4844(tx) => tx.value,
        }
    }

    /// Input data of the call.
    pub fn data(&self) -> &Bytes {
        match self {
            Self::Legacy(tx) => &tx.data,
            Self::Eip2930(tx) => &tx.data,
            Self::Eip1559(tx) => &tx.data,
            Self::Eip4844(tx) => &tx.data,
        }
    }

    /// Access list of the transaction, absent for the legacy family.
    pub fn access_list(&self) -> Option<&AccessList> {
        match self {
            Self::Legacy(_) => None,
            Self::Eip2930(tx) => Some(&tx.access_list),
            Self::Eip1559(tx) => Some(&tx.access_list),
            Self::Eip4844(tx) => Some(&tx.access_list),
        }
    }

    /// Versioned hashes of the carried blobs, present only for the blob
    /// family.
    pub fn blob_versioned_hashes(&self) -> Option<&[B256]> {
        match self {
            Self::Eip4844(tx) => Some(tx.blob_versioned_hashes.as_slice()),
            _ => None,
        }
    }
}

impl From<TxLegacy> for Transaction {
    fn from(tx: TxLegacy) -> Self {
        Self::Legacy(tx)
    }
}

impl From<TxEip2930> for Transaction {
    fn from(tx: TxEip2930) -> Self {
        Self::Eip2930(tx)
    }
}

impl From<TxEip1559> for Transaction {
    fn from(tx: TxEip1559) -> Self {
        Self::Eip1559(tx)
    }
}

impl From<TxEip4844> for Transaction {
    fn from(tx: TxEip4844) -> Self {
        Self::Eip4844(tx)
    }
}

/// Wire form of a transaction, as it appears inside a block body or on the
/// network.
///
/// Legacy transactions keep their historical shape, a bare RLP list of
/// fields. Every typed family travels as an opaque byte string whose first
/// byte is the type. The two shapes never collide on the wire: a list header
/// starts at `0xc0` while a recognized type byte stays below `0x80`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionEnvelope {
    /// Untyped legacy transaction, carried directly as its RLP list.
    Legacy(TxLegacy),
    /// Typed transaction, flattened to `type || rlp(fields)`.
    Typed(Bytes),
}

impl TransactionEnvelope {
    /// Bytes of this envelope exactly as they appear on the wire, without
    /// the outer string header a block body adds around typed payloads.
    ///
    /// Hashing these bytes with keccak256 yields the transaction's
    /// [`TxHash`](crate::TxHash).
    pub fn envelope_encoded(&self) -> Bytes {
        match self {
            Self::Legacy(tx) => alloy_rlp::encode(tx).into(),
            Self::Typed(bytes) => bytes.clone(),
        }
    }
}

impl Encodable for TransactionEnvelope {
    fn encode(&self, out: &mut dyn BufMut) {
        match self {
            Self::Legacy(tx) => tx.encode(out),
            Self::Typed(bytes) => bytes.encode(out),
        }
    }

    fn length(&self) -> usize {
        match self {
            Self::Legacy(tx) => tx.length(),
            Self::Typed(bytes) => bytes.length(),
        }
    }
}

impl Decodable for TransactionEnvelope {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        // peek at the header without advancing, the payload keeps it
        let header = Header::decode(&mut &**buf)?;
        if header.list {
            Ok(Self::Legacy(TxLegacy::decode(buf)?))
        } else {
            Ok(Self::Typed(Bytes::decode(buf)?))
        }
    }
}

/// Packs a transaction into the form it travels in on the wire.
///
/// Legacy transactions pass through untouched. Typed transactions are
/// flattened to `type || rlp(fields)` and carried as an opaque byte string.
pub fn encode_transaction(tx: Transaction) -> TransactionEnvelope {
    match tx {
        Transaction::Legacy(tx) => TransactionEnvelope::Legacy(tx),
        Transaction::Eip2930(tx) => {
            TransactionEnvelope::Typed(typed_payload(EIP2930_TX_TYPE_ID, &tx))
        }
        Transaction::Eip1559(tx) => {
            TransactionEnvelope::Typed(typed_payload(EIP1559_TX_TYPE_ID, &tx))
        }
        Transaction::Eip4844(tx) => {
            TransactionEnvelope::Typed(typed_payload(EIP4844_TX_TYPE_ID, &tx))
        }
    }
}

fn typed_payload<T: Encodable>(tx_type: u8, tx: &T) -> Bytes {
    let mut buf = Vec::with_capacity(1 + tx.length());
    buf.push(tx_type);
    tx.encode(&mut buf);
    buf.into()
}

/// Recovers the decoded transaction from its wire form.
///
/// Legacy envelopes already hold the transaction. For typed envelopes the
/// first byte selects the family and the remainder must be exactly the RLP
/// encoding of that family's fields.
///
/// # Errors
///
/// Returns [`EnvelopeError::UnexpectedType`] when the type byte does not name
/// a recognized family, and [`EnvelopeError::Rlp`] when the payload is not a
/// well-formed encoding of the selected family or bytes remain after it.
pub fn decode_transaction(envelope: TransactionEnvelope) -> Result<Transaction, EnvelopeError> {
    match envelope {
        TransactionEnvelope::Legacy(tx) => Ok(Transaction::Legacy(tx)),
        TransactionEnvelope::Typed(bytes) => decode_typed(&bytes),
    }
}

fn decode_typed(bytes: &[u8]) -> Result<Transaction, EnvelopeError> {
    let (tx_type, mut payload) = bytes.split_first().ok_or(alloy_rlp::Error::InputTooShort)?;
    let tx = match *tx_type {
        EIP2930_TX_TYPE_ID => Transaction::Eip2930(TxEip2930::decode(&mut payload)?),
        EIP1559_TX_TYPE_ID => Transaction::Eip1559(TxEip1559::decode(&mut payload)?),
        EIP4844_TX_TYPE_ID => Transaction::Eip4844(TxEip4844::decode(&mut payload)?),
        tx_type => return Err(EnvelopeError::UnexpectedType(tx_type)),
    };
    if !payload.is_empty() {
        return Err(alloy_rlp::Error::UnexpectedLength.into());
    }
    Ok(tx)
}
