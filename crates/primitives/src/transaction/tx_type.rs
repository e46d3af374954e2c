use crate::EnvelopeError;
use serde::{Deserialize, Serialize};

/// Identifier for legacy transactions.
///
/// Legacy envelopes are technically untyped: this id never appears on the
/// wire, where a legacy transaction is a bare list.
pub const LEGACY_TX_TYPE_ID: u8 = 0;

/// Identifier for EIP-2930 access list transactions.
pub const EIP2930_TX_TYPE_ID: u8 = 1;

/// Identifier for EIP-1559 fee market transactions.
pub const EIP1559_TX_TYPE_ID: u8 = 2;

/// Identifier for EIP-4844 blob transactions.
pub const EIP4844_TX_TYPE_ID: u8 = 3;

/// Transaction Type
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum TxType {
    /// Legacy transaction pre EIP-2718
    #[default]
    Legacy = 0_isize,
    /// AccessList transaction
    Eip2930 = 1_isize,
    /// Transaction with priority fee
    Eip1559 = 2_isize,
    /// Blob transaction
    Eip4844 = 3_isize,
}

impl From<TxType> for u8 {
    fn from(value: TxType) -> Self {
        match value {
            TxType::Legacy => LEGACY_TX_TYPE_ID,
            TxType::Eip2930 => EIP2930_TX_TYPE_ID,
            TxType::Eip1559 => EIP1559_TX_TYPE_ID,
            TxType::Eip4844 => EIP4844_TX_TYPE_ID,
        }
    }
}

impl TryFrom<u8> for TxType {
    type Error = EnvelopeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            LEGACY_TX_TYPE_ID => Ok(TxType::Legacy),
            EIP2930_TX_TYPE_ID => Ok(TxType::Eip2930),
            EIP1559_TX_TYPE_ID => Ok(TxType::Eip1559),
            EIP4844_TX_TYPE_ID => Ok(TxType::Eip4844),
            _ => Err(EnvelopeError::UnexpectedType(value)),
        }
    }
}
