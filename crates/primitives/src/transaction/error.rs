/// Represents error variants that can happen when reading a transaction
/// envelope from the wire.
///
/// Both variants mean the enclosing block or message is invalid. There is no
/// partial decode: an envelope either yields a transaction or is rejected.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum EnvelopeError {
    /// The leading byte of a typed envelope matches no known transaction
    /// type. There is no fallback interpretation for such input.
    #[error("unexpected transaction type byte: 0x{0:02x}")]
    UnexpectedType(u8),
    /// The payload is not a canonical field list for the indicated
    /// transaction type: wrong arity, wrong element type, non-canonical
    /// integers or leftover bytes.
    #[error(transparent)]
    Rlp(#[from] alloy_rlp::Error),
}
