//! Commonly used types in billet.
//!
//! This crate contains the Ethereum transaction primitives shared across the
//! workspace: the four transaction variants introduced over protocol upgrades
//! and the [EIP-2718](https://eips.ethereum.org/EIPS/eip-2718) envelope codec
//! mapping them to and from their canonical wire bytes.

#![doc(issue_tracker_base_url = "https://github.com/billet-rs/billet/issues/")]
#![doc(test(
    no_crate_inject,
    attr(deny(warnings, rust_2018_idioms), allow(dead_code, unused_variables))
))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod constants;
mod transaction;

pub use transaction::{
    decode_transaction, encode_transaction, AccessList, AccessListItem, EnvelopeError, Transaction,
    TransactionEnvelope, TxEip1559, TxEip2930, TxEip4844, TxLegacy, TxType, EIP1559_TX_TYPE_ID,
    EIP2930_TX_TYPE_ID, EIP4844_TX_TYPE_ID, LEGACY_TX_TYPE_ID,
};

// Re-export commonly used alloy types.
pub use alloy_primitives::{Address, Bytes, ChainId, TxKind, B256, U256};

/// A transaction hash is the keccak hash of a transaction's envelope bytes.
pub type TxHash = B256;
