use crate::{Address, B256};
use alloy_rlp::{RlpDecodable, RlpDecodableWrapper, RlpEncodable, RlpEncodableWrapper};
use serde::{Deserialize, Serialize};

/// A list of addresses and storage keys that the transaction plans to access.
/// Accesses outside the list are possible, but become more expensive.
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize, RlpDecodable, RlpEncodable,
)]
#[serde(rename_all = "camelCase")]
pub struct AccessListItem {
    /// Account address to be loaded at the start of execution
    pub address: Address,
    /// Keys of the account's storage to be loaded at the start of execution
    pub storage_keys: Vec<B256>,
}

/// AccessList as defined in EIP-2930.
///
/// Entries are kept in declared order. Address uniqueness is not enforced
/// here; duplicates are structurally legal and their semantic treatment is an
/// execution layer concern.
#[derive(
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    RlpDecodableWrapper,
    RlpEncodableWrapper,
)]
pub struct AccessList(pub Vec<AccessListItem>);

impl AccessList {
    /// Returns the number of entries in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the list declares no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the list's entries.
    pub fn iter(&self) -> impl Iterator<Item = &AccessListItem> + '_ {
        self.0.iter()
    }
}
