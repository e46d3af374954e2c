//! Gas cost constants consumed by fee calculation.
//!
//! These are exported values only; intrinsic gas accounting itself happens in
//! the execution layer.

/// Base gas charged for every transaction, before any calldata or execution
/// costs.
pub const TX_BASE_COST: u64 = 21_000;

/// Gas charged per calldata token under the standard schedule.
///
/// A zero byte counts as one token, a non-zero byte as four.
pub const STANDARD_TOKEN_COST: u64 = 4;

/// Minimum gas charged per calldata token, applied when the floor exceeds the
/// standard schedule ([EIP-7623](https://eips.ethereum.org/EIPS/eip-7623)).
pub const TOTAL_COST_FLOOR_PER_TOKEN: u64 = 12;

/// Additional gas charged for transactions that create a contract.
pub const TX_CREATE_COST: u64 = 32_000;

/// Gas charged per address declared in the access list.
pub const TX_ACCESS_LIST_ADDRESS_COST: u64 = 2_400;

/// Gas charged per storage key declared in the access list.
pub const TX_ACCESS_LIST_STORAGE_KEY_COST: u64 = 1_900;
