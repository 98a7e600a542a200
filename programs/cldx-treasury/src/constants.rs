//! Program-wide constants.

use anchor_lang::prelude::Pubkey;

/// Seed of the singleton treasury state PDA.
pub const TREASURY_SEED: &[u8] = b"treasury";

/// Seed prefix of treasury-owned token vaults (`[VAULT_SEED, treasury, mint]`).
pub const VAULT_SEED: &[u8] = b"vault";

/// One whole CLDX in base units (18-decimal fixed point).
pub const ONE_CLDX: u128 = 1_000_000_000_000_000_000;

/// Sink for burned CLDX. Never a valid owner, beneficiary or presale address.
pub const BURN_ADDRESS: Pubkey = Pubkey::new_from_array([0u8; 32]);

/// Longest grant accepted by `initialize`, in calendar months. One release unit
/// per month still fits the schedule store.
pub const MAX_VESTING_MONTHS: u8 = 84;

/// Release units each vesting month is split into unless configured otherwise.
pub const DEFAULT_RELEASE_UNITS_PER_MONTH: u8 = 7;

/// Upper bound for `release_units_per_month` (one unit per day).
pub const MAX_RELEASE_UNITS_PER_MONTH: u8 = 31;

/// Caps on the state account's vectors. The whole state is deserialized onto
/// the 32 KiB program heap, which never frees, so these stay small.
pub const MAX_SCHEDULES: usize = 84;
pub const MAX_BLACKLISTED: usize = 64;
pub const MAX_ECO_WALLETS: usize = 64;

/// Most an account may grow within one instruction (`MAX_PERMITTED_DATA_INCREASE`).
pub const MAX_REALLOC_GROWTH: usize = 10_240;

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;
