//! Shared test fixtures: a default-config treasury funded through `MemoryToken`.

use anchor_lang::prelude::*;

use crate::constants::ONE_CLDX;
use crate::ledger::{Ledger, ManualClock, MemoryToken, TreasuryService};
use crate::state::{TreasuryConfig, TreasuryState};

/// 2026-01-01T00:00:00Z.
pub const START: i64 = 1_767_225_600;

pub fn key(n: u8) -> Pubkey {
    Pubkey::new_from_array([n; 32])
}

pub fn owner() -> Pubkey {
    key(1)
}

pub fn treasury() -> Pubkey {
    key(2)
}

pub fn beneficiary() -> Pubkey {
    key(3)
}

pub fn cldx_mint() -> Pubkey {
    key(4)
}

pub fn eco_mint() -> Pubkey {
    key(5)
}

pub fn presale() -> Pubkey {
    key(6)
}

pub fn native_mint() -> Pubkey {
    key(7)
}

pub fn alice() -> Pubkey {
    key(10)
}

pub fn bob() -> Pubkey {
    key(11)
}

pub fn tokens(n: u128) -> u128 {
    n * ONE_CLDX
}

pub fn new_state() -> TreasuryState {
    new_state_with(TreasuryConfig::default())
}

pub fn new_state_with(config: TreasuryConfig) -> TreasuryState {
    TreasuryState::new(
        owner(),
        treasury(),
        beneficiary(),
        cldx_mint(),
        eco_mint(),
        255,
        config,
    )
    .unwrap()
}

pub fn cldx() -> MemoryToken {
    MemoryToken::new(cldx_mint(), treasury())
}

pub fn eco() -> MemoryToken {
    MemoryToken::new(eco_mint(), treasury())
}

/// CLDX token with `amount` already held by the treasury.
pub fn funded_cldx(amount: u128) -> MemoryToken {
    let mut t = cldx();
    t.mint_to(&treasury(), amount).unwrap();
    t
}

pub fn ledger(treasury_cldx: u128) -> Ledger<MemoryToken> {
    Ledger::new(
        new_state(),
        funded_cldx(treasury_cldx),
        eco(),
        MemoryToken::new(native_mint(), treasury()),
    )
}

pub fn service(treasury_cldx: u128) -> TreasuryService<MemoryToken, ManualClock> {
    TreasuryService::new(ledger(treasury_cldx), ManualClock::new(START))
}
