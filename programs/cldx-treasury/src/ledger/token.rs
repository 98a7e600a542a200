use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use crate::error::TreasuryError;

/// Fungible token as seen by the ledger.
///
/// `transfer` always moves funds out of the ledger's own principal;
/// `transfer_from` moves funds out of `from` under that holder's authority.
/// A returned `false` means the token refused the movement.
pub trait TokenService {
    fn mint(&self) -> Pubkey;
    fn balance_of(&self, account: &Pubkey) -> Result<u128>;
    fn transfer(&mut self, to: &Pubkey, amount: u128) -> Result<bool>;
    fn transfer_from(&mut self, from: &Pubkey, to: &Pubkey, amount: u128) -> Result<bool>;
}

/// Surfaces a refused token movement as `TransferFailed`.
pub fn ensure_transferred(moved: bool) -> Result<()> {
    require!(moved, TreasuryError::TransferFailed);
    Ok(())
}

/// Balance-map token used off chain and in tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryToken {
    mint: Pubkey,
    holder: Pubkey,
    balances: BTreeMap<Pubkey, u128>,
    frozen: bool,
}

impl MemoryToken {
    /// `holder` is the principal `transfer` debits (the treasury).
    pub fn new(mint: Pubkey, holder: Pubkey) -> Self {
        Self {
            mint,
            holder,
            balances: BTreeMap::new(),
            frozen: false,
        }
    }

    pub fn mint_to(&mut self, to: &Pubkey, amount: u128) -> Result<()> {
        let balance = self.balances.entry(*to).or_default();
        *balance = balance
            .checked_add(amount)
            .ok_or(TreasuryError::MathOverflow)?;
        Ok(())
    }

    /// A frozen token refuses every movement.
    pub fn set_frozen(&mut self, frozen: bool) {
        self.frozen = frozen;
    }

    pub fn total_supply(&self) -> u128 {
        self.balances.values().sum()
    }

    fn move_balance(&mut self, from: &Pubkey, to: &Pubkey, amount: u128) -> Result<bool> {
        let available = self.balances.get(from).copied().unwrap_or(0);
        if self.frozen || available < amount {
            return Ok(false);
        }
        self.balances.insert(*from, available - amount);
        self.mint_to(to, amount)?;
        Ok(true)
    }
}

impl TokenService for MemoryToken {
    fn mint(&self) -> Pubkey {
        self.mint
    }

    fn balance_of(&self, account: &Pubkey) -> Result<u128> {
        Ok(self.balances.get(account).copied().unwrap_or(0))
    }

    fn transfer(&mut self, to: &Pubkey, amount: u128) -> Result<bool> {
        let holder = self.holder;
        self.move_balance(&holder, to, amount)
    }

    fn transfer_from(&mut self, from: &Pubkey, to: &Pubkey, amount: u128) -> Result<bool> {
        self.move_balance(from, to, amount)
    }
}
