use anchor_lang::prelude::*;

use crate::constants::{BURN_ADDRESS, MAX_BLACKLISTED};
use crate::error::TreasuryError;
use crate::ledger::token::{ensure_transferred, TokenService};
use crate::state::TreasuryState;

impl TreasuryState {
    pub fn set_blacklisted(&mut self, caller: &Pubkey, address: Pubkey, flag: bool) -> Result<()> {
        self.assert_owner(caller)?;
        let position = self.blacklist.iter().position(|a| *a == address);
        match (position, flag) {
            (None, true) => {
                require!(
                    self.blacklist.len() < MAX_BLACKLISTED,
                    TreasuryError::CapacityExceeded
                );
                self.blacklist.push(address);
            }
            (Some(i), false) => {
                self.blacklist.swap_remove(i);
            }
            _ => {}
        }
        msg!("blacklist {}: {}", address, flag);
        Ok(())
    }

    pub fn is_blacklisted(&self, address: &Pubkey) -> bool {
        self.blacklist.contains(address)
    }

    pub fn set_trading_enabled(&mut self, caller: &Pubkey, enabled: bool) -> Result<()> {
        self.assert_owner(caller)?;
        self.trading_enabled = enabled;
        msg!("trading enabled: {}", enabled);
        Ok(())
    }

    fn is_trading_exempt(&self, initiator: &Pubkey) -> bool {
        *initiator == self.owner
            || (self.presale_address != BURN_ADDRESS && *initiator == self.presale_address)
    }

    /// Pre-transfer gate. The blacklist is consulted before the trading switch.
    pub fn check_transfer(&self, initiator: &Pubkey, from: &Pubkey, to: &Pubkey) -> Result<()> {
        require!(
            !self.is_blacklisted(from) && !self.is_blacklisted(to),
            TreasuryError::Blacklisted
        );
        require!(
            self.trading_enabled || self.is_trading_exempt(initiator),
            TreasuryError::TradingDisabled
        );
        Ok(())
    }

    /// Gated CLDX transfer from `caller` to `to`.
    pub fn transfer<T: TokenService>(
        &self,
        cldx: &mut T,
        caller: &Pubkey,
        to: &Pubkey,
        amount: u128,
    ) -> Result<()> {
        require_keys_eq!(cldx.mint(), self.cldx_mint, TreasuryError::InvalidTokenMint);
        require!(amount > 0, TreasuryError::InvalidAmount);
        self.check_transfer(caller, caller, to)?;
        require!(
            cldx.balance_of(caller)? >= amount,
            TreasuryError::InsufficientBalance
        );
        ensure_transferred(cldx.transfer_from(caller, to, amount)?)
    }
}
