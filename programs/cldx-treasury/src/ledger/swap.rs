use anchor_lang::prelude::*;

use crate::constants::{BURN_ADDRESS, MAX_ECO_WALLETS};
use crate::error::TreasuryError;
use crate::ledger::token::{ensure_transferred, TokenService};
use crate::state::{EcoApproval, TreasuryState};

impl TreasuryState {
    /// Allow-lists `wallet` for swaps and returns its marker. Re-approval keeps the marker.
    pub fn approve_eco_wallet(&mut self, caller: &Pubkey, wallet: Pubkey) -> Result<u64> {
        self.assert_owner(caller)?;
        require!(wallet != BURN_ADDRESS, TreasuryError::InvalidPubkey);

        let existing = self.eco_approval_wallet(&wallet);
        if existing != 0 {
            return Ok(existing);
        }
        require!(
            self.eco_wallets.len() < MAX_ECO_WALLETS,
            TreasuryError::CapacityExceeded
        );
        let marker = self
            .approval_nonce
            .checked_add(1)
            .ok_or(TreasuryError::MathOverflow)?;
        self.approval_nonce = marker;
        self.eco_wallets.push(EcoApproval { wallet, marker });
        msg!("eco wallet approved: {} ({})", wallet, marker);
        Ok(marker)
    }

    /// Approval marker of `wallet`, 0 when not approved.
    pub fn eco_approval_wallet(&self, wallet: &Pubkey) -> u64 {
        self.eco_wallets
            .iter()
            .find(|a| a.wallet == *wallet)
            .map_or(0, |a| a.marker)
    }

    pub fn remove_eco_wallet(&mut self, caller: &Pubkey, wallet: &Pubkey) -> Result<()> {
        self.assert_owner(caller)?;
        self.eco_wallets.retain(|a| a.wallet != *wallet);
        msg!("eco wallet removed: {}", wallet);
        Ok(())
    }

    fn check_swapper(&self, caller: &Pubkey, amount: u128) -> Result<()> {
        require!(amount > 0, TreasuryError::InvalidAmount);
        require!(
            self.eco_approval_wallet(caller) != 0,
            TreasuryError::WalletNotApproved
        );
        require!(!self.is_blacklisted(caller), TreasuryError::Blacklisted);
        Ok(())
    }

    /// Burns `amount` CLDX of `caller` and pays the ECO equivalent out of the treasury.
    /// The burn is not undone if the ECO payout is refused.
    pub fn swap_cldx_to_eco<C: TokenService, E: TokenService>(
        &self,
        cldx: &mut C,
        eco: &mut E,
        caller: &Pubkey,
        amount: u128,
    ) -> Result<u128> {
        self.check_swapper(caller, amount)?;
        require_keys_eq!(cldx.mint(), self.cldx_mint, TreasuryError::InvalidTokenMint);
        require_keys_eq!(eco.mint(), self.eco_mint, TreasuryError::InvalidTokenMint);
        require!(
            cldx.balance_of(caller)? >= amount,
            TreasuryError::InsufficientBalance
        );

        let eco_out = self.config.swap_rate.cldx_to_eco(amount)?;
        require!(eco_out > 0, TreasuryError::InvalidAmount);
        require!(
            eco.balance_of(&self.treasury)? >= eco_out,
            TreasuryError::InsufficientContractBalance
        );

        ensure_transferred(cldx.transfer_from(caller, &BURN_ADDRESS, amount)?)?;
        ensure_transferred(eco.transfer(caller, eco_out)?)?;
        msg!("swap: {} CLDX -> {} ECO for {}", amount, eco_out, caller);
        Ok(eco_out)
    }

    /// Takes `amount` ECO back into the treasury and pays CLDX out of the
    /// withdrawable (non-vesting) balance.
    pub fn swap_eco_to_cldx<C: TokenService, E: TokenService>(
        &self,
        cldx: &mut C,
        eco: &mut E,
        caller: &Pubkey,
        amount: u128,
    ) -> Result<u128> {
        self.check_swapper(caller, amount)?;
        require_keys_eq!(eco.mint(), self.eco_mint, TreasuryError::InvalidTokenMint);
        require!(
            eco.balance_of(caller)? >= amount,
            TreasuryError::InsufficientBalance
        );

        let cldx_out = self.config.swap_rate.eco_to_cldx(amount)?;
        require!(cldx_out > 0, TreasuryError::InvalidAmount);
        require!(
            self.withdrawable_amount(cldx)? >= cldx_out,
            TreasuryError::InsufficientContractBalance
        );

        ensure_transferred(eco.transfer_from(caller, &self.treasury, amount)?)?;
        ensure_transferred(cldx.transfer(caller, cldx_out)?)?;
        msg!("swap: {} ECO -> {} CLDX for {}", amount, cldx_out, caller);
        Ok(cldx_out)
    }
}
