use anchor_lang::prelude::*;

use crate::constants::BURN_ADDRESS;
use crate::error::TreasuryError;
use crate::state::{SwapRate, TreasuryState};

impl TreasuryState {
    pub fn assert_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, TreasuryError::Unauthorized);
        Ok(())
    }

    pub fn transfer_ownership(&mut self, caller: &Pubkey, new_owner: Pubkey) -> Result<()> {
        self.assert_owner(caller)?;
        require!(new_owner != BURN_ADDRESS, TreasuryError::InvalidPubkey);
        msg!("ownership: {} -> {}", self.owner, new_owner);
        self.owner = new_owner;
        Ok(())
    }

    pub fn set_beneficiary_address(&mut self, caller: &Pubkey, address: Pubkey) -> Result<()> {
        self.assert_owner(caller)?;
        require!(address != BURN_ADDRESS, TreasuryError::InvalidPubkey);
        self.beneficiary_address = address;
        Ok(())
    }

    /// The presale address may move tokens before trading opens.
    pub fn setup_presale_address(&mut self, caller: &Pubkey, address: Pubkey) -> Result<()> {
        self.assert_owner(caller)?;
        require!(address != BURN_ADDRESS, TreasuryError::InvalidPubkey);
        self.presale_address = address;
        Ok(())
    }

    pub fn set_swap_rate(&mut self, caller: &Pubkey, rate: SwapRate) -> Result<()> {
        self.assert_owner(caller)?;
        rate.validate()?;
        msg!("swap rate: {} CLDX = {} ECO", rate.cldx_units, rate.eco_units);
        self.config.swap_rate = rate;
        Ok(())
    }
}
