use anchor_lang::prelude::*;

use crate::constants::{BURN_ADDRESS, MAX_REALLOC_GROWTH, MAX_SCHEDULES, MAX_VESTING_MONTHS};
use crate::error::TreasuryError;
use crate::ledger::token::{ensure_transferred, TokenService};
use crate::state::{TreasuryState, VestingSchedule};
use crate::utils::time::{add_months, release_windows};

// Any grant that passes the capacity check fits one instruction's realloc.
const _: () = assert!(MAX_SCHEDULES * VestingSchedule::SIZE <= MAX_REALLOC_GROWTH);

impl TreasuryState {
    /// Splits a grant of `total_allocation` over `months` calendar months into
    /// `months * release_units_per_month` linear sub-schedules starting at `now`.
    /// The last sub-schedule carries the division remainder so the grant sums exactly.
    pub fn initialize_vesting<T: TokenService>(
        &mut self,
        cldx: &T,
        caller: &Pubkey,
        now: i64,
        months: u8,
        beneficiary: Pubkey,
        total_allocation: u128,
    ) -> Result<()> {
        self.assert_owner(caller)?;
        require!(
            months > 0 && months <= MAX_VESTING_MONTHS,
            TreasuryError::InvalidDuration
        );
        require!(beneficiary != BURN_ADDRESS, TreasuryError::InvalidPubkey);
        require!(total_allocation > 0, TreasuryError::InvalidAmount);
        require_keys_eq!(cldx.mint(), self.cldx_mint, TreasuryError::InvalidTokenMint);

        let units = months as usize * self.config.release_units_per_month as usize;
        require!(
            total_allocation >= units as u128,
            TreasuryError::InvalidAllocation
        );
        require!(
            self.schedules.len() + units <= MAX_SCHEDULES,
            TreasuryError::CapacityExceeded
        );
        require!(
            self.withdrawable_amount(cldx)? >= total_allocation,
            TreasuryError::InsufficientContractBalance
        );

        let windows = release_windows(now, months as u32, self.config.release_units_per_month)?;
        let cliff_end = add_months(now, self.config.cliff_months as u32)?;
        let per_unit = total_allocation / units as u128;
        let remainder = total_allocation - per_unit * units as u128;
        let last = windows.len() - 1;

        self.schedules.reserve_exact(units);
        for (k, window) in windows.iter().enumerate() {
            let allocation = if k == last {
                per_unit + remainder
            } else {
                per_unit
            };
            self.schedules.push(VestingSchedule {
                beneficiary,
                total_allocation: allocation,
                released: 0,
                start_time: window.start,
                cliff_duration: (cliff_end - window.start).max(0),
                vesting_duration: window.duration,
                revoked: false,
            });
        }

        self.vesting_schedules_total_amount = self
            .vesting_schedules_total_amount
            .checked_add(total_allocation)
            .ok_or(TreasuryError::MathOverflow)?;

        msg!(
            "vesting: {} over {} months ({} units) for {}",
            total_allocation,
            months,
            units,
            beneficiary
        );
        Ok(())
    }

    pub fn vesting_schedules_count(&self) -> u64 {
        self.schedules.len() as u64
    }

    pub fn vesting_schedule(&self, index: u64) -> Result<&VestingSchedule> {
        let schedule = usize::try_from(index)
            .ok()
            .and_then(|i| self.schedules.get(i))
            .ok_or(TreasuryError::IndexOutOfRange)?;
        Ok(schedule)
    }

    /// Sum of what `beneficiary` could release at `now`.
    pub fn compute_releasable_amount(&self, beneficiary: &Pubkey, now: i64) -> Result<u128> {
        self.schedules
            .iter()
            .filter(|s| s.beneficiary == *beneficiary)
            .try_fold(0u128, |acc, s| {
                acc.checked_add(s.releasable_amount(now)?)
                    .ok_or_else(|| error!(TreasuryError::MathOverflow))
            })
    }

    /// Pays out everything vested for `beneficiary` in a single transfer.
    pub fn release<T: TokenService>(
        &mut self,
        cldx: &mut T,
        caller: &Pubkey,
        beneficiary: &Pubkey,
        now: i64,
    ) -> Result<u128> {
        require!(!self.paused, TreasuryError::Paused);
        require!(
            caller == beneficiary || *caller == self.owner,
            TreasuryError::Unauthorized
        );
        require!(
            !self.is_blacklisted(beneficiary),
            TreasuryError::Blacklisted
        );
        require_keys_eq!(cldx.mint(), self.cldx_mint, TreasuryError::InvalidTokenMint);

        let releasable = self.compute_releasable_amount(beneficiary, now)?;
        require!(releasable > 0, TreasuryError::NothingToRelease);
        require!(
            cldx.balance_of(&self.treasury)? >= releasable,
            TreasuryError::InsufficientContractBalance
        );

        ensure_transferred(cldx.transfer(beneficiary, releasable)?)?;

        for schedule in self
            .schedules
            .iter_mut()
            .filter(|s| s.beneficiary == *beneficiary)
        {
            let amount = schedule.releasable_amount(now)?;
            if amount > 0 {
                schedule.record_release(amount)?;
            }
        }
        self.vesting_schedules_total_amount = self
            .vesting_schedules_total_amount
            .checked_sub(releasable)
            .ok_or(TreasuryError::MathOverflow)?;

        msg!("released {} to {}", releasable, beneficiary);
        Ok(releasable)
    }

    pub fn pause(&mut self, caller: &Pubkey) -> Result<()> {
        self.assert_owner(caller)?;
        require!(!self.paused, TreasuryError::Paused);
        self.paused = true;
        Ok(())
    }

    pub fn unpause(&mut self, caller: &Pubkey) -> Result<()> {
        self.assert_owner(caller)?;
        require!(self.paused, TreasuryError::NotPaused);
        self.paused = false;
        Ok(())
    }

    /// Treasury CLDX not reserved for unreleased vesting.
    pub fn withdrawable_amount<T: TokenService>(&self, cldx: &T) -> Result<u128> {
        require_keys_eq!(cldx.mint(), self.cldx_mint, TreasuryError::InvalidTokenMint);
        Ok(cldx
            .balance_of(&self.treasury)?
            .saturating_sub(self.vesting_schedules_total_amount))
    }
}
