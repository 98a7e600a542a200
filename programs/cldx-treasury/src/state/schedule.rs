use anchor_lang::prelude::*;

use crate::error::TreasuryError;
use crate::utils::math::proportional;

/// One vesting sub-unit of a grant.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingSchedule {
    pub beneficiary: Pubkey,
    /// Base units (18 decimals).
    pub total_allocation: u128,
    /// Invariant: `released <= total_allocation`.
    pub released: u128,
    /// Unix seconds.
    pub start_time: i64,
    /// Seconds after `start_time` before anything is releasable. May exceed
    /// `vesting_duration`, in which case the schedule unlocks in full at the cliff.
    pub cliff_duration: i64,
    /// Seconds; always > 0.
    pub vesting_duration: i64,
    pub revoked: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScheduleStatus {
    /// Cliff not reached yet.
    Created,
    Vesting,
    Exhausted,
    Revoked,
}

impl VestingSchedule {
    pub const SIZE: usize =
        32 + // beneficiary
        16 + // total_allocation
        16 + // released
        8 +  // start_time
        8 +  // cliff_duration
        8 +  // vesting_duration
        1;   // revoked

    /// Amount vested at `now`, released or not.
    pub fn vested_amount(&self, now: i64) -> Result<u128> {
        if now < self.start_time {
            return Ok(0);
        }
        let elapsed = now - self.start_time;
        if elapsed < self.cliff_duration {
            return Ok(0);
        }
        if elapsed >= self.vesting_duration {
            return Ok(self.total_allocation);
        }
        let vested = proportional(
            self.total_allocation,
            elapsed as u128,
            self.vesting_duration as u128,
        )?;
        Ok(vested.min(self.total_allocation))
    }

    pub fn releasable_amount(&self, now: i64) -> Result<u128> {
        if self.revoked {
            return Ok(0);
        }
        // A clock behind the last release leaves nothing to release.
        Ok(self.vested_amount(now)?.saturating_sub(self.released))
    }

    pub fn unreleased(&self) -> u128 {
        self.total_allocation.saturating_sub(self.released)
    }

    pub fn is_exhausted(&self) -> bool {
        self.released == self.total_allocation
    }

    pub fn status(&self, now: i64) -> ScheduleStatus {
        if self.revoked {
            ScheduleStatus::Revoked
        } else if self.is_exhausted() {
            ScheduleStatus::Exhausted
        } else if now < self.start_time.saturating_add(self.cliff_duration) {
            ScheduleStatus::Created
        } else {
            ScheduleStatus::Vesting
        }
    }

    /// Records a release; callers have already bounded `amount` by `releasable_amount`.
    pub(crate) fn record_release(&mut self, amount: u128) -> Result<()> {
        let released = self
            .released
            .checked_add(amount)
            .ok_or(TreasuryError::MathOverflow)?;
        require!(
            released <= self.total_allocation,
            TreasuryError::MathOverflow
        );
        self.released = released;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(total: u128, cliff: i64, duration: i64) -> VestingSchedule {
        VestingSchedule {
            beneficiary: Pubkey::new_from_array([7; 32]),
            total_allocation: total,
            released: 0,
            start_time: 1_000,
            cliff_duration: cliff,
            vesting_duration: duration,
            revoked: false,
        }
    }

    #[test]
    fn nothing_vests_before_start_or_cliff() {
        let s = schedule(1_000, 100, 400);
        assert_eq!(s.vested_amount(0).unwrap(), 0);
        assert_eq!(s.vested_amount(1_000).unwrap(), 0);
        assert_eq!(s.vested_amount(1_099).unwrap(), 0);
        assert_eq!(s.status(1_099), ScheduleStatus::Created);
    }

    #[test]
    fn vests_linearly_after_cliff() {
        let s = schedule(1_000, 100, 400);
        // At the cliff the elapsed share catches up at once.
        assert_eq!(s.vested_amount(1_100).unwrap(), 250);
        assert_eq!(s.vested_amount(1_200).unwrap(), 500);
        assert_eq!(s.vested_amount(1_400).unwrap(), 1_000);
        assert_eq!(s.vested_amount(9_999).unwrap(), 1_000);
        assert_eq!(s.status(1_200), ScheduleStatus::Vesting);
    }

    #[test]
    fn cliff_longer_than_duration_unlocks_everything_at_cliff() {
        let s = schedule(1_000, 500, 100);
        assert_eq!(s.vested_amount(1_499).unwrap(), 0);
        assert_eq!(s.vested_amount(1_500).unwrap(), 1_000);
    }

    #[test]
    fn releasable_subtracts_released_and_ignores_revoked() {
        let mut s = schedule(1_000, 0, 400);
        s.record_release(250).unwrap();
        assert_eq!(s.releasable_amount(1_200).unwrap(), 250);
        assert_eq!(s.unreleased(), 750);

        s.revoked = true;
        assert_eq!(s.releasable_amount(1_400).unwrap(), 0);
        assert_eq!(s.status(1_400), ScheduleStatus::Revoked);
    }

    #[test]
    fn earlier_clock_after_release_quotes_zero() {
        let mut s = schedule(1_000, 0, 400);
        s.record_release(500).unwrap();
        assert_eq!(s.releasable_amount(1_199).unwrap(), 0);
        assert_eq!(s.releasable_amount(0).unwrap(), 0);
    }

    #[test]
    fn record_release_never_exceeds_allocation() {
        let mut s = schedule(1_000, 0, 400);
        s.record_release(1_000).unwrap();
        assert!(s.is_exhausted());
        assert_eq!(s.status(1_400), ScheduleStatus::Exhausted);
        assert!(s.record_release(1).is_err());
        assert_eq!(s.released, 1_000);
    }
}
