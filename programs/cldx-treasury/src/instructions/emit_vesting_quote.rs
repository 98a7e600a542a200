use anchor_lang::prelude::*;

use crate::constants::{MAX_VESTING_MONTHS, TREASURY_SEED};
use crate::ledger::{SysvarClock, TimeSource};
use crate::state::TreasuryState;
use crate::utils::time;

/// Read-only: emits what `beneficiary` could release right now.
pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>, beneficiary: Pubkey) -> Result<()> {
    let st = &ctx.accounts.treasury_state;
    let now = SysvarClock.now()?;

    let mut schedules = 0u64;
    let mut first_start = None;
    let mut total_allocation = 0u128;
    let mut released = 0u128;
    for s in st.schedules.iter().filter(|s| s.beneficiary == beneficiary) {
        schedules += 1;
        first_start.get_or_insert(s.start_time);
        total_allocation = total_allocation.saturating_add(s.total_allocation);
        released = released.saturating_add(s.released);
    }
    let releasable = st.compute_releasable_amount(&beneficiary, now)?;
    let months_elapsed = match first_start {
        Some(start) if now >= start => time::months_between(now, start, MAX_VESTING_MONTHS as u32)?,
        _ => 0,
    };

    emit!(VestingQuote {
        beneficiary,
        now,
        schedules,
        months_elapsed,
        total_allocation,
        released,
        releasable,
        paused: st.paused,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitVestingQuote<'info> {
    #[account(seeds = [TREASURY_SEED], bump = treasury_state.bump)]
    pub treasury_state: Account<'info, TreasuryState>,
}

#[event]
pub struct VestingQuote {
    pub beneficiary: Pubkey,
    pub now: i64,
    pub schedules: u64,
    /// Whole calendar months since the beneficiary's first grant started.
    pub months_elapsed: u32,
    pub total_allocation: u128,
    pub released: u128,
    pub releasable: u128,
    pub paused: bool,
}
