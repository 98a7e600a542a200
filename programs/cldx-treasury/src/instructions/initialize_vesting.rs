use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::adapters::SplTokenService;
use crate::constants::{TREASURY_SEED, VAULT_SEED};
use crate::error::TreasuryError;
use crate::ledger::{SysvarClock, TimeSource};
use crate::state::TreasuryState;

pub fn initialize_vesting(
    ctx: Context<InitializeVesting>,
    vesting_duration_months: u8,
    beneficiary: Pubkey,
    total_allocation: u64,
) -> Result<()> {
    let now = SysvarClock.now()?;
    let treasury = ctx.accounts.treasury_state.key();
    // Read-only: the grant is only checked against the vault balance.
    let cldx = SplTokenService::new(&ctx.accounts.token_program, &ctx.accounts.cldx_mint)
        .with_holding(treasury, &ctx.accounts.cldx_vault, None)?;

    let owner = ctx.accounts.owner.key();
    let st = &mut ctx.accounts.treasury_state;
    let first_index = st.vesting_schedules_count();
    st.initialize_vesting(
        &cldx,
        &owner,
        now,
        vesting_duration_months,
        beneficiary,
        total_allocation as u128,
    )?;

    emit!(VestingInitialized {
        beneficiary,
        vesting_duration_months,
        total_allocation,
        start_time: now,
        first_index,
        schedules_count: st.vesting_schedules_count(),
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(vesting_duration_months: u8)]
pub struct InitializeVesting<'info> {
    #[account(
        mut,
        seeds = [TREASURY_SEED],
        bump = treasury_state.bump,
        realloc = treasury_state.space_after_grant(vesting_duration_months),
        realloc::payer = owner,
        realloc::zero = false,
    )]
    pub treasury_state: Account<'info, TreasuryState>,

    #[account(address = treasury_state.cldx_mint @ TreasuryError::InvalidTokenMint)]
    pub cldx_mint: Account<'info, Mint>,

    #[account(
        seeds = [VAULT_SEED, treasury_state.key().as_ref(), cldx_mint.key().as_ref()],
        bump,
    )]
    pub cldx_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct VestingInitialized {
    pub beneficiary: Pubkey,
    pub vesting_duration_months: u8,
    pub total_allocation: u64,
    pub start_time: i64,
    /// Index of the first sub-schedule created by this grant.
    pub first_index: u64,
    pub schedules_count: u64,
}
