use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::adapters::SplTokenService;
use crate::constants::{TREASURY_SEED, VAULT_SEED};
use crate::error::TreasuryError;
use crate::ledger::{SysvarClock, TimeSource};
use crate::state::TreasuryState;

pub fn release(ctx: Context<Release>, beneficiary: Pubkey) -> Result<()> {
    let now = SysvarClock.now()?;

    // Capture AccountInfos before taking the mutable borrow of the state.
    let treasury_ai = ctx.accounts.treasury_state.to_account_info();
    let bump = [ctx.accounts.treasury_state.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[TREASURY_SEED, &bump]];

    let mut cldx = SplTokenService::new(&ctx.accounts.token_program, &ctx.accounts.cldx_mint)
        .with_treasury(&treasury_ai, &ctx.accounts.cldx_vault, signer_seeds)?
        .with_holding(beneficiary, &ctx.accounts.beneficiary_token_account, None)?;

    let caller = ctx.accounts.caller.key();
    let st = &mut ctx.accounts.treasury_state;
    let amount = st.release(&mut cldx, &caller, &beneficiary, now)?;

    emit!(TokensReleased {
        beneficiary,
        caller,
        amount,
        vesting_remaining: st.vesting_schedules_total_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Release<'info> {
    #[account(mut, seeds = [TREASURY_SEED], bump = treasury_state.bump)]
    pub treasury_state: Account<'info, TreasuryState>,

    #[account(address = treasury_state.cldx_mint @ TreasuryError::InvalidTokenMint)]
    pub cldx_mint: Account<'info, Mint>,

    #[account(
        mut,
        seeds = [VAULT_SEED, treasury_state.key().as_ref(), cldx_mint.key().as_ref()],
        bump,
    )]
    pub cldx_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    /// The beneficiary itself or the owner.
    pub caller: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensReleased {
    pub beneficiary: Pubkey,
    pub caller: Pubkey,
    pub amount: u128,
    pub vesting_remaining: u128,
}
