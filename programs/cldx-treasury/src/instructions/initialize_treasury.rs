use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{TREASURY_SEED, VAULT_SEED};
use crate::state::{TreasuryConfig, TreasuryState};

pub fn initialize_treasury(
    ctx: Context<InitializeTreasury>,
    beneficiary_address: Pubkey,
    config: TreasuryConfig,
) -> Result<()> {
    let state = TreasuryState::new(
        ctx.accounts.owner.key(),
        ctx.accounts.treasury_state.key(),
        beneficiary_address,
        ctx.accounts.cldx_mint.key(),
        ctx.accounts.eco_mint.key(),
        ctx.bumps.treasury_state,
        config,
    )?;
    ctx.accounts.treasury_state.set_inner(state);

    emit!(TreasuryInitialized {
        owner: ctx.accounts.owner.key(),
        beneficiary_address,
        cldx_mint: ctx.accounts.cldx_mint.key(),
        eco_mint: ctx.accounts.eco_mint.key(),
        release_units_per_month: config.release_units_per_month,
        cliff_months: config.cliff_months,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeTreasury<'info> {
    #[account(
        init,
        payer = owner,
        space = TreasuryState::space(0, 0, 0),
        seeds = [TREASURY_SEED],
        bump
    )]
    pub treasury_state: Account<'info, TreasuryState>,

    pub cldx_mint: Account<'info, Mint>,

    pub eco_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = owner,
        token::mint = cldx_mint,
        token::authority = treasury_state,
        seeds = [VAULT_SEED, treasury_state.key().as_ref(), cldx_mint.key().as_ref()],
        bump
    )]
    pub cldx_vault: Account<'info, TokenAccount>,

    #[account(
        init,
        payer = owner,
        token::mint = eco_mint,
        token::authority = treasury_state,
        seeds = [VAULT_SEED, treasury_state.key().as_ref(), eco_mint.key().as_ref()],
        bump
    )]
    pub eco_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct TreasuryInitialized {
    pub owner: Pubkey,
    pub beneficiary_address: Pubkey,
    pub cldx_mint: Pubkey,
    pub eco_mint: Pubkey,
    pub release_units_per_month: u8,
    pub cliff_months: u8,
}
