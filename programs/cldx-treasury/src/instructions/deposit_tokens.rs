use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::adapters::SplTokenService;
use crate::constants::TREASURY_SEED;
use crate::error::TreasuryError;
use crate::state::TreasuryState;

pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
    let depositor = ctx.accounts.depositor.key();
    let treasury = ctx.accounts.treasury_state.key();

    let mut token = SplTokenService::new(&ctx.accounts.token_program, &ctx.accounts.mint)
        .with_holding(treasury, &ctx.accounts.vault, None)?
        .with_holding(
            depositor,
            &ctx.accounts.depositor_token_account,
            Some(ctx.accounts.depositor.to_account_info()),
        )?;

    ctx.accounts
        .treasury_state
        .deposit(&mut token, &depositor, amount as u128)?;

    ctx.accounts.vault.reload()?;

    emit!(TokensDeposited {
        depositor,
        mint: ctx.accounts.mint.key(),
        amount,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DepositTokens<'info> {
    #[account(seeds = [TREASURY_SEED], bump = treasury_state.bump)]
    pub treasury_state: Account<'info, TreasuryState>,

    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = vault.mint == mint.key() @ TreasuryError::InvalidTokenMint,
        constraint = vault.owner == treasury_state.key() @ TreasuryError::InvalidTokenAccount,
        constraint = vault.mint != treasury_state.cldx_mint
            || vault.key() == treasury_state.vault_address(&vault.mint)
            @ TreasuryError::InvalidTokenAccount,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub depositor_token_account: Account<'info, TokenAccount>,

    pub depositor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensDeposited {
    pub depositor: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
