use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::adapters::SplTokenService;
use crate::constants::TREASURY_SEED;
use crate::error::TreasuryError;
use crate::state::TreasuryState;

/// Owner withdrawal of any token the treasury holds. CLDX is bounded by the
/// withdrawable (non-vesting) balance.
pub fn withdraw_tokens(ctx: Context<WithdrawTokens>, amount: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let recipient = ctx.accounts.destination.owner;
    let treasury_ai = ctx.accounts.treasury_state.to_account_info();
    let bump = [ctx.accounts.treasury_state.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[TREASURY_SEED, &bump]];

    let mut token = SplTokenService::new(&ctx.accounts.token_program, &ctx.accounts.mint)
        .with_treasury(&treasury_ai, &ctx.accounts.vault, signer_seeds)?
        .with_holding(recipient, &ctx.accounts.destination, None)?;

    ctx.accounts
        .treasury_state
        .withdraw_tokens(&mut token, &owner, &recipient, amount as u128)?;

    emit!(TokensWithdrawn {
        owner,
        mint: ctx.accounts.mint.key(),
        to: recipient,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawTokens<'info> {
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
    pub destination: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensWithdrawn {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
}
