use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::adapters::SplTokenService;
use crate::constants::{TREASURY_SEED, VAULT_SEED};
use crate::error::TreasuryError;
use crate::state::TreasuryState;

pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let treasury_ai = ctx.accounts.treasury_state.to_account_info();
    let bump = [ctx.accounts.treasury_state.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[TREASURY_SEED, &bump]];

    let mut cldx = SplTokenService::new(&ctx.accounts.token_program, &ctx.accounts.cldx_mint)
        .with_treasury(&treasury_ai, &ctx.accounts.cldx_vault, signer_seeds)?
        .with_holding(owner, &ctx.accounts.owner_token_account, None)?;

    let st = &ctx.accounts.treasury_state;
    st.withdraw(&mut cldx, &owner, amount as u128)?;

    emit!(CldxWithdrawn {
        owner,
        amount,
        withdrawable_after: st.withdrawable_amount(&cldx)?,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(seeds = [TREASURY_SEED], bump = treasury_state.bump)]
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
    pub owner_token_account: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct CldxWithdrawn {
    pub owner: Pubkey,
    pub amount: u64,
    pub withdrawable_after: u128,
}
