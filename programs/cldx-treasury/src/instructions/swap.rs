use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::adapters::SplTokenService;
use crate::constants::{TREASURY_SEED, VAULT_SEED};
use crate::error::TreasuryError;
use crate::state::TreasuryState;

pub fn swap_cldx_to_eco(ctx: Context<SwapTokens>, amount: u64) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let treasury_ai = ctx.accounts.treasury_state.to_account_info();
    let bump = [ctx.accounts.treasury_state.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[TREASURY_SEED, &bump]];
    let (mut cldx, mut eco) = ctx.accounts.services(&treasury_ai, signer_seeds)?;

    let eco_out = ctx
        .accounts
        .treasury_state
        .swap_cldx_to_eco(&mut cldx, &mut eco, &caller, amount as u128)?;

    emit!(CldxSwappedForEco {
        wallet: caller,
        cldx_burned: amount as u128,
        eco_out,
    });

    Ok(())
}

pub fn swap_eco_to_cldx(ctx: Context<SwapTokens>, amount: u64) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let treasury_ai = ctx.accounts.treasury_state.to_account_info();
    let bump = [ctx.accounts.treasury_state.bump];
    let signer_seeds: &[&[&[u8]]] = &[&[TREASURY_SEED, &bump]];
    let (mut cldx, mut eco) = ctx.accounts.services(&treasury_ai, signer_seeds)?;

    let cldx_out = ctx
        .accounts
        .treasury_state
        .swap_eco_to_cldx(&mut cldx, &mut eco, &caller, amount as u128)?;

    emit!(EcoSwappedForCldx {
        wallet: caller,
        eco_in: amount as u128,
        cldx_out,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SwapTokens<'info> {
    #[account(seeds = [TREASURY_SEED], bump = treasury_state.bump)]
    pub treasury_state: Account<'info, TreasuryState>,

    /// Mutable: CLDX swapped for ECO is burned.
    #[account(mut, address = treasury_state.cldx_mint @ TreasuryError::InvalidTokenMint)]
    pub cldx_mint: Account<'info, Mint>,

    #[account(address = treasury_state.eco_mint @ TreasuryError::InvalidTokenMint)]
    pub eco_mint: Account<'info, Mint>,

    #[account(
        mut,
        seeds = [VAULT_SEED, treasury_state.key().as_ref(), cldx_mint.key().as_ref()],
        bump,
    )]
    pub cldx_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [VAULT_SEED, treasury_state.key().as_ref(), eco_mint.key().as_ref()],
        bump,
    )]
    pub eco_vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub caller_cldx_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub caller_eco_account: Account<'info, TokenAccount>,

    pub caller: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

impl<'info> SwapTokens<'info> {
    fn services<'a>(
        &self,
        treasury_ai: &AccountInfo<'info>,
        signer_seeds: &'a [&'a [&'a [u8]]],
    ) -> Result<(SplTokenService<'a, 'info>, SplTokenService<'a, 'info>)> {
        let caller = self.caller.key();
        let caller_ai = self.caller.to_account_info();
        let cldx = SplTokenService::new(&self.token_program, &self.cldx_mint)
            .with_treasury(treasury_ai, &self.cldx_vault, signer_seeds)?
            .with_holding(caller, &self.caller_cldx_account, Some(caller_ai.clone()))?;
        let eco = SplTokenService::new(&self.token_program, &self.eco_mint)
            .with_treasury(treasury_ai, &self.eco_vault, signer_seeds)?
            .with_holding(caller, &self.caller_eco_account, Some(caller_ai))?;
        Ok((cldx, eco))
    }
}

#[event]
pub struct CldxSwappedForEco {
    pub wallet: Pubkey,
    pub cldx_burned: u128,
    pub eco_out: u128,
}

#[event]
pub struct EcoSwappedForCldx {
    pub wallet: Pubkey,
    pub eco_in: u128,
    pub cldx_out: u128,
}
