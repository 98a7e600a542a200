use anchor_lang::prelude::*;

use crate::constants::TREASURY_SEED;
use crate::state::TreasuryState;

pub fn approve_eco_wallet(ctx: Context<ApproveEcoWallet>, wallet: Pubkey) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let marker = ctx
        .accounts
        .treasury_state
        .approve_eco_wallet(&owner, wallet)?;
    emit!(EcoWalletApproved { wallet, marker });
    Ok(())
}

pub fn remove_eco_wallet(ctx: Context<RemoveEcoWallet>, wallet: Pubkey) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts
        .treasury_state
        .remove_eco_wallet(&owner, &wallet)?;
    emit!(EcoWalletRemoved { wallet });
    Ok(())
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct ApproveEcoWallet<'info> {
    #[account(
        mut,
        seeds = [TREASURY_SEED],
        bump = treasury_state.bump,
        realloc = treasury_state.space_after_approval(&wallet),
        realloc::payer = owner,
        realloc::zero = false,
    )]
    pub treasury_state: Account<'info, TreasuryState>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey)]
pub struct RemoveEcoWallet<'info> {
    #[account(
        mut,
        seeds = [TREASURY_SEED],
        bump = treasury_state.bump,
        realloc = treasury_state.space_after_removal(&wallet),
        realloc::payer = owner,
        realloc::zero = false,
    )]
    pub treasury_state: Account<'info, TreasuryState>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct EcoWalletApproved {
    pub wallet: Pubkey,
    pub marker: u64,
}

#[event]
pub struct EcoWalletRemoved {
    pub wallet: Pubkey,
}
