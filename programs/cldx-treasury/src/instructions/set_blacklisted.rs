use anchor_lang::prelude::*;

use crate::constants::TREASURY_SEED;
use crate::state::TreasuryState;

pub fn set_blacklisted(ctx: Context<SetBlacklisted>, wallet: Pubkey, blacklisted: bool) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts
        .treasury_state
        .set_blacklisted(&owner, wallet, blacklisted)?;
    emit!(BlacklistUpdated {
        wallet,
        blacklisted,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(wallet: Pubkey, blacklisted: bool)]
pub struct SetBlacklisted<'info> {
    #[account(
        mut,
        seeds = [TREASURY_SEED],
        bump = treasury_state.bump,
        realloc = treasury_state.space_after_blacklist(&wallet, blacklisted),
        realloc::payer = owner,
        realloc::zero = false,
    )]
    pub treasury_state: Account<'info, TreasuryState>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct BlacklistUpdated {
    pub wallet: Pubkey,
    pub blacklisted: bool,
}
