use anchor_lang::prelude::*;

use crate::constants::TREASURY_SEED;
use crate::state::TreasuryState;

pub fn pause(ctx: Context<Pause>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts.treasury_state.pause(&owner)?;
    emit!(ReleasePaused { owner });
    Ok(())
}

#[derive(Accounts)]
pub struct Pause<'info> {
    #[account(mut, seeds = [TREASURY_SEED], bump = treasury_state.bump)]
    pub treasury_state: Account<'info, TreasuryState>,
    pub owner: Signer<'info>,
}

#[event]
pub struct ReleasePaused {
    pub owner: Pubkey,
}
