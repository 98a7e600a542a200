use anchor_lang::prelude::*;

use crate::constants::TREASURY_SEED;
use crate::state::TreasuryState;

pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts.treasury_state.unpause(&owner)?;
    emit!(ReleaseUnpaused { owner });
    Ok(())
}

#[derive(Accounts)]
pub struct Unpause<'info> {
    #[account(mut, seeds = [TREASURY_SEED], bump = treasury_state.bump)]
    pub treasury_state: Account<'info, TreasuryState>,
    pub owner: Signer<'info>,
}

#[event]
pub struct ReleaseUnpaused {
    pub owner: Pubkey,
}
