use anchor_lang::prelude::*;

use crate::adapters::LamportService;
use crate::constants::TREASURY_SEED;
use crate::state::TreasuryState;

/// Owner withdrawal of lamports held by the treasury above its rent-exempt minimum.
pub fn withdraw_native(ctx: Context<WithdrawNative>, amount: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let recipient = ctx.accounts.recipient.key();
    let treasury_ai = ctx.accounts.treasury_state.to_account_info();

    let mut native =
        LamportService::new(&treasury_ai)?.with_recipient(&ctx.accounts.recipient.to_account_info());

    ctx.accounts
        .treasury_state
        .withdraw_native(&mut native, &owner, &recipient, amount as u128)?;

    emit!(NativeWithdrawn {
        owner,
        to: recipient,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawNative<'info> {
    #[account(mut, seeds = [TREASURY_SEED], bump = treasury_state.bump)]
    pub treasury_state: Account<'info, TreasuryState>,

    /// CHECK: only credited with lamports.
    #[account(mut)]
    pub recipient: UncheckedAccount<'info>,

    pub owner: Signer<'info>,
}

#[event]
pub struct NativeWithdrawn {
    pub owner: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
}
