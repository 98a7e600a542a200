use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::adapters::SplTokenService;
use crate::constants::TREASURY_SEED;
use crate::error::TreasuryError;
use crate::state::TreasuryState;

/// CLDX transfer subject to the blacklist and the trading switch.
pub fn transfer_cldx(ctx: Context<TransferCldx>, amount: u64) -> Result<()> {
    let sender = ctx.accounts.sender.key();
    let recipient = ctx.accounts.recipient_token_account.owner;

    let mut cldx = SplTokenService::new(&ctx.accounts.token_program, &ctx.accounts.cldx_mint)
        .with_holding(
            sender,
            &ctx.accounts.sender_token_account,
            Some(ctx.accounts.sender.to_account_info()),
        )?
        .with_holding(recipient, &ctx.accounts.recipient_token_account, None)?;

    ctx.accounts
        .treasury_state
        .transfer(&mut cldx, &sender, &recipient, amount as u128)?;

    emit!(CldxTransferred {
        from: sender,
        to: recipient,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct TransferCldx<'info> {
    #[account(seeds = [TREASURY_SEED], bump = treasury_state.bump)]
    pub treasury_state: Account<'info, TreasuryState>,

    #[account(address = treasury_state.cldx_mint @ TreasuryError::InvalidTokenMint)]
    pub cldx_mint: Account<'info, Mint>,

    #[account(mut)]
    pub sender_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub recipient_token_account: Account<'info, TokenAccount>,

    pub sender: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct CldxTransferred {
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
}
