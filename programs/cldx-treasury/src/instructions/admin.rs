use anchor_lang::prelude::*;

use crate::constants::TREASURY_SEED;
use crate::state::{SwapRate, TreasuryState};

pub fn set_beneficiary_address(ctx: Context<OwnerAction>, address: Pubkey) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let st = &mut ctx.accounts.treasury_state;
    let old = st.beneficiary_address;
    st.set_beneficiary_address(&owner, address)?;
    emit!(BeneficiaryAddressSet { old, new: address });
    Ok(())
}

pub fn setup_presale_address(ctx: Context<OwnerAction>, address: Pubkey) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let st = &mut ctx.accounts.treasury_state;
    let old = st.presale_address;
    st.setup_presale_address(&owner, address)?;
    emit!(PresaleAddressSet { old, new: address });
    Ok(())
}

pub fn transfer_ownership(ctx: Context<OwnerAction>, new_owner: Pubkey) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts
        .treasury_state
        .transfer_ownership(&owner, new_owner)?;
    emit!(OwnershipTransferred {
        previous_owner: owner,
        new_owner,
    });
    Ok(())
}

pub fn set_swap_rate(ctx: Context<OwnerAction>, rate: SwapRate) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts.treasury_state.set_swap_rate(&owner, rate)?;
    emit!(SwapRateSet {
        cldx_units: rate.cldx_units,
        eco_units: rate.eco_units,
    });
    Ok(())
}

pub fn set_trading_enabled(ctx: Context<OwnerAction>, enabled: bool) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    ctx.accounts
        .treasury_state
        .set_trading_enabled(&owner, enabled)?;
    emit!(TradingEnabledSet { enabled });
    Ok(())
}

/// Owner-signed update of fixed-size treasury fields.
#[derive(Accounts)]
pub struct OwnerAction<'info> {
    #[account(mut, seeds = [TREASURY_SEED], bump = treasury_state.bump)]
    pub treasury_state: Account<'info, TreasuryState>,

    pub owner: Signer<'info>,
}

#[event]
pub struct BeneficiaryAddressSet {
    pub old: Pubkey,
    pub new: Pubkey,
}

#[event]
pub struct PresaleAddressSet {
    pub old: Pubkey,
    pub new: Pubkey,
}

#[event]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}

#[event]
pub struct SwapRateSet {
    pub cldx_units: u64,
    pub eco_units: u64,
}

#[event]
pub struct TradingEnabledSet {
    pub enabled: bool,
}
