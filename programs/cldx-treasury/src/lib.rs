use anchor_lang::prelude::*;

pub mod adapters;
pub mod constants;
pub mod error;
pub mod instructions;
pub mod ledger;
pub mod state;
pub mod utils;

pub use instructions::*;
use state::{SwapRate, TreasuryConfig};

declare_id!("BVLW8Ge8mReqKnA4vuFx89Ju4UQWVgTjpwqW15nuEtkd");

#[program]
pub mod cldx_treasury {
    use super::*;

    pub fn initialize_treasury(
        ctx: Context<InitializeTreasury>,
        beneficiary_address: Pubkey,
        config: TreasuryConfig,
    ) -> Result<()> {
        instructions::initialize_treasury::initialize_treasury(ctx, beneficiary_address, config)
    }

    pub fn set_beneficiary_address(ctx: Context<OwnerAction>, address: Pubkey) -> Result<()> {
        instructions::admin::set_beneficiary_address(ctx, address)
    }

    pub fn setup_presale_address(ctx: Context<OwnerAction>, address: Pubkey) -> Result<()> {
        instructions::admin::setup_presale_address(ctx, address)
    }

    pub fn transfer_ownership(ctx: Context<OwnerAction>, new_owner: Pubkey) -> Result<()> {
        instructions::admin::transfer_ownership(ctx, new_owner)
    }

    pub fn set_swap_rate(ctx: Context<OwnerAction>, rate: SwapRate) -> Result<()> {
        instructions::admin::set_swap_rate(ctx, rate)
    }

    pub fn set_trading_enabled(ctx: Context<OwnerAction>, enabled: bool) -> Result<()> {
        instructions::admin::set_trading_enabled(ctx, enabled)
    }

    pub fn set_blacklisted(
        ctx: Context<SetBlacklisted>,
        wallet: Pubkey,
        blacklisted: bool,
    ) -> Result<()> {
        instructions::set_blacklisted::set_blacklisted(ctx, wallet, blacklisted)
    }

    pub fn transfer_cldx(ctx: Context<TransferCldx>, amount: u64) -> Result<()> {
        instructions::transfer_cldx::transfer_cldx(ctx, amount)
    }

    pub fn initialize_vesting(
        ctx: Context<InitializeVesting>,
        vesting_duration_months: u8,
        beneficiary: Pubkey,
        total_allocation: u64,
    ) -> Result<()> {
        instructions::initialize_vesting::initialize_vesting(
            ctx,
            vesting_duration_months,
            beneficiary,
            total_allocation,
        )
    }

    pub fn pause(ctx: Context<Pause>) -> Result<()> {
        instructions::pause::pause(ctx)
    }

    pub fn unpause(ctx: Context<Unpause>) -> Result<()> {
        instructions::unpause::unpause(ctx)
    }

    pub fn release(ctx: Context<Release>, beneficiary: Pubkey) -> Result<()> {
        instructions::release::release(ctx, beneficiary)
    }

    pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>, beneficiary: Pubkey) -> Result<()> {
        instructions::emit_vesting_quote::emit_vesting_quote(ctx, beneficiary)
    }

    pub fn approve_eco_wallet(ctx: Context<ApproveEcoWallet>, wallet: Pubkey) -> Result<()> {
        instructions::eco_wallets::approve_eco_wallet(ctx, wallet)
    }

    pub fn remove_eco_wallet(ctx: Context<RemoveEcoWallet>, wallet: Pubkey) -> Result<()> {
        instructions::eco_wallets::remove_eco_wallet(ctx, wallet)
    }

    pub fn swap_cldx_to_eco(ctx: Context<SwapTokens>, amount: u64) -> Result<()> {
        instructions::swap::swap_cldx_to_eco(ctx, amount)
    }

    pub fn swap_eco_to_cldx(ctx: Context<SwapTokens>, amount: u64) -> Result<()> {
        instructions::swap::swap_eco_to_cldx(ctx, amount)
    }

    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens::deposit_tokens(ctx, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::withdraw::withdraw(ctx, amount)
    }

    pub fn withdraw_tokens(ctx: Context<WithdrawTokens>, amount: u64) -> Result<()> {
        instructions::withdraw_tokens::withdraw_tokens(ctx, amount)
    }

    pub fn withdraw_native(ctx: Context<WithdrawNative>, amount: u64) -> Result<()> {
        instructions::withdraw_native::withdraw_native(ctx, amount)
    }
}
