use anchor_lang::prelude::*;

use crate::constants::VAULT_SEED;
use crate::error::TreasuryError;
use crate::state::{TreasuryConfig, VestingSchedule};

/// Swap allow-list entry; `marker` is never 0 for a stored entry.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct EcoApproval {
    pub wallet: Pubkey,
    pub marker: u64,
}

impl EcoApproval {
    pub const SIZE: usize = 32 + 8;
}

/// Singleton treasury state PDA. Every ledger operation takes it by reference.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct TreasuryState {
    /// Only principal allowed to call privileged operations.
    pub owner: Pubkey,
    /// The ledger's own principal (the state PDA, authority of every vault).
    pub treasury: Pubkey,
    pub beneficiary_address: Pubkey,
    /// Exempt from the trading switch; `Pubkey::default()` when unset.
    pub presale_address: Pubkey,
    /// The vesting token.
    pub cldx_mint: Pubkey,
    pub eco_mint: Pubkey,
    /// Blocks `release` only.
    pub paused: bool,
    pub trading_enabled: bool,
    pub bump: u8,
    pub config: TreasuryConfig,
    /// Sum of `total_allocation - released` over all schedules.
    pub vesting_schedules_total_amount: u128,
    /// Last eco approval marker handed out.
    pub approval_nonce: u64,
    pub schedules: Vec<VestingSchedule>,
    pub blacklist: Vec<Pubkey>,
    pub eco_wallets: Vec<EcoApproval>,
}

impl TreasuryState {
    pub const FIXED_SIZE: usize =
        32 + // owner
        32 + // treasury
        32 + // beneficiary_address
        32 + // presale_address
        32 + // cldx_mint
        32 + // eco_mint
        1 +  // paused
        1 +  // trading_enabled
        1 +  // bump
        TreasuryConfig::SIZE +
        16 + // vesting_schedules_total_amount
        8 +  // approval_nonce
        4 +  // schedules vec header
        4 +  // blacklist vec header
        4;   // eco_wallets vec header

    /// Account space (discriminator included) for the given collection lengths.
    pub const fn space(schedules: usize, blacklisted: usize, eco_wallets: usize) -> usize {
        8 + Self::FIXED_SIZE
            + schedules * VestingSchedule::SIZE
            + blacklisted * 32
            + eco_wallets * EcoApproval::SIZE
    }

    pub fn new(
        owner: Pubkey,
        treasury: Pubkey,
        beneficiary_address: Pubkey,
        cldx_mint: Pubkey,
        eco_mint: Pubkey,
        bump: u8,
        config: TreasuryConfig,
    ) -> Result<Self> {
        require!(owner != Pubkey::default(), TreasuryError::InvalidPubkey);
        require!(treasury != Pubkey::default(), TreasuryError::InvalidPubkey);
        require!(
            beneficiary_address != Pubkey::default(),
            TreasuryError::InvalidPubkey
        );
        require!(cldx_mint != eco_mint, TreasuryError::InvalidTokenMint);
        config.validate()?;

        Ok(Self {
            owner,
            treasury,
            beneficiary_address,
            presale_address: Pubkey::default(),
            cldx_mint,
            eco_mint,
            paused: false,
            trading_enabled: false,
            bump,
            config,
            vesting_schedules_total_amount: 0,
            approval_nonce: 0,
            schedules: Vec::new(),
            blacklist: Vec::new(),
            eco_wallets: Vec::new(),
        })
    }

    /// Canonical treasury vault PDA for `mint`.
    pub fn vault_address(&self, mint: &Pubkey) -> Pubkey {
        Pubkey::find_program_address(
            &[VAULT_SEED, self.treasury.as_ref(), mint.as_ref()],
            &crate::ID,
        )
        .0
    }

    pub fn current_space(&self) -> usize {
        Self::space(
            self.schedules.len(),
            self.blacklist.len(),
            self.eco_wallets.len(),
        )
    }

    /// Space once a grant of `months` has been appended.
    pub fn space_after_grant(&self, months: u8) -> usize {
        let added = months as usize * self.config.release_units_per_month as usize;
        Self::space(
            self.schedules.len() + added,
            self.blacklist.len(),
            self.eco_wallets.len(),
        )
    }

    /// Space once `wallet` has been added to or removed from the blacklist.
    pub fn space_after_blacklist(&self, wallet: &Pubkey, blacklisted: bool) -> usize {
        let listed = self.is_blacklisted(wallet);
        let len = match (listed, blacklisted) {
            (false, true) => self.blacklist.len() + 1,
            (true, false) => self.blacklist.len() - 1,
            _ => self.blacklist.len(),
        };
        Self::space(self.schedules.len(), len, self.eco_wallets.len())
    }

    /// Space once `wallet` has been approved for swaps.
    pub fn space_after_approval(&self, wallet: &Pubkey) -> usize {
        let len = if self.eco_approval_wallet(wallet) == 0 {
            self.eco_wallets.len() + 1
        } else {
            self.eco_wallets.len()
        };
        Self::space(self.schedules.len(), self.blacklist.len(), len)
    }

    /// Space once `wallet` has been removed from the swap allow-list.
    pub fn space_after_removal(&self, wallet: &Pubkey) -> usize {
        let len = if self.eco_approval_wallet(wallet) == 0 {
            self.eco_wallets.len()
        } else {
            self.eco_wallets.len() - 1
        };
        Self::space(self.schedules.len(), self.blacklist.len(), len)
    }
}
