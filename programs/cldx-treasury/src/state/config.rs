use anchor_lang::prelude::*;

use crate::constants::{
    DEFAULT_RELEASE_UNITS_PER_MONTH, MAX_RELEASE_UNITS_PER_MONTH, MAX_VESTING_MONTHS,
};
use crate::error::TreasuryError;
use crate::utils::math::proportional;

/// CLDX/ECO exchange rate: `cldx_units` CLDX trade for `eco_units` ECO.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapRate {
    pub cldx_units: u64,
    pub eco_units: u64,
}

impl SwapRate {
    pub const SIZE: usize = 8 + 8;

    pub const PAR: SwapRate = SwapRate {
        cldx_units: 1,
        eco_units: 1,
    };

    pub fn validate(&self) -> Result<()> {
        require!(
            self.cldx_units > 0 && self.eco_units > 0,
            TreasuryError::InvalidConfig
        );
        Ok(())
    }

    pub fn cldx_to_eco(&self, amount: u128) -> Result<u128> {
        Ok(proportional(
            amount,
            self.eco_units as u128,
            self.cldx_units as u128,
        )?)
    }

    pub fn eco_to_cldx(&self, amount: u128) -> Result<u128> {
        Ok(proportional(
            amount,
            self.cldx_units as u128,
            self.eco_units as u128,
        )?)
    }
}

/// Deployment configuration, fixed at `initialize_treasury` except for the swap rate.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreasuryConfig {
    /// Sub-schedules created per vesting month.
    pub release_units_per_month: u8,
    /// Grant-level cliff, counted in calendar months from the grant start.
    pub cliff_months: u8,
    pub swap_rate: SwapRate,
}

impl Default for TreasuryConfig {
    fn default() -> Self {
        Self {
            release_units_per_month: DEFAULT_RELEASE_UNITS_PER_MONTH,
            cliff_months: 0,
            swap_rate: SwapRate::PAR,
        }
    }
}

impl TreasuryConfig {
    pub const SIZE: usize = 1 + 1 + SwapRate::SIZE;

    pub fn validate(&self) -> Result<()> {
        require!(
            self.release_units_per_month > 0
                && self.release_units_per_month <= MAX_RELEASE_UNITS_PER_MONTH,
            TreasuryError::InvalidConfig
        );
        require!(
            self.cliff_months < MAX_VESTING_MONTHS,
            TreasuryError::InvalidConfig
        );
        self.swap_rate.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn par_rate_preserves_amounts() {
        let rate = SwapRate::PAR;
        assert_eq!(rate.cldx_to_eco(42).unwrap(), 42);
        assert_eq!(rate.eco_to_cldx(42).unwrap(), 42);
    }

    #[test]
    fn configured_rate_scales_both_directions() {
        let rate = SwapRate {
            cldx_units: 1,
            eco_units: 4,
        };
        assert_eq!(rate.cldx_to_eco(10).unwrap(), 40);
        assert_eq!(rate.eco_to_cldx(40).unwrap(), 10);
    }

    #[test]
    fn validate_rejects_degenerate_config() {
        assert!(TreasuryConfig::default().validate().is_ok());

        let mut cfg = TreasuryConfig::default();
        cfg.release_units_per_month = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = TreasuryConfig::default();
        cfg.cliff_months = MAX_VESTING_MONTHS;
        assert!(cfg.validate().is_err());

        let mut cfg = TreasuryConfig::default();
        cfg.swap_rate.eco_units = 0;
        assert!(cfg.validate().is_err());
    }
}
