use uint::construct_uint;

use crate::error::TreasuryError;

construct_uint! {
    /// 256-bit unsigned integer.
    pub struct U256(4);
}

/// Returns `amount * numerator / denominator`, computed in 256 bits.
pub fn proportional(amount: u128, numerator: u128, denominator: u128) -> Result<u128, TreasuryError> {
    if denominator == 0 {
        return Err(TreasuryError::MathOverflow);
    }
    let v = U256::from(amount) * U256::from(numerator) / U256::from(denominator);
    if v > U256::from(u128::MAX) {
        return Err(TreasuryError::MathOverflow);
    }
    Ok(v.as_u128())
}
