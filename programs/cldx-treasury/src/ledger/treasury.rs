use anchor_lang::prelude::*;

use crate::constants::BURN_ADDRESS;
use crate::error::TreasuryError;
use crate::ledger::token::{ensure_transferred, TokenService};
use crate::state::TreasuryState;

impl TreasuryState {
    /// Moves `amount` of `caller`'s tokens into the treasury.
    pub fn deposit<T: TokenService>(&self, token: &mut T, caller: &Pubkey, amount: u128) -> Result<()> {
        require!(amount > 0, TreasuryError::InvalidAmount);
        require!(!self.is_blacklisted(caller), TreasuryError::Blacklisted);
        require!(
            token.balance_of(caller)? >= amount,
            TreasuryError::InsufficientBalance
        );
        ensure_transferred(token.transfer_from(caller, &self.treasury, amount)?)?;
        msg!("deposit: {} of {} from {}", amount, token.mint(), caller);
        Ok(())
    }

    /// Treasury balance of `token` the owner may take out. For CLDX this excludes
    /// unreleased vesting.
    pub fn available_balance<T: TokenService>(&self, token: &T) -> Result<u128> {
        if token.mint() == self.cldx_mint {
            self.withdrawable_amount(token)
        } else {
            token.balance_of(&self.treasury)
        }
    }

    pub fn withdraw_tokens<T: TokenService>(
        &self,
        token: &mut T,
        caller: &Pubkey,
        to: &Pubkey,
        amount: u128,
    ) -> Result<()> {
        self.assert_owner(caller)?;
        require!(amount > 0, TreasuryError::InvalidAmount);
        require!(*to != BURN_ADDRESS, TreasuryError::InvalidPubkey);
        require!(!self.is_blacklisted(to), TreasuryError::Blacklisted);
        require!(
            self.available_balance(token)? >= amount,
            TreasuryError::InsufficientContractBalance
        );
        ensure_transferred(token.transfer(to, amount)?)?;
        msg!("withdraw: {} of {} to {}", amount, token.mint(), to);
        Ok(())
    }

    /// Withdrawable CLDX to the owner.
    pub fn withdraw<T: TokenService>(&self, cldx: &mut T, caller: &Pubkey, amount: u128) -> Result<()> {
        require_keys_eq!(cldx.mint(), self.cldx_mint, TreasuryError::InvalidTokenMint);
        let owner = self.owner;
        self.withdraw_tokens(cldx, caller, &owner, amount)
    }

    /// Native currency held by the treasury; `native` reports only the spendable part.
    pub fn withdraw_native<T: TokenService>(
        &self,
        native: &mut T,
        caller: &Pubkey,
        to: &Pubkey,
        amount: u128,
    ) -> Result<()> {
        self.assert_owner(caller)?;
        require!(amount > 0, TreasuryError::InvalidAmount);
        require!(*to != BURN_ADDRESS, TreasuryError::InvalidPubkey);
        require!(!self.is_blacklisted(to), TreasuryError::Blacklisted);
        require!(
            native.balance_of(&self.treasury)? >= amount,
            TreasuryError::InsufficientContractBalance
        );
        ensure_transferred(native.transfer(to, amount)?)?;
        msg!("withdraw native: {} to {}", amount, to);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::fixtures::*;
    use crate::ledger::MemoryToken;

    #[test]
    fn owner_deposit_then_withdraw_tokens() {
        let st = new_state();
        let mut t = cldx();
        t.mint_to(&owner(), tokens(1_000)).unwrap();

        st.deposit(&mut t, &owner(), tokens(1_000)).unwrap();
        assert_eq!(t.balance_of(&treasury()).unwrap(), tokens(1_000));

        st.withdraw_tokens(&mut t, &owner(), &bob(), tokens(1_000))
            .unwrap();
        assert_eq!(t.balance_of(&bob()).unwrap(), tokens(1_000));
        assert_eq!(t.balance_of(&treasury()).unwrap(), 0);
    }

    #[test]
    fn deposit_checks_holder() {
        let mut st = new_state();
        let mut t = cldx();
        t.mint_to(&alice(), 5).unwrap();
        assert_eq!(
            st.deposit(&mut t, &alice(), 6).unwrap_err(),
            TreasuryError::InsufficientBalance.into()
        );
        st.set_blacklisted(&owner(), alice(), true).unwrap();
        assert_eq!(
            st.deposit(&mut t, &alice(), 5).unwrap_err(),
            TreasuryError::Blacklisted.into()
        );
    }

    #[test]
    fn cldx_withdrawals_stop_at_vesting_reserve() {
        let mut st = new_state();
        let mut t = funded_cldx(tokens(10));
        st.initialize_vesting(&t, &owner(), START, 1, beneficiary(), tokens(7))
            .unwrap();

        assert_eq!(
            st.withdraw(&mut t, &owner(), tokens(4)).unwrap_err(),
            TreasuryError::InsufficientContractBalance.into()
        );
        st.withdraw(&mut t, &owner(), tokens(3)).unwrap();
        assert_eq!(t.balance_of(&owner()).unwrap(), tokens(3));
        assert_eq!(t.balance_of(&treasury()).unwrap(), tokens(7));
    }

    #[test]
    fn other_tokens_are_bounded_by_holding() {
        let st = new_state();
        let mut other = MemoryToken::new(key(30), treasury());
        other.mint_to(&treasury(), 100).unwrap();
        assert_eq!(
            st.withdraw_tokens(&mut other, &owner(), &bob(), 101)
                .unwrap_err(),
            TreasuryError::InsufficientContractBalance.into()
        );
        st.withdraw_tokens(&mut other, &owner(), &bob(), 100).unwrap();
        assert_eq!(other.balance_of(&bob()).unwrap(), 100);
    }

    #[test]
    fn withdrawals_are_owner_only() {
        let st = new_state();
        let mut t = funded_cldx(tokens(10));
        let mut native = MemoryToken::new(native_mint(), treasury());
        native.mint_to(&treasury(), 1_000).unwrap();

        assert_eq!(
            st.withdraw_tokens(&mut t, &alice(), &alice(), 1).unwrap_err(),
            TreasuryError::Unauthorized.into()
        );
        assert_eq!(
            st.withdraw(&mut t, &alice(), 1).unwrap_err(),
            TreasuryError::Unauthorized.into()
        );
        assert_eq!(
            st.withdraw_native(&mut native, &alice(), &alice(), 1).unwrap_err(),
            TreasuryError::Unauthorized.into()
        );
        assert_eq!(t.balance_of(&treasury()).unwrap(), tokens(10));
    }

    #[test]
    fn withdrawals_to_blacklisted_recipient_fail() {
        let mut st = new_state();
        let mut t = funded_cldx(tokens(10));
        let mut native = MemoryToken::new(native_mint(), treasury());
        native.mint_to(&treasury(), 1_000).unwrap();
        st.set_blacklisted(&owner(), alice(), true).unwrap();

        assert_eq!(
            st.withdraw_tokens(&mut t, &owner(), &alice(), tokens(5))
                .unwrap_err(),
            TreasuryError::Blacklisted.into()
        );
        assert_eq!(
            st.withdraw_native(&mut native, &owner(), &alice(), 100)
                .unwrap_err(),
            TreasuryError::Blacklisted.into()
        );
        assert_eq!(t.balance_of(&alice()).unwrap(), 0);
        assert_eq!(native.balance_of(&alice()).unwrap(), 0);

        st.set_blacklisted(&owner(), owner(), true).unwrap();
        assert_eq!(
            st.withdraw(&mut t, &owner(), tokens(1)).unwrap_err(),
            TreasuryError::Blacklisted.into()
        );
        assert_eq!(t.balance_of(&treasury()).unwrap(), tokens(10));
    }

    #[test]
    fn native_withdrawal_is_bounded() {
        let st = new_state();
        let mut native = MemoryToken::new(native_mint(), treasury());
        native.mint_to(&treasury(), 1_000).unwrap();
        assert!(st.withdraw_native(&mut native, &owner(), &bob(), 1_001).is_err());
        st.withdraw_native(&mut native, &owner(), &bob(), 400).unwrap();
        assert_eq!(native.balance_of(&bob()).unwrap(), 400);
        assert_eq!(native.balance_of(&treasury()).unwrap(), 600);
    }
}
