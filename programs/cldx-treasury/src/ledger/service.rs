use std::collections::BTreeMap;
use std::sync::RwLock;

use anchor_lang::prelude::*;

use crate::error::TreasuryError;
use crate::ledger::clock::TimeSource;
use crate::ledger::token::TokenService;
use crate::state::{SwapRate, TreasuryState, VestingSchedule};

/// Everything one treasury transaction may touch.
#[derive(Clone, Debug)]
pub struct Ledger<T> {
    pub state: TreasuryState,
    pub cldx: T,
    pub eco: T,
    pub native: T,
    /// Any further tokens the treasury holds, keyed by mint.
    pub others: BTreeMap<Pubkey, T>,
}

impl<T: TokenService> Ledger<T> {
    pub fn new(state: TreasuryState, cldx: T, eco: T, native: T) -> Self {
        Self {
            state,
            cldx,
            eco,
            native,
            others: BTreeMap::new(),
        }
    }

    pub fn with_token(mut self, token: T) -> Self {
        self.others.insert(token.mint(), token);
        self
    }

    fn token(&self, mint: &Pubkey) -> Result<&T> {
        if *mint == self.state.cldx_mint {
            Ok(&self.cldx)
        } else if *mint == self.state.eco_mint {
            Ok(&self.eco)
        } else {
            Ok(self.others.get(mint).ok_or(TreasuryError::InvalidTokenMint)?)
        }
    }

    fn token_parts(&mut self, mint: &Pubkey) -> Result<(&TreasuryState, &mut T)> {
        let Ledger {
            state,
            cldx,
            eco,
            others,
            ..
        } = self;
        let token = if *mint == state.cldx_mint {
            cldx
        } else if *mint == state.eco_mint {
            eco
        } else {
            others.get_mut(mint).ok_or(TreasuryError::InvalidTokenMint)?
        };
        Ok((&*state, token))
    }
}

/// Serializes treasury transactions for off-chain hosts.
///
/// Writers hold the lock for the whole transaction and roll the ledger back to
/// its pre-transaction snapshot on error; queries share the read lock.
#[derive(Debug)]
pub struct TreasuryService<T, C> {
    ledger: RwLock<Ledger<T>>,
    clock: C,
}

impl<T, C> TreasuryService<T, C>
where
    T: TokenService + Clone,
    C: TimeSource,
{
    pub fn new(ledger: Ledger<T>, clock: C) -> Self {
        Self {
            ledger: RwLock::new(ledger),
            clock,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn current_time(&self) -> Result<i64> {
        self.clock.now()
    }

    fn execute<R>(&self, op: impl FnOnce(&mut Ledger<T>, i64) -> Result<R>) -> Result<R> {
        let now = self.clock.now()?;
        let mut ledger = self
            .ledger
            .write()
            .map_err(|_| error!(TreasuryError::LedgerUnavailable))?;
        let snapshot = ledger.clone();
        let result = op(&mut *ledger, now);
        if result.is_err() {
            *ledger = snapshot;
        }
        result
    }

    fn query<R>(&self, op: impl FnOnce(&Ledger<T>, i64) -> Result<R>) -> Result<R> {
        let now = self.clock.now()?;
        let ledger = self
            .ledger
            .read()
            .map_err(|_| error!(TreasuryError::LedgerUnavailable))?;
        op(&*ledger, now)
    }

    pub fn snapshot(&self) -> Result<Ledger<T>> {
        self.query(|l, _| Ok(l.clone()))
    }

    pub fn transfer_ownership(&self, caller: &Pubkey, new_owner: Pubkey) -> Result<()> {
        self.execute(|l, _| l.state.transfer_ownership(caller, new_owner))
    }

    pub fn set_beneficiary_address(&self, caller: &Pubkey, address: Pubkey) -> Result<()> {
        self.execute(|l, _| l.state.set_beneficiary_address(caller, address))
    }

    pub fn setup_presale_address(&self, caller: &Pubkey, address: Pubkey) -> Result<()> {
        self.execute(|l, _| l.state.setup_presale_address(caller, address))
    }

    pub fn set_swap_rate(&self, caller: &Pubkey, rate: SwapRate) -> Result<()> {
        self.execute(|l, _| l.state.set_swap_rate(caller, rate))
    }

    pub fn set_blacklisted(&self, caller: &Pubkey, address: Pubkey, flag: bool) -> Result<()> {
        self.execute(|l, _| l.state.set_blacklisted(caller, address, flag))
    }

    pub fn is_blacklisted(&self, address: &Pubkey) -> Result<bool> {
        self.query(|l, _| Ok(l.state.is_blacklisted(address)))
    }

    pub fn set_trading_enabled(&self, caller: &Pubkey, enabled: bool) -> Result<()> {
        self.execute(|l, _| l.state.set_trading_enabled(caller, enabled))
    }

    pub fn is_trading_enabled(&self) -> Result<bool> {
        self.query(|l, _| Ok(l.state.trading_enabled))
    }

    pub fn transfer(&self, caller: &Pubkey, to: &Pubkey, amount: u128) -> Result<()> {
        self.execute(|l, _| l.state.transfer(&mut l.cldx, caller, to, amount))
    }

    pub fn initialize_vesting(
        &self,
        caller: &Pubkey,
        months: u8,
        beneficiary: Pubkey,
        total_allocation: u128,
    ) -> Result<()> {
        self.execute(|l, now| {
            l.state
                .initialize_vesting(&l.cldx, caller, now, months, beneficiary, total_allocation)
        })
    }

    pub fn vesting_schedules_count(&self) -> Result<u64> {
        self.query(|l, _| Ok(l.state.vesting_schedules_count()))
    }

    pub fn vesting_schedule(&self, index: u64) -> Result<VestingSchedule> {
        self.query(|l, _| l.state.vesting_schedule(index).copied())
    }

    pub fn compute_releasable_amount(&self, beneficiary: &Pubkey) -> Result<u128> {
        self.query(|l, now| l.state.compute_releasable_amount(beneficiary, now))
    }

    pub fn release(&self, caller: &Pubkey, beneficiary: &Pubkey) -> Result<u128> {
        self.execute(|l, now| l.state.release(&mut l.cldx, caller, beneficiary, now))
    }

    pub fn pause(&self, caller: &Pubkey) -> Result<()> {
        self.execute(|l, _| l.state.pause(caller))
    }

    pub fn unpause(&self, caller: &Pubkey) -> Result<()> {
        self.execute(|l, _| l.state.unpause(caller))
    }

    pub fn is_paused(&self) -> Result<bool> {
        self.query(|l, _| Ok(l.state.paused))
    }

    pub fn withdrawable_amount(&self) -> Result<u128> {
        self.query(|l, _| l.state.withdrawable_amount(&l.cldx))
    }

    pub fn approve_eco_wallet(&self, caller: &Pubkey, wallet: Pubkey) -> Result<u64> {
        self.execute(|l, _| l.state.approve_eco_wallet(caller, wallet))
    }

    pub fn eco_approval_wallet(&self, wallet: &Pubkey) -> Result<u64> {
        self.query(|l, _| Ok(l.state.eco_approval_wallet(wallet)))
    }

    pub fn remove_eco_wallet(&self, caller: &Pubkey, wallet: &Pubkey) -> Result<()> {
        self.execute(|l, _| l.state.remove_eco_wallet(caller, wallet))
    }

    pub fn swap_cldx_to_eco(&self, caller: &Pubkey, amount: u128) -> Result<u128> {
        self.execute(|l, _| {
            l.state
                .swap_cldx_to_eco(&mut l.cldx, &mut l.eco, caller, amount)
        })
    }

    pub fn swap_eco_to_cldx(&self, caller: &Pubkey, amount: u128) -> Result<u128> {
        self.execute(|l, _| {
            l.state
                .swap_eco_to_cldx(&mut l.cldx, &mut l.eco, caller, amount)
        })
    }

    pub fn balance_of(&self, mint: &Pubkey, account: &Pubkey) -> Result<u128> {
        self.query(|l, _| l.token(mint)?.balance_of(account))
    }

    pub fn deposit(&self, mint: &Pubkey, caller: &Pubkey, amount: u128) -> Result<()> {
        self.execute(|l, _| {
            let (state, token) = l.token_parts(mint)?;
            state.deposit(token, caller, amount)
        })
    }

    pub fn withdraw(&self, caller: &Pubkey, amount: u128) -> Result<()> {
        self.execute(|l, _| l.state.withdraw(&mut l.cldx, caller, amount))
    }

    pub fn withdraw_tokens(
        &self,
        mint: &Pubkey,
        caller: &Pubkey,
        to: &Pubkey,
        amount: u128,
    ) -> Result<()> {
        self.execute(|l, _| {
            let (state, token) = l.token_parts(mint)?;
            state.withdraw_tokens(token, caller, to, amount)
        })
    }

    pub fn withdraw_native(&self, caller: &Pubkey, to: &Pubkey, amount: u128) -> Result<()> {
        self.execute(|l, _| l.state.withdraw_native(&mut l.native, caller, to, amount))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use crate::constants::{BURN_ADDRESS, SECONDS_PER_DAY};
    use crate::ledger::fixtures::*;
    use crate::ledger::MemoryToken;

    #[test]
    fn failed_transaction_rolls_back_everything() {
        let svc = service(tokens(100));
        svc.initialize_vesting(&owner(), 12, beneficiary(), tokens(100))
            .unwrap();
        let before = svc.snapshot().unwrap();

        svc.clock().advance(400 * SECONDS_PER_DAY);
        svc.execute::<()>(|l, now| {
            l.state.release(&mut l.cldx, &beneficiary(), &beneficiary(), now)?;
            err!(TreasuryError::TransferFailed)
        })
        .unwrap_err();

        let after = svc.snapshot().unwrap();
        assert_eq!(after.state, before.state);
        assert_eq!(after.cldx, before.cldx);
        assert_eq!(svc.balance_of(&cldx_mint(), &beneficiary()).unwrap(), 0);
    }

    #[test]
    fn full_lifecycle_through_service() {
        let svc = service(tokens(150));
        svc.initialize_vesting(&owner(), 12, beneficiary(), tokens(100))
            .unwrap();
        assert_eq!(svc.vesting_schedules_count().unwrap(), 84);
        assert_eq!(svc.withdrawable_amount().unwrap(), tokens(50));
        assert_eq!(svc.compute_releasable_amount(&beneficiary()).unwrap(), 0);

        svc.clock().advance(30 * SECONDS_PER_DAY);
        let first = svc.release(&beneficiary(), &beneficiary()).unwrap();
        assert!(first > 0);
        assert_eq!(
            svc.release(&beneficiary(), &beneficiary()).unwrap_err(),
            TreasuryError::NothingToRelease.into()
        );

        svc.pause(&owner()).unwrap();
        assert!(svc.is_paused().unwrap());
        svc.clock().advance(400 * SECONDS_PER_DAY);
        assert!(svc.release(&beneficiary(), &beneficiary()).is_err());
        svc.unpause(&owner()).unwrap();

        svc.release(&owner(), &beneficiary()).unwrap();
        assert_eq!(
            svc.balance_of(&cldx_mint(), &beneficiary()).unwrap(),
            tokens(100)
        );

        svc.withdraw(&owner(), tokens(50)).unwrap();
        assert_eq!(svc.withdrawable_amount().unwrap(), 0);
        let last = svc.vesting_schedule(83).unwrap();
        assert!(last.is_exhausted());
    }

    #[test]
    fn swap_round_trip_through_service() {
        let mut ledger = ledger(tokens(20));
        ledger.cldx.mint_to(&alice(), tokens(10)).unwrap();
        ledger.eco.mint_to(&treasury(), tokens(10)).unwrap();
        let svc = TreasuryService::new(ledger, crate::ledger::ManualClock::new(START));

        assert!(svc.swap_cldx_to_eco(&alice(), tokens(3)).is_err());
        let marker = svc.approve_eco_wallet(&owner(), alice()).unwrap();
        assert_eq!(svc.eco_approval_wallet(&alice()).unwrap(), marker);

        svc.swap_cldx_to_eco(&alice(), tokens(3)).unwrap();
        assert_eq!(svc.balance_of(&cldx_mint(), &BURN_ADDRESS).unwrap(), tokens(3));
        svc.swap_eco_to_cldx(&alice(), tokens(3)).unwrap();
        assert_eq!(svc.balance_of(&cldx_mint(), &alice()).unwrap(), tokens(10));

        svc.remove_eco_wallet(&owner(), &alice()).unwrap();
        assert_eq!(svc.eco_approval_wallet(&alice()).unwrap(), 0);
    }

    #[test]
    fn refused_eco_payout_restores_burned_cldx() {
        let mut ledger = ledger(0);
        ledger.cldx.mint_to(&alice(), tokens(10)).unwrap();
        ledger.eco.mint_to(&treasury(), tokens(10)).unwrap();
        ledger.eco.set_frozen(true);
        let svc = TreasuryService::new(ledger, crate::ledger::ManualClock::new(START));
        svc.approve_eco_wallet(&owner(), alice()).unwrap();

        assert_eq!(
            svc.swap_cldx_to_eco(&alice(), tokens(3)).unwrap_err(),
            TreasuryError::TransferFailed.into()
        );
        assert_eq!(svc.balance_of(&cldx_mint(), &alice()).unwrap(), tokens(10));
        assert_eq!(svc.balance_of(&cldx_mint(), &BURN_ADDRESS).unwrap(), 0);
        assert_eq!(svc.balance_of(&eco_mint(), &alice()).unwrap(), 0);
    }

    #[test]
    fn gate_and_admin_through_service() {
        let svc = service(0);
        assert!(!svc.is_trading_enabled().unwrap());

        svc.set_blacklisted(&owner(), alice(), true).unwrap();
        assert!(svc.is_blacklisted(&alice()).unwrap());
        svc.set_trading_enabled(&owner(), true).unwrap();
        svc.setup_presale_address(&owner(), presale()).unwrap();
        svc.set_beneficiary_address(&owner(), bob()).unwrap();
        svc.set_swap_rate(&owner(), SwapRate::PAR).unwrap();
        svc.transfer_ownership(&owner(), bob()).unwrap();
        assert_eq!(
            svc.pause(&owner()).unwrap_err(),
            TreasuryError::Unauthorized.into()
        );

        let l = svc.snapshot().unwrap();
        assert_eq!(l.state.owner, bob());
        assert_eq!(l.state.beneficiary_address, bob());
        assert_eq!(l.state.presale_address, presale());
        assert_eq!(
            svc.transfer(&alice(), &bob(), 1).unwrap_err(),
            TreasuryError::Blacklisted.into()
        );
    }

    #[test]
    fn deposit_and_withdraw_other_token() {
        let other_mint = key(30);
        let mut other = MemoryToken::new(other_mint, treasury());
        other.mint_to(&owner(), 1_000).unwrap();
        let svc = TreasuryService::new(
            ledger(0).with_token(other),
            crate::ledger::ManualClock::new(START),
        );

        svc.deposit(&other_mint, &owner(), 1_000).unwrap();
        svc.withdraw_tokens(&other_mint, &owner(), &bob(), 1_000)
            .unwrap();
        assert_eq!(svc.balance_of(&other_mint, &bob()).unwrap(), 1_000);
        assert_eq!(svc.balance_of(&other_mint, &treasury()).unwrap(), 0);
        assert_eq!(
            svc.deposit(&key(31), &owner(), 1).unwrap_err(),
            TreasuryError::InvalidTokenMint.into()
        );
    }

    #[test]
    fn native_withdrawal_through_service() {
        let mut ledger = ledger(0);
        ledger.native.mint_to(&treasury(), 500).unwrap();
        let svc = TreasuryService::new(ledger, crate::ledger::ManualClock::new(START));
        svc.withdraw_native(&owner(), &bob(), 200).unwrap();
        assert!(svc.withdraw_native(&owner(), &bob(), 301).is_err());
        assert_eq!(svc.snapshot().unwrap().native.balance_of(&bob()).unwrap(), 200);
        assert_eq!(svc.current_time().unwrap(), START);
    }

    #[test]
    fn concurrent_releases_pay_out_once() {
        let svc = Arc::new(service(tokens(100)));
        svc.initialize_vesting(&owner(), 12, beneficiary(), tokens(100))
            .unwrap();
        svc.clock().advance(400 * SECONDS_PER_DAY);

        let paid: Vec<Result<u128>> = thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let svc = Arc::clone(&svc);
                    s.spawn(move || svc.release(&beneficiary(), &beneficiary()))
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let ok: Vec<u128> = paid.iter().filter_map(|r| r.as_ref().ok().copied()).collect();
        assert_eq!(ok, vec![tokens(100)]);
        assert_eq!(
            svc.balance_of(&cldx_mint(), &beneficiary()).unwrap(),
            tokens(100)
        );
    }

    #[test]
    fn readers_run_alongside_each_other() {
        let svc = service(tokens(10));
        thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    assert_eq!(svc.withdrawable_amount().unwrap(), tokens(10));
                    assert_eq!(svc.eco_approval_wallet(&alice()).unwrap(), 0);
                });
            }
        });
    }
}
