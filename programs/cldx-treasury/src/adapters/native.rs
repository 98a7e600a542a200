use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::error::TreasuryError;
use crate::ledger::TokenService;

/// [`TokenService`] over the lamports of the program-owned treasury account.
///
/// The rent-exempt minimum of the treasury is never reported nor spendable.
pub struct LamportService<'info> {
    treasury: AccountInfo<'info>,
    reserve: u64,
    recipients: Vec<AccountInfo<'info>>,
}

impl<'info> LamportService<'info> {
    pub fn new(treasury: &AccountInfo<'info>) -> Result<Self> {
        let reserve = Rent::get()?.minimum_balance(treasury.data_len());
        Ok(Self {
            treasury: treasury.clone(),
            reserve,
            recipients: Vec::new(),
        })
    }

    pub fn with_recipient(mut self, recipient: &AccountInfo<'info>) -> Self {
        self.recipients.push(recipient.clone());
        self
    }

    fn spendable(&self) -> u64 {
        self.treasury.lamports().saturating_sub(self.reserve)
    }
}

impl TokenService for LamportService<'_> {
    fn mint(&self) -> Pubkey {
        system_program::ID
    }

    fn balance_of(&self, account: &Pubkey) -> Result<u128> {
        if *account == self.treasury.key() {
            return Ok(self.spendable() as u128);
        }
        let recipient = self
            .recipients
            .iter()
            .find(|r| r.key() == *account)
            .ok_or(TreasuryError::UnknownTokenAccount)?;
        Ok(recipient.lamports() as u128)
    }

    fn transfer(&mut self, to: &Pubkey, amount: u128) -> Result<bool> {
        let amount = u64::try_from(amount).map_err(|_| TreasuryError::MathOverflow)?;
        if self.spendable() < amount {
            return Ok(false);
        }
        let recipient = self
            .recipients
            .iter()
            .find(|r| r.key() == *to)
            .ok_or(TreasuryError::UnknownTokenAccount)?;

        let from_balance = self
            .treasury
            .lamports()
            .checked_sub(amount)
            .ok_or(TreasuryError::MathOverflow)?;
        let to_balance = recipient
            .lamports()
            .checked_add(amount)
            .ok_or(TreasuryError::MathOverflow)?;
        **self.treasury.try_borrow_mut_lamports()? = from_balance;
        **recipient.try_borrow_mut_lamports()? = to_balance;
        Ok(true)
    }

    /// Lamports only ever leave the treasury here; deposits are plain system transfers.
    fn transfer_from(&mut self, _from: &Pubkey, _to: &Pubkey, _amount: u128) -> Result<bool> {
        Ok(false)
    }
}
