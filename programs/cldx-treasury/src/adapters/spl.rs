use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount, Transfer};

use crate::constants::BURN_ADDRESS;
use crate::error::TreasuryError;
use crate::ledger::TokenService;

struct Holding<'info> {
    owner: Pubkey,
    account: AccountInfo<'info>,
    /// Signer able to move funds out of `account`; `None` for receive-only holdings.
    authority: Option<AccountInfo<'info>>,
    /// Tracked locally so balances stay current across CPIs in one instruction.
    amount: u64,
}

/// [`TokenService`] over SPL token accounts passed to one instruction.
///
/// Principals are resolved to token accounts registered with
/// [`with_treasury`](Self::with_treasury) and [`with_holding`](Self::with_holding).
/// Sending to [`BURN_ADDRESS`] burns instead of transferring.
pub struct SplTokenService<'a, 'info> {
    token_program: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    mint_key: Pubkey,
    treasury: Pubkey,
    signer_seeds: &'a [&'a [&'a [u8]]],
    holdings: Vec<Holding<'info>>,
}

impl<'a, 'info> SplTokenService<'a, 'info> {
    pub fn new(token_program: &Program<'info, Token>, mint: &Account<'info, Mint>) -> Self {
        Self {
            token_program: token_program.to_account_info(),
            mint: mint.to_account_info(),
            mint_key: mint.key(),
            treasury: Pubkey::default(),
            signer_seeds: &[],
            holdings: Vec::new(),
        }
    }

    /// Registers the treasury vault, moved by the treasury PDA under `signer_seeds`.
    pub fn with_treasury(
        mut self,
        treasury: &AccountInfo<'info>,
        vault: &Account<'info, TokenAccount>,
        signer_seeds: &'a [&'a [&'a [u8]]],
    ) -> Result<Self> {
        self.treasury = treasury.key();
        self.signer_seeds = signer_seeds;
        self.with_holding(treasury.key(), vault, Some(treasury.clone()))
    }

    pub fn with_holding(
        mut self,
        owner: Pubkey,
        account: &Account<'info, TokenAccount>,
        authority: Option<AccountInfo<'info>>,
    ) -> Result<Self> {
        require_keys_eq!(account.mint, self.mint_key, TreasuryError::InvalidTokenMint);
        require_keys_eq!(account.owner, owner, TreasuryError::InvalidTokenAccount);
        if let Some(authority) = &authority {
            require_keys_eq!(authority.key(), owner, TreasuryError::InvalidTokenAccount);
        }
        self.holdings.push(Holding {
            owner,
            account: account.to_account_info(),
            authority,
            amount: account.amount,
        });
        Ok(self)
    }

    fn position(&self, owner: &Pubkey) -> Result<usize> {
        let index = self
            .holdings
            .iter()
            .position(|h| h.owner == *owner)
            .ok_or(TreasuryError::UnknownTokenAccount)?;
        Ok(index)
    }
}

impl TokenService for SplTokenService<'_, '_> {
    fn mint(&self) -> Pubkey {
        self.mint_key
    }

    fn balance_of(&self, account: &Pubkey) -> Result<u128> {
        let index = self.position(account)?;
        Ok(self.holdings[index].amount as u128)
    }

    fn transfer(&mut self, to: &Pubkey, amount: u128) -> Result<bool> {
        let treasury = self.treasury;
        self.transfer_from(&treasury, to, amount)
    }

    fn transfer_from(&mut self, from: &Pubkey, to: &Pubkey, amount: u128) -> Result<bool> {
        let amount = u64::try_from(amount).map_err(|_| TreasuryError::MathOverflow)?;
        let from_index = self.position(from)?;
        let source = &self.holdings[from_index];
        if source.amount < amount {
            return Ok(false);
        }
        let authority = source
            .authority
            .clone()
            .ok_or(TreasuryError::Unauthorized)?;
        let source_account = source.account.clone();
        let seeds: &[&[&[u8]]] = if *from == self.treasury {
            self.signer_seeds
        } else {
            &[]
        };

        let to_index = if *to == BURN_ADDRESS {
            token::burn(
                CpiContext::new_with_signer(
                    self.token_program.clone(),
                    Burn {
                        mint: self.mint.clone(),
                        from: source_account,
                        authority,
                    },
                    seeds,
                ),
                amount,
            )?;
            None
        } else {
            let to_index = self.position(to)?;
            token::transfer(
                CpiContext::new_with_signer(
                    self.token_program.clone(),
                    Transfer {
                        from: source_account,
                        to: self.holdings[to_index].account.clone(),
                        authority,
                    },
                    seeds,
                ),
                amount,
            )?;
            Some(to_index)
        };

        self.holdings[from_index].amount -= amount;
        if let Some(i) = to_index {
            self.holdings[i].amount = self.holdings[i]
                .amount
                .checked_add(amount)
                .ok_or(TreasuryError::MathOverflow)?;
        }
        Ok(true)
    }
}
