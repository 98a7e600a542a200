use anchor_lang::prelude::*;

/// Error codes surfaced by the treasury ledger and its program instructions.
#[error_code]
pub enum TreasuryError {
    #[msg("Unauthorized: caller is not the owner")]
    Unauthorized,

    #[msg("An address is blacklisted")]
    Blacklisted,

    #[msg("Trading is not enabled yet")]
    TradingDisabled,

    #[msg("Vesting release is paused")]
    Paused,

    #[msg("Vesting release is not paused")]
    NotPaused,

    #[msg("Invalid vesting duration")]
    InvalidDuration,

    #[msg("Vesting schedule index out of range")]
    IndexOutOfRange,

    #[msg("No vested tokens are releasable")]
    NothingToRelease,

    #[msg("Insufficient token balance")]
    InsufficientBalance,

    #[msg("Insufficient contract balance")]
    InsufficientContractBalance,

    #[msg("Token transfer failed")]
    TransferFailed,

    #[msg("Wallet is not an approved eco wallet")]
    WalletNotApproved,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Allocation is too small for the number of release units")]
    InvalidAllocation,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Ledger capacity exceeded")]
    CapacityExceeded,

    #[msg("Token account for principal was not provided")]
    UnknownTokenAccount,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Ledger state is unavailable")]
    LedgerUnavailable,
}
