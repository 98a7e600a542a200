//! Runtime-independent treasury engine.
//!
//! Operations are methods on [`TreasuryState`](crate::state::TreasuryState) that
//! reach tokens only through [`TokenService`] and take the current time as an
//! argument. Each one validates before moving tokens and mutates state only after
//! every transfer succeeded. Swaps move two tokens: a refused second leg leaves
//! the first one done, so callers rely on the enclosing transaction, or on
//! [`TreasuryService`], to undo it.

pub mod access;
pub mod clock;
pub mod gate;
pub mod service;
pub mod swap;
pub mod token;
pub mod treasury;
pub mod vesting;

#[cfg(test)]
pub(crate) mod fixtures;

pub use clock::*;
pub use service::*;
pub use token::*;
