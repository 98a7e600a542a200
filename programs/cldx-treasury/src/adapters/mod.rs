//! On-chain [`TokenService`](crate::ledger::TokenService) implementations.

pub mod native;
pub mod spl;

pub use native::*;
pub use spl::*;
