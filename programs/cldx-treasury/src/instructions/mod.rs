pub mod admin;
pub mod deposit_tokens;
pub mod eco_wallets;
pub mod emit_vesting_quote;
pub mod initialize_treasury;
pub mod initialize_vesting;
pub mod pause;
pub mod release;
pub mod set_blacklisted;
pub mod swap;
pub mod transfer_cldx;
pub mod unpause;
pub mod withdraw;
pub mod withdraw_native;
pub mod withdraw_tokens;

pub use admin::*;
pub use deposit_tokens::*;
pub use eco_wallets::*;
pub use emit_vesting_quote::*;
pub use initialize_treasury::*;
pub use initialize_vesting::*;
pub use pause::*;
pub use release::*;
pub use set_blacklisted::*;
pub use swap::*;
pub use transfer_cldx::*;
pub use unpause::*;
pub use withdraw::*;
pub use withdraw_native::*;
pub use withdraw_tokens::*;
