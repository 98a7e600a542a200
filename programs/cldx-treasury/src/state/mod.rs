pub mod config;
pub mod schedule;
pub mod treasury_state;

pub use config::*;
pub use schedule::*;
pub use treasury_state::*;
