pub use config::*;
pub use referral::*;
pub use stake::*;
pub use staker::*;
pub use vault::*;
pub use withdrawal::*;

pub mod config;
pub mod referral;
pub mod stake;
pub mod staker;
pub mod vault;
pub mod withdrawal;
