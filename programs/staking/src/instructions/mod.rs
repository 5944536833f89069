pub use complete_stake::*;
pub use create_stake::*;
pub use create_withdrawal::*;
pub use fund_stake::*;
pub use init_staker::*;
pub use init_staking_config::*;
pub use register_referrer::*;
pub use settle_withdrawal::*;

pub mod complete_stake;
pub mod create_stake;
pub mod create_withdrawal;
pub mod fund_stake;
pub mod init_staker;
pub mod init_staking_config;
pub mod register_referrer;
pub mod settle_withdrawal;
