pub use config::*;
pub use entry::*;
pub use raffle::*;
pub use ticket_position::*;
pub use treasury::*;

pub mod config;
pub mod entry;
pub mod raffle;
pub mod ticket_position;
pub mod treasury;
