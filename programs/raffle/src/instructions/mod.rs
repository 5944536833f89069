pub use activate_raffle::*;
pub use buy_tickets::*;
pub use cancel_raffle::*;
pub use close_raffle::*;
pub use create_raffle::*;
pub use fulfill_draw::*;
pub use init_config::*;
pub use init_ticket_position::*;
pub use pause_raffle::*;
pub use pay_winner::*;
pub use refund_position::*;
pub use request_draw::*;
pub use withdraw_protocol_fee::*;

pub mod activate_raffle;
pub mod buy_tickets;
pub mod cancel_raffle;
pub mod close_raffle;
pub mod create_raffle;
pub mod fulfill_draw;
pub mod init_config;
pub mod init_ticket_position;
pub mod pause_raffle;
pub mod pay_winner;
pub mod refund_position;
pub mod request_draw;
pub mod withdraw_protocol_fee;
