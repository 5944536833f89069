use anchor_lang::prelude::*;
use instructions::*;

pub mod error;
pub mod instructions;
pub mod selection;
pub mod state;

use state::RaffleKind;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod raffle_engine {
    use super::*;

    pub fn init_config(
        ctx: Context<InitConfig>,
        protocol_fee_bps: u16,
        min_participants: u64,
    ) -> Result<()> {
        instructions::init_config::init_config(ctx, protocol_fee_bps, min_participants)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn create_raffle(
        ctx: Context<CreateRaffle>,
        kind: RaffleKind,
        entry_price: u64,
        start_time: i64,
        end_time: i64,
        max_tickets_per_entrant: u64,
        winner_count: u8,
        min_participants: u64,
        allow_repeat_winners: bool,
    ) -> Result<()> {
        instructions::create_raffle::create_raffle(
            ctx,
            kind,
            entry_price,
            start_time,
            end_time,
            max_tickets_per_entrant,
            winner_count,
            min_participants,
            allow_repeat_winners,
        )
    }

    pub fn activate_raffle(ctx: Context<ActivateRaffle>) -> Result<()> {
        instructions::activate_raffle::activate_raffle(ctx)
    }

    pub fn pause_raffle(ctx: Context<TogglePause>) -> Result<()> {
        instructions::pause_raffle::pause_raffle(ctx)
    }

    pub fn resume_raffle(ctx: Context<TogglePause>) -> Result<()> {
        instructions::pause_raffle::resume_raffle(ctx)
    }

    pub fn init_ticket_position(ctx: Context<InitTicketPosition>) -> Result<()> {
        instructions::init_ticket_position::init_ticket_position(ctx)
    }

    pub fn buy_tickets(
        ctx: Context<BuyTickets>,
        ticket_count: u64,
        entry_seed: [u8; 8],
    ) -> Result<()> {
        instructions::buy_tickets::buy_tickets(ctx, ticket_count, entry_seed)
    }

    pub fn close_raffle(ctx: Context<CloseRaffle>) -> Result<()> {
        instructions::close_raffle::close_raffle(ctx)
    }

    pub fn request_draw(ctx: Context<RequestDraw>) -> Result<()> {
        instructions::request_draw::request_draw(ctx)
    }

    pub fn fulfill_draw<'info>(
        ctx: Context<'_, '_, 'info, 'info, FulfillDraw<'info>>,
    ) -> Result<()> {
        instructions::fulfill_draw::fulfill_draw(ctx)
    }

    pub fn pay_winner(ctx: Context<PayWinner>, winner_index: u8) -> Result<()> {
        instructions::pay_winner::pay_winner(ctx, winner_index)
    }

    pub fn withdraw_protocol_fee(ctx: Context<WithdrawProtocolFee>) -> Result<()> {
        instructions::withdraw_protocol_fee::withdraw_protocol_fee(ctx)
    }

    pub fn cancel_raffle(ctx: Context<CancelRaffle>) -> Result<()> {
        instructions::cancel_raffle::cancel_raffle(ctx)
    }

    pub fn emergency_cancel_draw(ctx: Context<CancelRaffle>) -> Result<()> {
        instructions::cancel_raffle::emergency_cancel_draw(ctx)
    }

    pub fn refund_position(ctx: Context<RefundPosition>) -> Result<()> {
        instructions::refund_position::refund_position(ctx)
    }
}
