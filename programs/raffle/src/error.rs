use anchor_lang::error_code;

#[error_code]
pub enum RaffleError {
    Overflow,
    InvalidTicketCount,
    InsufficientFunds,
    InvalidTreasury,
    OwnerMismatch,
    TransferFailed,
    #[msg("Entry price is outside the allowed bounds")]
    InvalidEntryPrice,
    #[msg("Protocol fee exceeds the allowed maximum")]
    InvalidProtocolFee,
    #[msg("Minimum participants must be greater than 0")]
    InvalidMinParticipants,
    #[msg("Winner count must be between 1 and the configured maximum")]
    InvalidWinnerCount,
    #[msg("Max tickets per participant must be greater than 0")]
    InvalidEntrantLimit,
    #[msg("Start time must be before end time")]
    InvalidTimeRange,
    #[msg("Raffle duration is outside the allowed bounds")]
    InvalidDuration,
    #[msg("End time must be in the future")]
    EndTimeInPast,
    #[msg("Only the program management authority can perform this operation")]
    NotManagementAuthority,
    #[msg("Only the payout authority can perform this operation")]
    NotPayoutAuthority,
    #[msg("Raffle is not accepting entries")]
    RaffleNotOpen,
    #[msg("Raffle has ended")]
    RaffleEnded,
    #[msg("Raffle has not ended yet")]
    RaffleNotEnded,
    #[msg("Raffle has not started yet")]
    RaffleNotStarted,
    #[msg("Raffle is not in Active state")]
    RaffleNotActive,
    #[msg("Raffle is not in Drawing state")]
    RaffleNotDrawing,
    #[msg("Raffle is not in Completed state")]
    RaffleNotCompleted,
    #[msg("Raffle is not in Cancelled state")]
    RaffleNotCancelled,
    #[msg("Raffle is already in a terminal state")]
    RaffleTerminal,
    #[msg("Raffle is paused")]
    RafflePaused,
    #[msg("Purchase would exceed the per-participant ticket limit")]
    EntrantLimitExceeded,
    #[msg("Ticket position account is not initialized for this participant")]
    PositionNotInitialized,
    #[msg("Randomness has not been requested for this draw")]
    RandomnessNotRequested,
    #[msg("Randomness was already requested for this draw")]
    RandomnessAlreadyRequested,
    #[msg("Randomness request must age at least one slot before fulfillment")]
    RandomnessNotReady,
    #[msg("A randomness request is pending; use the emergency cancel path")]
    DrawInFlight,
    #[msg("Emergency cancel cooldown has not elapsed")]
    CooldownNotElapsed,
    #[msg("Invalid SlotHashes account provided")]
    InvalidSlotHashesAccount,
    #[msg("Ticket position set does not reconcile with the raffle totals")]
    PositionSetMismatch,
    #[msg("Duplicate ticket position passed to the draw")]
    DuplicatePosition,
    #[msg("Winner index is out of range")]
    InvalidWinnerIndex,
    #[msg("All winners must be paid before sweeping the protocol fee")]
    WinnersNotPaid,
    #[msg("Position has no tickets to refund")]
    NothingToRefund,
}
