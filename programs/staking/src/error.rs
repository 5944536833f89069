use anchor_lang::error_code;

#[error_code]
pub enum StakingError {
    Overflow,
    #[msg("Stake amount is outside the configured bounds")]
    AmountOutOfRange,
    #[msg("Withdrawal amount must be greater than 0")]
    InvalidAmount,
    #[msg("Monthly rate exceeds the allowed maximum")]
    InvalidRate,
    #[msg("Stake duration must be between 1 and 60 months")]
    InvalidDuration,
    #[msg("Withdrawal day must be a valid day of month")]
    InvalidWithdrawalDay,
    #[msg("Only the payout authority can perform this operation")]
    NotPayoutAuthority,
    #[msg("Caller is not the stake owner")]
    NotStakeOwner,
    #[msg("Stake is not in Pending state")]
    StakeNotPending,
    #[msg("Stake is not in Active state")]
    StakeNotActive,
    #[msg("Stake has not reached its end date")]
    StakeNotMatured,
    #[msg("Insufficient funds in the rewards vault")]
    InsufficientVaultFunds,
    #[msg("Cannot refer yourself")]
    SelfReferral,
    #[msg("Referral chain would form a cycle")]
    ReferralCycle,
    #[msg("Referral chain account does not match the expected PDA")]
    InvalidReferralChain,
    #[msg("Withdrawals are only accepted on the configured day of month")]
    WithdrawalWindowClosed,
    #[msg("Month index does not match the current calendar month")]
    WrongMonthIndex,
    #[msg("Requested amount exceeds the available balance")]
    InsufficientBalance,
    #[msg("Withdrawal is not in Pending state")]
    WithdrawalNotPending,
    #[msg("Stake accounts must be supplied in strictly increasing index order")]
    StakeOrderViolation,
    #[msg("Stake account does not match the expected PDA")]
    InvalidStakeAccount,
    #[msg("Destination account does not match the withdrawal destination")]
    DestinationMismatch,
}
