use anchor_lang::prelude::*;

/// Custom error codes for the token distribution program.
#[error_code]
pub enum DistributionError {
    #[msg("Unauthorized: owner signature required")]
    UnauthorizedOwner,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Invalid schedule: expected freeze <= start and sweep >= start + 90 days")]
    InvalidSchedule,

    #[msg("Invalid phase index")]
    InvalidPhase,

    #[msg("Participant registry is sealed")]
    RegistrySealed,

    #[msg("Participant registry is not sealed")]
    RegistryNotSealed,

    #[msg("Participant list is full")]
    ParticipantListFull,

    #[msg("Duplicate participant wallet")]
    DuplicateParticipant,

    #[msg("Invalid allocation (at least one allocation must be > 0)")]
    InvalidAllocation,

    #[msg("Sale allocations would exceed sale supply")]
    SaleAllocationExceedsSupply,

    #[msg("Presale allocations would exceed presale supply")]
    PresaleAllocationExceedsSupply,

    #[msg("Participant not found")]
    ParticipantNotFound,

    #[msg("Distribution is cancelled")]
    DistributionCancelled,

    #[msg("Distribution is not cancelled")]
    DistributionNotCancelled,

    #[msg("Distribution is frozen; cancellation no longer allowed")]
    DistributionFrozen,

    #[msg("Distribution has not started")]
    BeforeStart,

    #[msg("Sale tokens already claimed")]
    AlreadyClaimed,

    #[msg("Nothing to claim")]
    NothingToClaim,

    #[msg("Sale supply exhausted")]
    SaleSupplyExhausted,

    #[msg("Presale supply exhausted")]
    PresaleSupplyExhausted,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Invalid associated token account for participant")]
    InvalidParticipantAta,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Deposit would exceed distribution supply")]
    OverDeposit,

    #[msg("Deposit after distribution start is not allowed")]
    DepositAfterStart,

    #[msg("Vault must be exactly funded to distribution supply before the first claim")]
    VaultNotExactlyFunded,

    #[msg("Sweep not allowed before sweep timestamp")]
    SweepBeforeDeadline,

    #[msg("Math overflow")]
    MathOverflow,
}
