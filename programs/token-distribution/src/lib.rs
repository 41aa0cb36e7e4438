use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

#[allow(ambiguous_glob_reexports)]
pub use instructions::*;
pub use state::{ParticipantInput, ScheduleParams};

declare_id!("9TQZxw3Lh2SPDm5dgYH6Ri7KcDpUzVkV2h3z8dsrN1pQ");

#[program]
pub mod token_distribution {
    use super::*;

    pub fn initialize_distribution(
        ctx: Context<InitializeDistribution>,
        deposit_authority: Pubkey,
        schedule: ScheduleParams,
    ) -> Result<()> {
        instructions::initialize_distribution::initialize_distribution(
            ctx,
            deposit_authority,
            schedule,
        )
    }

    pub fn add_participants(
        ctx: Context<AddParticipants>,
        inputs: Vec<ParticipantInput>,
        seal: bool,
    ) -> Result<()> {
        instructions::add_participants::add_participants(ctx, inputs, seal)
    }

    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens::deposit_tokens(ctx, amount)
    }

    pub fn claim_sale_tokens(ctx: Context<ClaimSaleTokens>) -> Result<()> {
        instructions::claim_sale_tokens::claim_sale_tokens(ctx)
    }

    pub fn claim_presale_tokens(ctx: Context<ClaimPresaleTokens>) -> Result<()> {
        instructions::claim_presale_tokens::claim_presale_tokens(ctx)
    }

    pub fn cancel_distribution(ctx: Context<CancelDistribution>) -> Result<()> {
        instructions::cancel_distribution::cancel_distribution(ctx)
    }

    pub fn withdraw_after_cancel(ctx: Context<WithdrawAfterCancel>) -> Result<()> {
        instructions::withdraw_after_cancel::withdraw_after_cancel(ctx)
    }

    pub fn sweep_unclaimed(ctx: Context<SweepUnclaimed>) -> Result<()> {
        instructions::sweep_unclaimed::sweep_unclaimed(ctx)
    }

    pub fn current_phase(ctx: Context<PhaseView>) -> Result<u8> {
        instructions::phase_view::current_phase(ctx)
    }

    pub fn which_phase(ctx: Context<PhaseView>, query_ts: i64) -> Result<u8> {
        instructions::phase_view::which_phase(ctx, query_ts)
    }

    pub fn emit_claim_quote(ctx: Context<EmitClaimQuote>, wallet: Pubkey) -> Result<()> {
        instructions::emit_claim_quote::emit_claim_quote(ctx, wallet)
    }
}
