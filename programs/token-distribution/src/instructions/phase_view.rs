use anchor_lang::prelude::*;

use crate::state::DistributionState;
use crate::utils::phase::PhaseResolver;

/// Phase at the cluster clock. Returned as instruction return data.
pub fn current_phase(ctx: Context<PhaseView>) -> Result<u8> {
    let now = Clock::get()?.unix_timestamp;
    resolve(&ctx.accounts.distribution_state, now)
}

/// Phase at an arbitrary timestamp. Returned as instruction return data.
pub fn which_phase(ctx: Context<PhaseView>, query_ts: i64) -> Result<u8> {
    resolve(&ctx.accounts.distribution_state, query_ts)
}

fn resolve(st: &DistributionState, query_ts: i64) -> Result<u8> {
    let resolver = PhaseResolver::new(st.distribution_start_ts)?;
    let phase = resolver.which_phase(query_ts);
    msg!("phase {} at {}", phase, query_ts);
    Ok(phase)
}

#[derive(Accounts)]
pub struct PhaseView<'info> {
    #[account(seeds = [b"distribution_state"], bump)]
    pub distribution_state: Account<'info, DistributionState>,
}
