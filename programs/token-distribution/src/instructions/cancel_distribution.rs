use anchor_lang::prelude::*;

use crate::error::DistributionError;
use crate::state::DistributionState;

pub fn cancel_distribution(ctx: Context<CancelDistribution>) -> Result<()> {
    let st = &mut ctx.accounts.distribution_state;
    require_keys_eq!(ctx.accounts.owner.key(), st.owner, DistributionError::UnauthorizedOwner);

    let now = Clock::get()?.unix_timestamp;
    st.ensure_cancellable(now)?;

    st.cancelled = true;
    emit!(DistributionCancelled {
        owner: st.owner,
        cancelled_at: now,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct CancelDistribution<'info> {
    #[account(mut, seeds = [b"distribution_state"], bump)]
    pub distribution_state: Account<'info, DistributionState>,
    pub owner: Signer<'info>,
}

#[event]
pub struct DistributionCancelled {
    pub owner: Pubkey,
    pub cancelled_at: i64,
}
