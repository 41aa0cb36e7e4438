use anchor_lang::prelude::*;

use crate::error::DistributionError;
use crate::state::{DistributionState, ParticipantEntry, Participants};
use crate::utils::allocation::{settle_presale, vested_presale};
use crate::utils::phase::PhaseResolver;

pub fn emit_claim_quote(ctx: Context<EmitClaimQuote>, wallet: Pubkey) -> Result<()> {
    let st = &ctx.accounts.distribution_state;
    let now = Clock::get()?.unix_timestamp;

    let entry = ctx
        .accounts
        .participants
        .find(&wallet)
        .ok_or(DistributionError::ParticipantNotFound)?;

    let quote = claim_quote(st, entry, now)?;
    msg!(
        "quote: phase {} presale claimable {} sale claimable {}",
        quote.current_phase,
        quote.presale_claimable,
        quote.sale_claimable
    );
    emit!(quote);
    Ok(())
}

fn claim_quote(
    st: &DistributionState,
    entry: &ParticipantEntry,
    now: i64,
) -> std::result::Result<ClaimQuote, DistributionError> {
    let resolver = PhaseResolver::new(st.distribution_start_ts)?;
    let phase = resolver.which_phase(now);
    let presale_vested = vested_presale(entry.presale_allocation, phase)?;
    let presale_claimed = entry
        .presale_allocation
        .checked_sub(entry.presale_remaining)
        .ok_or(DistributionError::MathOverflow)?;

    // Nothing is claimable once cancelled or before start, whatever the schedule says.
    let open = !st.cancelled && st.has_started(now);
    let presale_claimable = if open {
        settle_presale(entry, phase)?.amount
    } else {
        0
    };
    let sale_claimable = if open && !entry.sale_claimed {
        entry.sale_allocation
    } else {
        0
    };

    Ok(ClaimQuote {
        wallet: entry.wallet,
        timestamp: now,
        current_phase: phase,
        next_phase_ts: resolver.next_boundary_ts(now)?,
        fully_vested: resolver.is_fully_vested(now),
        presale_allocation: entry.presale_allocation,
        presale_vested,
        presale_claimed,
        presale_claimable,
        sale_allocation: entry.sale_allocation,
        sale_claimable,
        cancelled: st.cancelled,
    })
}

#[derive(Accounts)]
pub struct EmitClaimQuote<'info> {
    #[account(seeds = [b"distribution_state"], bump)]
    pub distribution_state: Account<'info, DistributionState>,

    #[account(
        seeds = [b"participants", distribution_state.key().as_ref()],
        bump
    )]
    pub participants: Box<Account<'info, Participants>>,
}

#[event]
pub struct ClaimQuote {
    pub wallet: Pubkey,
    pub timestamp: i64,
    pub current_phase: u8,
    pub next_phase_ts: Option<i64>,
    pub fully_vested: bool,
    pub presale_allocation: u64,
    pub presale_vested: u64,
    pub presale_claimed: u64,
    pub presale_claimable: u64,
    pub sale_allocation: u64,
    pub sale_claimable: u64,
    pub cancelled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_DAY;
    use crate::state::ParticipantInput;

    const START: i64 = 1_000_000;

    fn state() -> DistributionState {
        DistributionState {
            mint: Pubkey::new_from_array([1u8; 32]),
            owner: Pubkey::new_from_array([2u8; 32]),
            deposit_authority: Pubkey::new_from_array([3u8; 32]),
            freeze_ts: START - SECONDS_PER_DAY,
            distribution_start_ts: START,
            sweep_ts: START + 365 * SECONDS_PER_DAY,
            cancelled: false,
            sealed: true,
            participant_count: 1,
            sale_distributed: 0,
            presale_distributed: 0,
            registry_digest: [0u8; 32],
        }
    }

    fn entry() -> ParticipantEntry {
        ParticipantEntry::new(&ParticipantInput {
            wallet: Pubkey::new_from_array([6u8; 32]),
            sale_allocation: 500,
            presale_allocation: 1_003,
        })
    }

    #[test]
    fn quote_before_start_has_nothing_claimable() {
        let q = claim_quote(&state(), &entry(), START - 10).unwrap();
        assert_eq!(q.current_phase, 0);
        assert_eq!(q.presale_claimable, 0);
        assert_eq!(q.sale_claimable, 0);
        assert_eq!(q.next_phase_ts, Some(START + 9 * SECONDS_PER_DAY));
    }

    #[test]
    fn quote_mid_schedule() {
        let mut e = entry();
        e.presale_remaining = 900;
        e.presale_phases_claimed = 1;
        e.sale_claimed = true;
        let q = claim_quote(&state(), &e, START + 30 * SECONDS_PER_DAY).unwrap();
        assert_eq!(q.current_phase, 3);
        assert_eq!(q.presale_vested, 303);
        assert_eq!(q.presale_claimed, 103);
        assert_eq!(q.presale_claimable, 200);
        assert_eq!(q.sale_claimable, 0);
        assert_eq!(q.next_phase_ts, Some(START + 36 * SECONDS_PER_DAY));
        assert!(!q.fully_vested);
    }

    #[test]
    fn quote_after_cancel_is_zero() {
        let mut st = state();
        st.cancelled = true;
        let q = claim_quote(&st, &entry(), START + 365 * SECONDS_PER_DAY).unwrap();
        assert_eq!(q.current_phase, 10);
        assert_eq!(q.presale_vested, 1_003);
        assert_eq!(q.presale_claimable, 0);
        assert_eq!(q.sale_claimable, 0);
        assert_eq!(q.next_phase_ts, None);
        assert!(q.fully_vested);
        assert!(q.cancelled);
    }
}
