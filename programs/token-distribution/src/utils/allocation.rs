//! Presale installment accounting.
//! - installment_k = allocation / 10 for k in [1, 10]; installment_1 also carries allocation % 10
//! - installment_k unlocks once the current phase is >= k
//! - settlement walks unclaimed installments in order, at most 10 iterations
//! - sale allocations are paid once, in full, within the sale cap

use crate::constants::{PHASE_COUNT, SALE_SUPPLY};
use crate::error::DistributionError;
use crate::state::ParticipantEntry;

/// Outcome of settling a participant's presale installments at some phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PresaleSettlement {
    /// Total tokens due now.
    pub amount: u64,
    /// First and last phase claimed by this settlement; both 0 if nothing was due.
    pub first_phase: u8,
    pub last_phase: u8,
    /// Entry fields after applying the settlement.
    pub remaining_after: u64,
    pub phases_claimed_after: u8,
}

impl PresaleSettlement {
    pub fn is_empty(&self) -> bool {
        self.amount == 0
    }

    /// Write the settlement back into the participant record.
    pub fn apply(&self, entry: &mut ParticipantEntry) {
        entry.presale_remaining = self.remaining_after;
        entry.presale_phases_claimed = self.phases_claimed_after;
    }
}

pub fn per_phase_amount(allocation: u64) -> u64 {
    allocation / PHASE_COUNT as u64
}

/// Installment unlocked at `phase` (1..=10). Phase 1 absorbs the division remainder.
pub fn phase_installment(allocation: u64, phase: u8) -> Result<u64, DistributionError> {
    if phase == 0 || phase > PHASE_COUNT {
        return Err(DistributionError::InvalidPhase);
    }
    let base = per_phase_amount(allocation);
    if phase == 1 {
        base.checked_add(allocation % PHASE_COUNT as u64)
            .ok_or(DistributionError::MathOverflow)
    } else {
        Ok(base)
    }
}

/// Cumulative presale amount unlocked at `phase`. Saturates at the full allocation.
pub fn vested_presale(allocation: u64, phase: u8) -> Result<u64, DistributionError> {
    let p = phase.min(PHASE_COUNT);
    if p == 0 {
        return Ok(0);
    }
    if p == PHASE_COUNT {
        return Ok(allocation);
    }
    let v = (per_phase_amount(allocation) as u128)
        .checked_mul(p as u128)
        .ok_or(DistributionError::MathOverflow)?
        .checked_add((allocation % PHASE_COUNT as u64) as u128)
        .ok_or(DistributionError::MathOverflow)?;
    u64::try_from(v).map_err(|_| DistributionError::MathOverflow)
}

/// Settle every installment unlocked by `current_phase` that `entry` has not claimed yet.
pub fn settle_presale(
    entry: &ParticipantEntry,
    current_phase: u8,
) -> Result<PresaleSettlement, DistributionError> {
    if entry.presale_phases_claimed > PHASE_COUNT {
        return Err(DistributionError::InvalidPhase);
    }
    let mut out = PresaleSettlement {
        remaining_after: entry.presale_remaining,
        phases_claimed_after: entry.presale_phases_claimed,
        ..Default::default()
    };
    if entry.presale_remaining == 0 {
        return Ok(out);
    }

    let target = current_phase.min(PHASE_COUNT);
    let mut phase = entry.presale_phases_claimed;
    while phase < target {
        phase += 1;
        let installment = phase_installment(entry.presale_allocation, phase)?;
        out.remaining_after = out
            .remaining_after
            .checked_sub(installment)
            .ok_or(DistributionError::MathOverflow)?;
        out.amount = out
            .amount
            .checked_add(installment)
            .ok_or(DistributionError::MathOverflow)?;
        if out.first_phase == 0 {
            out.first_phase = phase;
        }
        out.last_phase = phase;
        out.phases_claimed_after = phase;
    }
    Ok(out)
}

/// Amount due for a one-shot sale claim, given the running sale total.
pub fn settle_sale(
    entry: &ParticipantEntry,
    sale_distributed: u64,
) -> Result<u64, DistributionError> {
    if entry.sale_claimed {
        return Err(DistributionError::AlreadyClaimed);
    }
    if entry.sale_allocation == 0 {
        return Err(DistributionError::NothingToClaim);
    }
    let distributed_after = sale_distributed
        .checked_add(entry.sale_allocation)
        .ok_or(DistributionError::MathOverflow)?;
    if distributed_after > SALE_SUPPLY {
        return Err(DistributionError::SaleSupplyExhausted);
    }
    Ok(entry.sale_allocation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::prelude::Pubkey;

    fn entry(allocation: u64) -> ParticipantEntry {
        ParticipantEntry {
            wallet: Pubkey::new_from_array([4u8; 32]),
            sale_allocation: 0,
            sale_claimed: false,
            presale_allocation: allocation,
            presale_remaining: allocation,
            presale_phases_claimed: 0,
        }
    }

    #[test]
    fn first_installment_carries_remainder() {
        assert_eq!(per_phase_amount(1_003), 100);
        assert_eq!(phase_installment(1_003, 1).unwrap(), 103);
        for p in 2..=10 {
            assert_eq!(phase_installment(1_003, p).unwrap(), 100);
        }
        assert!(matches!(
            phase_installment(1_003, 0),
            Err(DistributionError::InvalidPhase)
        ));
        assert!(matches!(
            phase_installment(1_003, 11),
            Err(DistributionError::InvalidPhase)
        ));
    }

    #[test]
    fn installments_sum_to_allocation() {
        for allocation in [0u64, 1, 9, 10, 11, 1_003, 65_000_000_000_000_000] {
            let sum: u64 = (1..=10)
                .map(|p| phase_installment(allocation, p).unwrap())
                .sum();
            assert_eq!(sum, allocation);
            assert_eq!(vested_presale(allocation, 10).unwrap(), allocation);
        }
    }

    #[test]
    fn vested_tracks_phase() {
        assert_eq!(vested_presale(1_003, 0).unwrap(), 0);
        assert_eq!(vested_presale(1_003, 1).unwrap(), 103);
        assert_eq!(vested_presale(1_003, 5).unwrap(), 503);
        assert_eq!(vested_presale(1_003, 9).unwrap(), 903);
        assert_eq!(vested_presale(1_003, 200).unwrap(), 1_003);
    }

    #[test]
    fn nothing_due_in_phase_zero() {
        let s = settle_presale(&entry(1_003), 0).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.phases_claimed_after, 0);
        assert_eq!(s.remaining_after, 1_003);
    }

    #[test]
    fn catches_up_over_several_phases() {
        let mut e = entry(1_003);
        let s = settle_presale(&e, 3).unwrap();
        assert_eq!(s.amount, 303);
        assert_eq!((s.first_phase, s.last_phase), (1, 3));
        s.apply(&mut e);
        assert_eq!(e.presale_remaining, 700);
        assert_eq!(e.presale_phases_claimed, 3);

        // Same phase again: nothing new.
        assert!(settle_presale(&e, 3).unwrap().is_empty());

        let s = settle_presale(&e, 4).unwrap();
        assert_eq!(s.amount, 100);
        assert_eq!((s.first_phase, s.last_phase), (4, 4));
    }

    #[test]
    fn terminal_phase_releases_everything_once() {
        let mut e = entry(1_003);
        let s = settle_presale(&e, 10).unwrap();
        assert_eq!(s.amount, 1_003);
        assert_eq!((s.first_phase, s.last_phase), (1, 10));
        s.apply(&mut e);
        assert_eq!(e.presale_remaining, 0);

        // Phase indices past 10 never loop further.
        assert!(settle_presale(&e, u8::MAX).unwrap().is_empty());
    }

    #[test]
    fn incremental_claims_match_single_claim() {
        let mut e = entry(987_654_321);
        let mut total = 0u64;
        for phase in 0..=10 {
            let s = settle_presale(&e, phase).unwrap();
            total += s.amount;
            s.apply(&mut e);
            assert_eq!(total, vested_presale(987_654_321, phase).unwrap());
        }
        assert_eq!(total, 987_654_321);
        assert_eq!(e.presale_remaining, 0);
    }

    #[test]
    fn zero_allocation_is_empty() {
        let s = settle_presale(&entry(0), 10).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.phases_claimed_after, 0);
    }

    #[test]
    fn corrupted_phase_count_rejected() {
        let mut e = entry(100);
        e.presale_phases_claimed = 11;
        assert!(matches!(
            settle_presale(&e, 10),
            Err(DistributionError::InvalidPhase)
        ));
    }

    fn sale_entry(allocation: u64) -> ParticipantEntry {
        ParticipantEntry {
            sale_allocation: allocation,
            ..entry(0)
        }
    }

    #[test]
    fn sale_pays_full_allocation_once() {
        assert_eq!(settle_sale(&sale_entry(500), 0).unwrap(), 500);

        let mut e = sale_entry(500);
        e.sale_claimed = true;
        assert!(matches!(
            settle_sale(&e, 0),
            Err(DistributionError::AlreadyClaimed)
        ));
    }

    #[test]
    fn sale_with_zero_allocation_has_nothing_to_claim() {
        assert!(matches!(
            settle_sale(&sale_entry(0), 0),
            Err(DistributionError::NothingToClaim)
        ));
    }

    #[test]
    fn sale_may_land_exactly_on_cap() {
        assert_eq!(settle_sale(&sale_entry(500), SALE_SUPPLY - 500).unwrap(), 500);
        assert!(matches!(
            settle_sale(&sale_entry(501), SALE_SUPPLY - 500),
            Err(DistributionError::SaleSupplyExhausted)
        ));
        assert!(matches!(
            settle_sale(&sale_entry(1), SALE_SUPPLY),
            Err(DistributionError::SaleSupplyExhausted)
        ));
    }

    #[test]
    fn sale_total_overflow_is_reported() {
        assert!(matches!(
            settle_sale(&sale_entry(u64::MAX), 1),
            Err(DistributionError::MathOverflow)
        ));
    }
}
