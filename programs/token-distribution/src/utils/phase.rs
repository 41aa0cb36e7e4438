//! Nine-day phase schedule.
//! - boundary_k = origin + 9 * (k + 1) days, k in [0, 10)
//! - phase = number of boundaries b with origin + b <= now (inclusive), so [0, 10]
//! - queries before origin resolve to phase 0

use crate::constants::{PHASE_COUNT, PHASE_LENGTH_SECONDS, SCHEDULE_LENGTH_SECONDS};
use crate::error::DistributionError;

/// Maps timestamps to phase indices for a fixed distribution start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseResolver {
    origin_ts: i64,
}

impl PhaseResolver {
    pub fn new(origin_ts: i64) -> Result<Self, DistributionError> {
        if origin_ts <= 0 {
            return Err(DistributionError::InvalidTimestamp);
        }
        Ok(Self { origin_ts })
    }

    pub fn which_phase(&self, query_ts: i64) -> u8 {
        which_phase(query_ts, self.origin_ts)
    }

    /// Absolute timestamp at which `phase` begins. Phase 0 begins at origin.
    pub fn phase_start_ts(&self, phase: u8) -> Result<i64, DistributionError> {
        if phase > PHASE_COUNT {
            return Err(DistributionError::InvalidPhase);
        }
        let offset = if phase == 0 {
            0
        } else {
            boundary_offset(phase - 1)?
        };
        self.origin_ts
            .checked_add(offset)
            .ok_or(DistributionError::MathOverflow)
    }

    /// Timestamp of the next boundary after `query_ts`, or `None` once terminal.
    pub fn next_boundary_ts(&self, query_ts: i64) -> Result<Option<i64>, DistributionError> {
        let phase = self.which_phase(query_ts);
        if phase >= PHASE_COUNT {
            return Ok(None);
        }
        self.phase_start_ts(phase + 1).map(Some)
    }

    /// True once the terminal phase has been reached.
    pub fn is_fully_vested(&self, query_ts: i64) -> bool {
        query_ts.saturating_sub(self.origin_ts) >= SCHEDULE_LENGTH_SECONDS
    }
}

/// Offset from origin of boundary `index` (0-based): 9, 18, ..., 90 days.
pub fn boundary_offset(index: u8) -> Result<i64, DistributionError> {
    if index >= PHASE_COUNT {
        return Err(DistributionError::InvalidPhase);
    }
    PHASE_LENGTH_SECONDS
        .checked_mul(index as i64 + 1)
        .ok_or(DistributionError::MathOverflow)
}

/// Phase index in [0, 10] for `query_ts` on a schedule starting at `origin_ts`.
pub fn which_phase(query_ts: i64, origin_ts: i64) -> u8 {
    let elapsed = query_ts.saturating_sub(origin_ts);
    if elapsed <= 0 {
        return 0;
    }
    // Boundaries are evenly spaced, so counting the ones already passed is a division.
    let passed = elapsed / PHASE_LENGTH_SECONDS;
    passed.min(PHASE_COUNT as i64) as u8
}
