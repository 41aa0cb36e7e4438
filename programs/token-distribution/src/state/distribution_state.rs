use anchor_lang::prelude::*;

use crate::constants::{
    DEFAULT_FREEZE_DELAY, DEFAULT_START_DELAY, DEFAULT_SWEEP_DELAY, DISTRIBUTION_SUPPLY,
    SCHEDULE_LENGTH_SECONDS,
};
use crate::error::DistributionError;

/// Single distribution state PDA.
#[account]
pub struct DistributionState {
    /// Token mint.
    pub mint: Pubkey,
    /// Owner authority: registers participants, funds, cancels, sweeps.
    pub owner: Pubkey,
    /// Treasury wallet that receives refunds after cancel and the final sweep.
    pub deposit_authority: Pubkey,
    /// Cancellation is possible strictly before this timestamp.
    pub freeze_ts: i64,
    /// Phase 0 starts here; claims open here.
    pub distribution_start_ts: i64,
    /// Owner may sweep the vault at or after this timestamp.
    pub sweep_ts: i64,
    pub cancelled: bool,
    /// Participant registry sealed flag (prevents mutation/reordering).
    pub sealed: bool,
    pub participant_count: u16,
    /// Running total of sale tokens transferred out.
    pub sale_distributed: u64,
    /// Running total of presale tokens transferred out.
    pub presale_distributed: u64,
    /// blake3 digest of the registry, written at seal.
    pub registry_digest: [u8; 32],
}

impl DistributionState {
    pub const SIZE: usize =
        32 + // mint
        32 + // owner
        32 + // deposit_authority
        8 +  // freeze_ts
        8 +  // distribution_start_ts
        8 +  // sweep_ts
        1 +  // cancelled
        1 +  // sealed
        2 +  // participant_count
        8 +  // sale_distributed
        8 +  // presale_distributed
        32;  // registry_digest

    pub fn is_frozen(&self, now: i64) -> bool {
        now >= self.freeze_ts
    }

    pub fn has_started(&self, now: i64) -> bool {
        now >= self.distribution_start_ts
    }

    pub fn total_distributed(&self) -> Result<u64> {
        Ok(self
            .sale_distributed
            .checked_add(self.presale_distributed)
            .ok_or(DistributionError::MathOverflow)?)
    }

    /// Shared gate for sale and presale claims.
    pub fn ensure_claims_open(&self, now: i64) -> Result<()> {
        require!(!self.cancelled, DistributionError::DistributionCancelled);
        require!(self.has_started(now), DistributionError::BeforeStart);
        require!(self.sealed, DistributionError::RegistryNotSealed);
        Ok(())
    }

    /// Owner may cancel once, strictly before the freeze instant.
    pub fn ensure_cancellable(&self, now: i64) -> std::result::Result<(), DistributionError> {
        if self.cancelled {
            return Err(DistributionError::DistributionCancelled);
        }
        if self.is_frozen(now) {
            return Err(DistributionError::DistributionFrozen);
        }
        Ok(())
    }

    /// Deposits are accepted before start and may fill the vault up to the distribution supply.
    pub fn ensure_deposit_allowed(
        &self,
        now: i64,
        vault_amount: u64,
        amount: u64,
    ) -> std::result::Result<(), DistributionError> {
        if amount == 0 {
            return Err(DistributionError::InvalidConfig);
        }
        if self.cancelled {
            return Err(DistributionError::DistributionCancelled);
        }
        if self.has_started(now) {
            return Err(DistributionError::DepositAfterStart);
        }
        let post = (vault_amount as u128)
            .checked_add(amount as u128)
            .ok_or(DistributionError::MathOverflow)?;
        if post > DISTRIBUTION_SUPPLY as u128 {
            return Err(DistributionError::OverDeposit);
        }
        Ok(())
    }

    /// Before anything leaves the vault it must hold exactly the distribution supply.
    pub fn ensure_funded(&self, vault_amount: u64) -> Result<()> {
        if self.total_distributed()? == 0 {
            require!(
                vault_amount == DISTRIBUTION_SUPPLY,
                DistributionError::VaultNotExactlyFunded
            );
        }
        Ok(())
    }
}

/// Schedule timestamps supplied at initialization.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduleParams {
    pub freeze_ts: i64,
    pub distribution_start_ts: i64,
    pub sweep_ts: i64,
}

impl ScheduleParams {
    /// Default deployment: freeze in 2 days, start in 5 days, sweep in 3 years.
    /// Clients build `initialize_distribution` arguments with this; the program only validates.
    pub fn from_deploy_time(now: i64) -> std::result::Result<Self, DistributionError> {
        let at = |delay: i64| now.checked_add(delay).ok_or(DistributionError::MathOverflow);
        Ok(Self {
            freeze_ts: at(DEFAULT_FREEZE_DELAY)?,
            distribution_start_ts: at(DEFAULT_START_DELAY)?,
            sweep_ts: at(DEFAULT_SWEEP_DELAY)?,
        })
    }

    pub fn validate(&self) -> std::result::Result<(), DistributionError> {
        if self.freeze_ts <= 0 || self.distribution_start_ts <= 0 || self.sweep_ts <= 0 {
            return Err(DistributionError::InvalidTimestamp);
        }
        if self.freeze_ts > self.distribution_start_ts {
            return Err(DistributionError::InvalidSchedule);
        }
        let schedule_end = self
            .distribution_start_ts
            .checked_add(SCHEDULE_LENGTH_SECONDS)
            .ok_or(DistributionError::MathOverflow)?;
        if self.sweep_ts < schedule_end {
            return Err(DistributionError::InvalidSchedule);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_DAY;

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn default_deployment_is_valid() {
        let p = ScheduleParams::from_deploy_time(NOW).unwrap();
        assert_eq!(p.freeze_ts, NOW + 2 * SECONDS_PER_DAY);
        assert_eq!(p.distribution_start_ts, NOW + 5 * SECONDS_PER_DAY);
        assert_eq!(p.sweep_ts, NOW + 3 * 365 * SECONDS_PER_DAY);
        p.validate().unwrap();
    }

    #[test]
    fn rejects_zero_timestamps() {
        let p = ScheduleParams {
            freeze_ts: 0,
            distribution_start_ts: NOW,
            sweep_ts: NOW + 100 * SECONDS_PER_DAY,
        };
        assert!(matches!(p.validate(), Err(DistributionError::InvalidTimestamp)));
    }

    #[test]
    fn rejects_freeze_after_start() {
        let p = ScheduleParams {
            freeze_ts: NOW + 1,
            distribution_start_ts: NOW,
            sweep_ts: NOW + 100 * SECONDS_PER_DAY,
        };
        assert!(matches!(p.validate(), Err(DistributionError::InvalidSchedule)));
    }

    #[test]
    fn rejects_sweep_before_schedule_end() {
        let p = ScheduleParams {
            freeze_ts: NOW,
            distribution_start_ts: NOW,
            sweep_ts: NOW + 90 * SECONDS_PER_DAY - 1,
        };
        assert!(matches!(p.validate(), Err(DistributionError::InvalidSchedule)));

        let ok = ScheduleParams {
            sweep_ts: NOW + 90 * SECONDS_PER_DAY,
            ..p
        };
        ok.validate().unwrap();
    }

    fn state() -> DistributionState {
        DistributionState {
            mint: Pubkey::new_from_array([1u8; 32]),
            owner: Pubkey::new_from_array([2u8; 32]),
            deposit_authority: Pubkey::new_from_array([3u8; 32]),
            freeze_ts: NOW,
            distribution_start_ts: NOW,
            sweep_ts: NOW,
            cancelled: false,
            sealed: true,
            participant_count: 3,
            sale_distributed: 10,
            presale_distributed: 20,
            registry_digest: [9u8; 32],
        }
    }

    #[test]
    fn state_size_matches_borsh_encoding() {
        let st = state();
        let mut bytes = Vec::new();
        st.try_serialize(&mut bytes).unwrap();
        assert_eq!(bytes.len(), 8 + DistributionState::SIZE);
        assert_eq!(st.total_distributed().unwrap(), 30);
        assert!(st.is_frozen(NOW));
        assert!(st.has_started(NOW));
        assert!(!st.has_started(NOW - 1));
    }

    #[test]
    fn claims_gate_checks_cancel_start_and_seal() {
        let mut st = state();
        assert!(st.ensure_claims_open(NOW).is_ok());
        assert!(st.ensure_claims_open(NOW - 1).is_err());

        st.sealed = false;
        assert!(st.ensure_claims_open(NOW).is_err());

        st.sealed = true;
        st.cancelled = true;
        assert!(st.ensure_claims_open(NOW + 1_000).is_err());
    }

    #[test]
    fn funding_only_checked_before_first_claim() {
        let mut st = state();
        st.sale_distributed = 0;
        st.presale_distributed = 0;
        assert!(st.ensure_funded(DISTRIBUTION_SUPPLY).is_ok());
        assert!(st.ensure_funded(DISTRIBUTION_SUPPLY - 1).is_err());

        st.sale_distributed = 1;
        assert!(st.ensure_funded(0).is_ok());
    }

    fn schedule_state() -> DistributionState {
        DistributionState {
            freeze_ts: NOW,
            distribution_start_ts: NOW + 3 * SECONDS_PER_DAY,
            sale_distributed: 0,
            presale_distributed: 0,
            ..state()
        }
    }

    #[test]
    fn cancel_allowed_only_before_freeze() {
        let st = schedule_state();
        st.ensure_cancellable(NOW - 1).unwrap();
        assert!(matches!(
            st.ensure_cancellable(NOW),
            Err(DistributionError::DistributionFrozen)
        ));
        assert!(matches!(
            st.ensure_cancellable(NOW + 1),
            Err(DistributionError::DistributionFrozen)
        ));
    }

    #[test]
    fn cancel_not_allowed_twice() {
        let mut st = schedule_state();
        st.cancelled = true;
        assert!(matches!(
            st.ensure_cancellable(NOW - 1),
            Err(DistributionError::DistributionCancelled)
        ));
    }

    #[test]
    fn deposit_may_fill_vault_exactly() {
        let st = schedule_state();
        st.ensure_deposit_allowed(NOW, 0, DISTRIBUTION_SUPPLY).unwrap();
        st.ensure_deposit_allowed(NOW, DISTRIBUTION_SUPPLY - 1, 1).unwrap();
        assert!(matches!(
            st.ensure_deposit_allowed(NOW, 0, DISTRIBUTION_SUPPLY + 1),
            Err(DistributionError::OverDeposit)
        ));
        assert!(matches!(
            st.ensure_deposit_allowed(NOW, DISTRIBUTION_SUPPLY, 1),
            Err(DistributionError::OverDeposit)
        ));
        assert!(matches!(
            st.ensure_deposit_allowed(NOW, u64::MAX, u64::MAX),
            Err(DistributionError::OverDeposit)
        ));
    }

    #[test]
    fn deposit_rejected_from_start_instant() {
        let st = schedule_state();
        let start = st.distribution_start_ts;
        st.ensure_deposit_allowed(start - 1, 0, 1).unwrap();
        assert!(matches!(
            st.ensure_deposit_allowed(start, 0, 1),
            Err(DistributionError::DepositAfterStart)
        ));
    }

    #[test]
    fn deposit_rejects_zero_amount_and_cancelled() {
        let mut st = schedule_state();
        assert!(matches!(
            st.ensure_deposit_allowed(NOW, 0, 0),
            Err(DistributionError::InvalidConfig)
        ));
        st.cancelled = true;
        assert!(matches!(
            st.ensure_deposit_allowed(NOW, 0, 1),
            Err(DistributionError::DistributionCancelled)
        ));
    }
}
