use anchor_lang::prelude::*;

use crate::constants::{MAX_PARTICIPANTS, PRESALE_SUPPLY, SALE_SUPPLY};
use crate::error::DistributionError;
use crate::state::{DistributionState, ParticipantEntry, ParticipantInput, Participants};
use crate::utils::digest::registry_digest;

pub fn add_participants(
    ctx: Context<AddParticipants>,
    inputs: Vec<ParticipantInput>,
    seal: bool,
) -> Result<()> {
    let st = &mut ctx.accounts.distribution_state;
    require_keys_eq!(ctx.accounts.owner.key(), st.owner, DistributionError::UnauthorizedOwner);
    require!(!st.sealed, DistributionError::RegistrySealed);
    require!(!st.cancelled, DistributionError::DistributionCancelled);

    let participants = &mut ctx.accounts.participants;
    let mut added: u16 = 0;

    for (i, input) in inputs.iter().enumerate() {
        validate_input(input)?;
        require!(
            participants.entries.len() < MAX_PARTICIPANTS,
            DistributionError::ParticipantListFull
        );
        // Reject duplicates vs existing list and within the batch itself.
        require!(
            participants.find(&input.wallet).is_none(),
            DistributionError::DuplicateParticipant
        );
        require!(
            inputs[..i].iter().all(|prev| prev.wallet != input.wallet),
            DistributionError::DuplicateParticipant
        );

        participants.entries.push(ParticipantEntry::new(input));
        added = added.checked_add(1).ok_or(DistributionError::MathOverflow)?;
    }
    st.participant_count = u16::try_from(participants.entries.len())
        .map_err(|_| DistributionError::MathOverflow)?;

    let (sale_sum, presale_sum) = allocation_sums(&participants.entries)?;
    require!(
        sale_sum <= SALE_SUPPLY as u128,
        DistributionError::SaleAllocationExceedsSupply
    );
    require!(
        presale_sum <= PRESALE_SUPPLY as u128,
        DistributionError::PresaleAllocationExceedsSupply
    );

    if seal {
        st.sealed = true;
        st.registry_digest = registry_digest(&participants.entries);
        msg!("participant registry sealed with {} entries", st.participant_count);
    }

    emit!(ParticipantsAdded {
        count_added: added,
        new_total: st.participant_count,
        sale_allocated: sale_sum as u64,
        presale_allocated: presale_sum as u64,
        sealed: st.sealed,
        registry_digest: st.registry_digest,
    });

    Ok(())
}

fn validate_input(input: &ParticipantInput) -> Result<()> {
    require!(
        input.wallet != Pubkey::default(),
        DistributionError::InvalidPubkey
    );
    require!(
        input.sale_allocation > 0 || input.presale_allocation > 0,
        DistributionError::InvalidAllocation
    );
    Ok(())
}

/// Sale and presale allocation totals, widened so the cap check cannot overflow.
fn allocation_sums(
    entries: &[ParticipantEntry],
) -> std::result::Result<(u128, u128), DistributionError> {
    let mut sale: u128 = 0;
    let mut presale: u128 = 0;
    for e in entries {
        sale = sale
            .checked_add(e.sale_allocation as u128)
            .ok_or(DistributionError::MathOverflow)?;
        presale = presale
            .checked_add(e.presale_allocation as u128)
            .ok_or(DistributionError::MathOverflow)?;
    }
    Ok((sale, presale))
}

#[derive(Accounts)]
pub struct AddParticipants<'info> {
    #[account(mut, seeds = [b"distribution_state"], bump)]
    pub distribution_state: Account<'info, DistributionState>,

    #[account(
        mut,
        seeds = [b"participants", distribution_state.key().as_ref()],
        bump
    )]
    pub participants: Box<Account<'info, Participants>>,

    #[account(mut)]
    pub owner: Signer<'info>,
}

#[event]
pub struct ParticipantsAdded {
    pub count_added: u16,
    pub new_total: u16,
    pub sale_allocated: u64,
    pub presale_allocated: u64,
    pub sealed: bool,
    pub registry_digest: [u8; 32],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(seed: u8, sale: u64, presale: u64) -> ParticipantInput {
        ParticipantInput {
            wallet: Pubkey::new_from_array([seed; 32]),
            sale_allocation: sale,
            presale_allocation: presale,
        }
    }

    #[test]
    fn sums_are_split_by_kind() {
        let entries = vec![
            ParticipantEntry::new(&input(1, 10, 0)),
            ParticipantEntry::new(&input(2, 5, 7)),
        ];
        assert_eq!(allocation_sums(&entries).unwrap(), (15, 7));
    }

    #[test]
    fn sums_do_not_overflow_u64() {
        let entries = vec![
            ParticipantEntry::new(&input(1, u64::MAX, u64::MAX)),
            ParticipantEntry::new(&input(2, u64::MAX, 1)),
        ];
        let (sale, presale) = allocation_sums(&entries).unwrap();
        assert_eq!(sale, 2 * u64::MAX as u128);
        assert_eq!(presale, u64::MAX as u128 + 1);
    }

    #[test]
    fn input_needs_wallet_and_some_allocation() {
        assert!(validate_input(&input(1, 0, 1)).is_ok());
        assert!(validate_input(&input(1, 1, 0)).is_ok());
        assert!(validate_input(&input(1, 0, 0)).is_err());
        assert!(validate_input(&input(0, 1, 1)).is_err());
    }
}
