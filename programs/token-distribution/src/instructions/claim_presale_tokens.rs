use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::PRESALE_SUPPLY;
use crate::error::DistributionError;
use crate::state::{DistributionState, Participants};
use crate::utils::allocation::settle_presale;
use crate::utils::phase::which_phase;
use crate::utils::token::expected_ata_address;

pub fn claim_presale_tokens(ctx: Context<ClaimPresaleTokens>) -> Result<()> {
    let state_ai = ctx.accounts.distribution_state.to_account_info();
    let state_bump = ctx.bumps.distribution_state;
    let wallet = ctx.accounts.participant.key();

    let st = &mut ctx.accounts.distribution_state;
    let now = Clock::get()?.unix_timestamp;
    st.ensure_claims_open(now)?;
    require!(
        st.presale_distributed < PRESALE_SUPPLY,
        DistributionError::PresaleSupplyExhausted
    );
    st.ensure_funded(ctx.accounts.vault.amount)?;

    require_keys_eq!(ctx.accounts.mint.key(), st.mint, DistributionError::InvalidTokenMint);
    require_keys_eq!(
        ctx.accounts.participant_ata.key(),
        expected_ata_address(&wallet, &st.mint),
        DistributionError::InvalidParticipantAta
    );
    require_keys_eq!(
        ctx.accounts.participant_ata.owner,
        wallet,
        DistributionError::InvalidTokenAccount
    );

    let phase = which_phase(now, st.distribution_start_ts);
    let entry = ctx
        .accounts
        .participants
        .find_mut(&wallet)
        .ok_or(DistributionError::ParticipantNotFound)?;
    require!(entry.presale_allocation > 0, DistributionError::NothingToClaim);

    let settlement = settle_presale(entry, phase)?;
    if settlement.is_empty() {
        msg!(
            "presale: nothing due for {} at phase {} ({} installments claimed)",
            wallet,
            phase,
            entry.presale_phases_claimed
        );
        return Ok(());
    }

    let distributed_after = st
        .presale_distributed
        .checked_add(settlement.amount)
        .ok_or(DistributionError::MathOverflow)?;
    require!(
        distributed_after <= PRESALE_SUPPLY,
        DistributionError::PresaleSupplyExhausted
    );
    require!(
        ctx.accounts.vault.amount >= settlement.amount,
        DistributionError::InsufficientVaultBalance
    );

    settlement.apply(entry);
    st.presale_distributed = distributed_after;

    let signer_seeds: &[&[&[u8]]] = &[&[b"distribution_state", &[state_bump]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.participant_ata.to_account_info(),
                authority: state_ai,
            },
            signer_seeds,
        ),
        settlement.amount,
    )?;

    emit!(PresaleTokensClaimed {
        wallet,
        current_phase: phase,
        first_phase: settlement.first_phase,
        last_phase: settlement.last_phase,
        amount: settlement.amount,
        remaining: settlement.remaining_after,
        presale_distributed: st.presale_distributed,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimPresaleTokens<'info> {
    #[account(mut, seeds = [b"distribution_state"], bump)]
    pub distribution_state: Account<'info, DistributionState>,

    #[account(
        mut,
        seeds = [b"participants", distribution_state.key().as_ref()],
        bump
    )]
    pub participants: Box<Account<'info, Participants>>,

    #[account(
        mut,
        seeds = [b"vault", distribution_state.key().as_ref()],
        bump,
        constraint = vault.mint == distribution_state.mint @ DistributionError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = participant_ata.mint == distribution_state.mint @ DistributionError::InvalidTokenMint,
    )]
    pub participant_ata: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub participant: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct PresaleTokensClaimed {
    pub wallet: Pubkey,
    pub current_phase: u8,
    pub first_phase: u8,
    pub last_phase: u8,
    pub amount: u64,
    pub remaining: u64,
    pub presale_distributed: u64,
}
