use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::SALE_SUPPLY;
use crate::error::DistributionError;
use crate::state::{DistributionState, Participants};
use crate::utils::allocation::settle_sale;
use crate::utils::token::expected_ata_address;

pub fn claim_sale_tokens(ctx: Context<ClaimSaleTokens>) -> Result<()> {
    // Avoid borrow checker conflicts: capture AccountInfos/keys before taking mutable borrows.
    let state_ai = ctx.accounts.distribution_state.to_account_info();
    let state_bump = ctx.bumps.distribution_state;
    let wallet = ctx.accounts.participant.key();

    let st = &mut ctx.accounts.distribution_state;
    let now = Clock::get()?.unix_timestamp;
    st.ensure_claims_open(now)?;
    require!(
        st.sale_distributed < SALE_SUPPLY,
        DistributionError::SaleSupplyExhausted
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

    let entry = ctx
        .accounts
        .participants
        .find_mut(&wallet)
        .ok_or(DistributionError::ParticipantNotFound)?;
    let amount = settle_sale(entry, st.sale_distributed)?;
    let distributed_after = st
        .sale_distributed
        .checked_add(amount)
        .ok_or(DistributionError::MathOverflow)?;
    require!(
        ctx.accounts.vault.amount >= amount,
        DistributionError::InsufficientVaultBalance
    );

    entry.sale_claimed = true;
    st.sale_distributed = distributed_after;

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
        amount,
    )?;

    emit!(SaleTokensClaimed {
        wallet,
        amount,
        sale_distributed: st.sale_distributed,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimSaleTokens<'info> {
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
pub struct SaleTokensClaimed {
    pub wallet: Pubkey,
    pub amount: u64,
    pub sale_distributed: u64,
}
