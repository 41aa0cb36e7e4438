use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{MAX_PARTICIPANTS, TOKEN_DECIMALS};
use crate::error::DistributionError;
use crate::state::{DistributionState, Participants, ScheduleParams};

pub fn initialize_distribution(
    ctx: Context<InitializeDistribution>,
    deposit_authority: Pubkey,
    schedule: ScheduleParams,
) -> Result<()> {
    schedule.validate()?;
    require!(
        deposit_authority != Pubkey::default(),
        DistributionError::InvalidPubkey
    );
    require!(
        ctx.accounts.mint.decimals == TOKEN_DECIMALS,
        DistributionError::InvalidTokenMint
    );

    // Treasury must be a wallet that can own a token account, not one of our PDAs.
    let state_key = ctx.accounts.distribution_state.key();
    require!(deposit_authority != state_key, DistributionError::InvalidConfig);
    require!(
        deposit_authority != ctx.accounts.vault.key(),
        DistributionError::InvalidConfig
    );
    require!(
        deposit_authority != ctx.accounts.participants.key(),
        DistributionError::InvalidConfig
    );

    let st = &mut ctx.accounts.distribution_state;
    st.mint = ctx.accounts.mint.key();
    st.owner = ctx.accounts.owner.key();
    st.deposit_authority = deposit_authority;
    st.freeze_ts = schedule.freeze_ts;
    st.distribution_start_ts = schedule.distribution_start_ts;
    st.sweep_ts = schedule.sweep_ts;
    st.cancelled = false;
    st.sealed = false;
    st.participant_count = 0;
    st.sale_distributed = 0;
    st.presale_distributed = 0;
    st.registry_digest = [0u8; 32];

    let participants = &mut ctx.accounts.participants;
    participants.entries = Vec::with_capacity(MAX_PARTICIPANTS);

    emit!(DistributionInitialized {
        mint: st.mint,
        owner: st.owner,
        deposit_authority,
        freeze_ts: st.freeze_ts,
        distribution_start_ts: st.distribution_start_ts,
        sweep_ts: st.sweep_ts,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeDistribution<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + DistributionState::SIZE,
        seeds = [b"distribution_state"],
        bump
    )]
    pub distribution_state: Account<'info, DistributionState>,

    #[account(
        init,
        payer = owner,
        space = Participants::space(MAX_PARTICIPANTS),
        seeds = [b"participants", distribution_state.key().as_ref()],
        bump
    )]
    pub participants: Box<Account<'info, Participants>>,

    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = distribution_state,
        seeds = [b"vault", distribution_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct DistributionInitialized {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub deposit_authority: Pubkey,
    pub freeze_ts: i64,
    pub distribution_start_ts: i64,
    pub sweep_ts: i64,
}
