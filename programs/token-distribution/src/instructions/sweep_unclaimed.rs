use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::error::DistributionError;
use crate::state::DistributionState;

pub fn sweep_unclaimed(ctx: Context<SweepUnclaimed>) -> Result<()> {
    let st = &ctx.accounts.distribution_state;
    require_keys_eq!(ctx.accounts.owner.key(), st.owner, DistributionError::UnauthorizedOwner);

    let now = Clock::get()?.unix_timestamp;
    require!(now >= st.sweep_ts, DistributionError::SweepBeforeDeadline);

    require_keys_eq!(ctx.accounts.mint.key(), st.mint, DistributionError::InvalidTokenMint);
    require_keys_eq!(
        ctx.accounts.treasury.mint,
        st.mint,
        DistributionError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.treasury.owner,
        st.deposit_authority,
        DistributionError::InvalidTokenAccount
    );

    let amount = ctx.accounts.vault.amount;
    if amount == 0 {
        msg!("sweep: vault already empty");
        emit!(UnclaimedSwept {
            owner: st.owner,
            amount: 0,
        });
        return Ok(());
    }

    let signer_seeds: &[&[&[u8]]] = &[&[b"distribution_state", &[ctx.bumps.distribution_state]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.treasury.to_account_info(),
                authority: ctx.accounts.distribution_state.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(UnclaimedSwept {
        owner: st.owner,
        amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SweepUnclaimed<'info> {
    #[account(seeds = [b"distribution_state"], bump)]
    pub distribution_state: Account<'info, DistributionState>,

    #[account(
        mut,
        seeds = [b"vault", distribution_state.key().as_ref()],
        bump,
        constraint = vault.mint == distribution_state.mint @ DistributionError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Token account owned by the deposit authority.
    #[account(mut)]
    pub treasury: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct UnclaimedSwept {
    pub owner: Pubkey,
    pub amount: u64,
}
