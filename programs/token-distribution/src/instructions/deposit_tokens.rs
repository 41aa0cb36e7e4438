use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::DISTRIBUTION_SUPPLY;
use crate::error::DistributionError;
use crate::state::DistributionState;

pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
    let st = &ctx.accounts.distribution_state;
    require_keys_eq!(ctx.accounts.owner.key(), st.owner, DistributionError::UnauthorizedOwner);

    let now = Clock::get()?.unix_timestamp;
    st.ensure_deposit_allowed(now, ctx.accounts.vault.amount, amount)?;

    require_keys_eq!(ctx.accounts.vault.mint, st.mint, DistributionError::InvalidTokenMint);
    require_keys_eq!(
        ctx.accounts.owner_token_account.mint,
        st.mint,
        DistributionError::InvalidTokenMint
    );
    require_keys_eq!(
        ctx.accounts.owner_token_account.owner,
        ctx.accounts.owner.key(),
        DistributionError::InvalidTokenAccount
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.owner_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.owner.to_account_info(),
            },
        ),
        amount,
    )?;

    ctx.accounts.vault.reload()?;
    require!(
        ctx.accounts.vault.amount <= DISTRIBUTION_SUPPLY,
        DistributionError::OverDeposit
    );

    emit!(TokensDeposited {
        owner: ctx.accounts.owner.key(),
        amount,
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DepositTokens<'info> {
    #[account(seeds = [b"distribution_state"], bump)]
    pub distribution_state: Account<'info, DistributionState>,

    #[account(
        mut,
        seeds = [b"vault", distribution_state.key().as_ref()],
        bump,
        constraint = vault.mint == distribution_state.mint @ DistributionError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensDeposited {
    pub owner: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
