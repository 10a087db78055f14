use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::events::PoolContribution;
use crate::state::{ChristmasAccount, UserAccount, CHRISTMAS_ACCOUNT_SEED, USER_ACCOUNT_SEED};
use crate::ErrorCode;

#[derive(Accounts)]
pub struct AddToPool<'info> {
    /// The contributor's record, created on their first contribution. The
    /// seeds constraint re-derives the address from the signer, so a
    /// spoofed account for another user cannot be passed in.
    #[account(
        init_if_needed,
        payer = signer,
        space = UserAccount::LEN,
        seeds = [USER_ACCOUNT_SEED, signer.key().as_ref()],
        bump
    )]
    pub user_account: Account<'info, UserAccount>,

    /// The singleton pool record, created on the first contribution overall.
    #[account(
        init_if_needed,
        payer = signer,
        space = ChristmasAccount::LEN,
        seeds = [CHRISTMAS_ACCOUNT_SEED],
        bump
    )]
    pub christmas_account: Account<'info, ChristmasAccount>,

    /// Source of the contribution; must belong to the signer and hold the
    /// pool mint.
    #[account(
        mut,
        constraint = user_token_account.owner == signer.key() @ ErrorCode::Unauthorized,
        constraint = user_token_account.mint == mint.key() @ ErrorCode::AddressMismatch
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    /// Pool custody: the pool record's associated token account.
    #[account(
        init_if_needed,
        payer = signer,
        associated_token::mint = mint,
        associated_token::authority = christmas_account,
        associated_token::token_program = token_program
    )]
    pub christmas_token_account: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub signer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn add_to_pool(ctx: Context<AddToPool>, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);

    let user_account = &mut ctx.accounts.user_account;
    let christmas_account = &mut ctx.accounts.christmas_account;

    if !user_account.is_initialized {
        user_account.is_initialized = true;
    }

    if !christmas_account.is_initialized {
        christmas_account.is_initialized = true;
        christmas_account.mint = ctx.accounts.mint.key();
    }

    // The pool accepts exactly one mint for its lifetime.
    require_keys_eq!(
        christmas_account.mint,
        ctx.accounts.mint.key(),
        ErrorCode::AddressMismatch
    );

    require!(
        ctx.accounts.user_token_account.amount >= amount,
        ErrorCode::InsufficientFunds
    );

    let cpi_accounts = Transfer {
        from: ctx.accounts.user_token_account.to_account_info(),
        to: ctx.accounts.christmas_token_account.to_account_info(),
        authority: ctx.accounts.signer.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(ctx.accounts.token_program.to_account_info(), cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    user_account.record_contribution(amount)?;
    christmas_account.record_contribution(amount)?;

    msg!(
        "Contribution of {} recorded for {}",
        amount,
        ctx.accounts.signer.key()
    );
    msg!(
        "Pool total: {}",
        christmas_account.total_amount_contributed
    );

    emit!(PoolContribution {
        user: ctx.accounts.signer.key(),
        mint: ctx.accounts.mint.key(),
        amount,
        user_total: user_account.total_amount_contributed,
        pool_total: christmas_account.total_amount_contributed,
    });

    Ok(())
}
