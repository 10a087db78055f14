use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::events::MarketplaceTokenClaimed;
use crate::state::{MarketplaceTokenPda, MARKETPLACE_TOKEN_SEED};
use crate::ErrorCode;

#[derive(Accounts)]
pub struct ClaimTokenFromMarket<'info> {
    pub mint: Account<'info, Mint>,

    /// Where the claimed tokens land; created on the claimant's first claim.
    #[account(
        init_if_needed,
        payer = signer,
        associated_token::mint = mint,
        associated_token::authority = signer,
        associated_token::token_program = token_program
    )]
    pub to_token_account: Account<'info, TokenAccount>,

    /// The record's custody account holding the unclaimed supply.
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = marketplace_token_pda,
        associated_token::token_program = token_program
    )]
    pub marketplace_token_pda_ata: Account<'info, TokenAccount>,

    /// The marketplace record authorizing the transfer out of custody. Its
    /// address is re-derived from the stored owner and the supplied mint,
    /// and only the stored canonical bump is accepted.
    #[account(
        seeds = [
            MARKETPLACE_TOKEN_SEED,
            marketplace_token_pda.owner.as_ref(),
            mint.key().as_ref(),
        ],
        bump = marketplace_token_pda.bump,
        has_one = mint @ ErrorCode::AddressMismatch,
        constraint = marketplace_token_pda.to_account_info().data_len()
            == MarketplaceTokenPda::LEN @ ErrorCode::InvalidAccountSize
    )]
    pub marketplace_token_pda: Account<'info, MarketplaceTokenPda>,

    /// The claimant. Claims are open to any signer; custody release is
    /// authorized by the record PDA itself.
    #[account(mut)]
    pub signer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn claim_token_from_market(ctx: Context<ClaimTokenFromMarket>, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);

    let available = ctx.accounts.marketplace_token_pda_ata.amount;
    require!(amount <= available, ErrorCode::InsufficientFunds);
    let remaining = available
        .checked_sub(amount)
        .ok_or(ErrorCode::ArithmeticOverflow)?;

    let record = &ctx.accounts.marketplace_token_pda;
    let seeds = &[
        MARKETPLACE_TOKEN_SEED,
        record.owner.as_ref(),
        record.mint.as_ref(),
        &[record.bump],
    ];
    let signer_seeds = &[&seeds[..]];

    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.marketplace_token_pda_ata.to_account_info(),
            to: ctx.accounts.to_token_account.to_account_info(),
            authority: ctx.accounts.marketplace_token_pda.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(cpi_ctx, amount)?;

    msg!(
        "Claimed {} of {} from marketplace record {}",
        amount,
        record.mint,
        record.key()
    );

    emit!(MarketplaceTokenClaimed {
        record: record.key(),
        claimant: ctx.accounts.signer.key(),
        mint: record.mint,
        amount,
        remaining,
    });

    Ok(())
}
