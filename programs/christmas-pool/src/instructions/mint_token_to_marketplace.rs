use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};

use crate::events::MarketplaceTokenMinted;
use crate::state::{MarketplaceTokenPda, MARKETPLACE_TOKEN_SEED};
use crate::ErrorCode;

#[derive(Accounts)]
pub struct MintTokenToMarketplace<'info> {
    /// Fresh mint for the marketplace token. The record PDA becomes the
    /// mint authority, so no further supply can be minted outside the
    /// program.
    #[account(
        init_if_needed,
        signer,
        payer = signer,
        mint::decimals = 0,
        mint::authority = marketplace_token_pda,
        mint::token_program = token_program
    )]
    pub mint: Account<'info, Mint>,

    /// Custody for the freshly minted supply: the record's associated token
    /// account.
    #[account(
        init_if_needed,
        payer = signer,
        associated_token::mint = mint,
        associated_token::authority = marketplace_token_pda,
        associated_token::token_program = token_program
    )]
    pub token_account: Account<'info, TokenAccount>,

    /// The marketplace record, unique per (signer, mint).
    #[account(
        init_if_needed,
        payer = signer,
        space = MarketplaceTokenPda::LEN,
        seeds = [MARKETPLACE_TOKEN_SEED, signer.key().as_ref(), mint.key().as_ref()],
        bump
    )]
    pub marketplace_token_pda: Account<'info, MarketplaceTokenPda>,

    #[account(mut)]
    pub signer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn mint_token_to_marketplace(
    ctx: Context<MintTokenToMarketplace>,
    num_tokens: u64,
    bump: u8,
    description: String,
) -> Result<()> {
    require!(num_tokens > 0, ErrorCode::InvalidAmount);
    MarketplaceTokenPda::validate_description(&description)?;

    // The caller asserts a bump; only the canonical one recomputed from the
    // seeds is accepted.
    require!(
        bump == ctx.bumps.marketplace_token_pda,
        ErrorCode::AddressMismatch
    );

    // One record per (owner, mint). A record that has been written before
    // always carries its owner's key.
    require!(
        ctx.accounts.marketplace_token_pda.is_vacant(),
        ErrorCode::DuplicateRecord
    );

    let signer_key = ctx.accounts.signer.key();
    let mint_key = ctx.accounts.mint.key();
    let seeds = &[
        MARKETPLACE_TOKEN_SEED,
        signer_key.as_ref(),
        mint_key.as_ref(),
        &[bump],
    ];
    let signer_seeds = &[&seeds[..]];

    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        MintTo {
            mint: ctx.accounts.mint.to_account_info(),
            to: ctx.accounts.token_account.to_account_info(),
            authority: ctx.accounts.marketplace_token_pda.to_account_info(),
        },
        signer_seeds,
    );
    token::mint_to(cpi_ctx, num_tokens)?;

    let record = &mut ctx.accounts.marketplace_token_pda;
    record.owner = signer_key;
    record.mint = mint_key;
    record.bump = bump;
    record.description = description;

    msg!(
        "Minted {} marketplace tokens of {} for {}",
        num_tokens,
        mint_key,
        signer_key
    );

    emit!(MarketplaceTokenMinted {
        record: record.key(),
        owner: signer_key,
        mint: mint_key,
        num_tokens,
    });

    Ok(())
}
