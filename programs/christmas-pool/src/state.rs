use anchor_lang::prelude::*;

use crate::ErrorCode;

/// Seed tags for program-derived addresses. These are a wire contract:
/// clients re-derive every record address from the same byte strings.
pub const USER_ACCOUNT_SEED: &[u8] = b"user_account";
pub const CHRISTMAS_ACCOUNT_SEED: &[u8] = b"christmas_account";
pub const MARKETPLACE_TOKEN_SEED: &[u8] = b"mpt_pda";

/// Longest description a marketplace record can carry. Bounding it keeps
/// every record at exactly [`MarketplaceTokenPda::LEN`] bytes so the
/// marketplace scan can filter on account size alone.
pub const MAX_DESCRIPTION_LEN: usize = 50;

/// Per-contributor record, created lazily on the first contribution.
#[account]
pub struct UserAccount {
    pub is_initialized: bool,
    pub total_amount_contributed: u64,
}

impl UserAccount {
    /// 8 discriminator + 1 bool + 8 u64
    pub const LEN: usize = 8 + 1 + 8;

    /// Add `amount` to the running total, rejecting wraparound. The total is
    /// only written when the checked sum succeeds.
    pub fn record_contribution(&mut self, amount: u64) -> Result<()> {
        self.total_amount_contributed = self
            .total_amount_contributed
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(())
    }
}

/// Singleton pool record at a fixed derived address. Holds the mint the
/// pool accepts and the sum of every contribution ever made.
#[account]
pub struct ChristmasAccount {
    pub is_initialized: bool,
    pub mint: Pubkey,
    pub total_amount_contributed: u64,
}

impl ChristmasAccount {
    /// 8 discriminator + 1 bool + 32 pubkey + 8 u64
    pub const LEN: usize = 8 + 1 + 32 + 8;

    pub fn record_contribution(&mut self, amount: u64) -> Result<()> {
        self.total_amount_contributed = self
            .total_amount_contributed
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(())
    }
}

/// Marketplace token record, unique per (owner, mint) pair. The address is
/// derived from both keys; `bump` stores the canonical derivation bump.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct MarketplaceTokenPda {
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub bump: u8,
    pub description: String,
}

impl MarketplaceTokenPda {
    /// 8 discriminator + 32 owner + 32 mint + 1 bump + 4 string length
    /// prefix + description bytes. Records are always allocated to this full
    /// size regardless of the description actually stored.
    pub const LEN: usize = 8 + 32 + 32 + 1 + 4 + MAX_DESCRIPTION_LEN;

    /// A freshly allocated record is zeroed; a written one always carries
    /// its owner's key.
    pub fn is_vacant(&self) -> bool {
        self.owner == Pubkey::default()
    }

    pub fn validate_description(description: &str) -> Result<()> {
        require!(
            description.len() <= MAX_DESCRIPTION_LEN,
            ErrorCode::DescriptionTooLong
        );
        Ok(())
    }
}
