use anchor_lang::prelude::*;

/// A contribution was moved into pool custody and both totals advanced.
#[event]
pub struct PoolContribution {
    pub user: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub user_total: u64,
    pub pool_total: u64,
}

/// A new marketplace record was created with its full supply in custody.
#[event]
pub struct MarketplaceTokenMinted {
    pub record: Pubkey,
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub num_tokens: u64,
}

/// Tokens left a marketplace record's custody for a claimant.
#[event]
pub struct MarketplaceTokenClaimed {
    pub record: Pubkey,
    pub claimant: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub remaining: u64,
}
