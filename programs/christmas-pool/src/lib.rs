use anchor_lang::prelude::*;

declare_id!("5ZohsZtvVnjLy7TZDuujXneojE8dq27Y4mrsq3e8eKTZ");

pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;

pub use instructions::*;
pub use state::*;

#[program]
pub mod christmas_pool {
    use super::*;

    /// Contribute `amount` of the pool mint into the shared pool.
    ///
    /// Lazily creates the caller's contribution record and the singleton
    /// pool record on first use.
    pub fn add_to_pool(ctx: Context<AddToPool>, amount: u64) -> Result<()> {
        instructions::add_to_pool(ctx, amount)
    }

    /// Mint `num_tokens` of a fresh mint into program custody and persist a
    /// marketplace record for it.
    ///
    /// The caller-asserted `bump` is checked against the canonical
    /// re-derivation; it is never trusted as supplied.
    pub fn mint_token_to_marketplace(
        ctx: Context<MintTokenToMarketplace>,
        num_tokens: u64,
        bump: u8,
        description: String,
    ) -> Result<()> {
        instructions::mint_token_to_marketplace(ctx, num_tokens, bump, description)
    }

    /// Transfer `amount` tokens out of a marketplace record's custody into
    /// the claimant's token account.
    pub fn claim_token_from_market(
        ctx: Context<ClaimTokenFromMarket>,
        amount: u64,
    ) -> Result<()> {
        instructions::claim_token_from_market(ctx, amount)
    }
}

#[error_code]
pub enum ErrorCode {
    #[msg("Supplied account does not match the derived address")]
    AddressMismatch,
    #[msg("A record already exists for this owner and mint")]
    DuplicateRecord,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Insufficient funds for the requested amount")]
    InsufficientFunds,
    #[msg("Signer is not authorized for this account")]
    Unauthorized,
    #[msg("Account data does not match the expected schema size")]
    InvalidAccountSize,
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Description exceeds the maximum length")]
    DescriptionTooLong,
}
