pub mod add_to_pool;
pub mod claim_token_from_market;
pub mod mint_token_to_marketplace;

pub use add_to_pool::*;
pub use claim_token_from_market::*;
pub use mint_token_to_marketplace::*;
