pub mod initialize_distribution;
pub mod add_participants;
pub mod deposit_tokens;
pub mod claim_sale_tokens;
pub mod claim_presale_tokens;
pub mod cancel_distribution;
pub mod withdraw_after_cancel;
pub mod sweep_unclaimed;
pub mod phase_view;
pub mod emit_claim_quote;

pub use initialize_distribution::*;
pub use add_participants::*;
pub use deposit_tokens::*;
pub use claim_sale_tokens::*;
pub use claim_presale_tokens::*;
pub use cancel_distribution::*;
pub use withdraw_after_cancel::*;
pub use sweep_unclaimed::*;
pub use phase_view::*;
pub use emit_claim_quote::*;
