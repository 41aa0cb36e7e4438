use anchor_lang::prelude::*;

/// A single participant entry stored in the participants list PDA.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParticipantEntry {
    pub wallet: Pubkey,
    /// Tokens bought in the sale; claimable once, in full, after start.
    pub sale_allocation: u64,
    pub sale_claimed: bool,
    /// Tokens bought in the presale; released in ten phase installments.
    pub presale_allocation: u64,
    /// Presale tokens not yet claimed.
    pub presale_remaining: u64,
    /// Number of presale installments already claimed, in [0, 10].
    pub presale_phases_claimed: u8,
}

impl ParticipantEntry {
    pub const SIZE: usize =
        32 + // wallet
        8 +  // sale_allocation
        1 +  // sale_claimed
        8 +  // presale_allocation
        8 +  // presale_remaining
        1;   // presale_phases_claimed

    pub fn new(input: &ParticipantInput) -> Self {
        Self {
            wallet: input.wallet,
            sale_allocation: input.sale_allocation,
            sale_claimed: false,
            presale_allocation: input.presale_allocation,
            presale_remaining: input.presale_allocation,
            presale_phases_claimed: 0,
        }
    }
}

/// PDA holding the participant registry, in registration order.
#[account]
pub struct Participants {
    pub entries: Vec<ParticipantEntry>,
}

impl Participants {
    /// Space for discriminator + vec length prefix + `capacity` entries.
    pub const fn space(capacity: usize) -> usize {
        8 + 4 + capacity * ParticipantEntry::SIZE
    }

    pub fn find(&self, wallet: &Pubkey) -> Option<&ParticipantEntry> {
        self.entries.iter().find(|e| e.wallet == *wallet)
    }

    pub fn find_mut(&mut self, wallet: &Pubkey) -> Option<&mut ParticipantEntry> {
        self.entries.iter_mut().find(|e| e.wallet == *wallet)
    }
}

/// Instruction input (wallet + allocations).
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParticipantInput {
    pub wallet: Pubkey,
    pub sale_allocation: u64,
    pub presale_allocation: u64,
}
