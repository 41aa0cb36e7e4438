//! Registry commitment: blake3 over fixed-layout leaves, in registration order.

use bytemuck::{Pod, Zeroable};

use crate::state::ParticipantEntry;

/// Fixed byte layout hashed for each participant.
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct RegistryLeaf {
    pub wallet: [u8; 32],
    pub sale_allocation: u64,
    pub presale_allocation: u64,
}

impl From<&ParticipantEntry> for RegistryLeaf {
    fn from(e: &ParticipantEntry) -> Self {
        Self {
            wallet: e.wallet.to_bytes(),
            sale_allocation: e.sale_allocation,
            presale_allocation: e.presale_allocation,
        }
    }
}

pub fn registry_digest(entries: &[ParticipantEntry]) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&(entries.len() as u64).to_le_bytes());
    for e in entries {
        let leaf = RegistryLeaf::from(e);
        hasher.update(bytemuck::bytes_of(&leaf));
    }
    *hasher.finalize().as_bytes()
}
