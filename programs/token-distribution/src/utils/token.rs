use anchor_lang::prelude::*;

/// ATA derivation: PDA(owner, token_program_id, mint) with associated token program id.
pub fn expected_ata_address(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    let seeds: &[&[u8]] = &[
        owner.as_ref(),
        anchor_spl::token::ID.as_ref(),
        mint.as_ref(),
    ];
    let (ata, _) = Pubkey::find_program_address(seeds, &anchor_spl::associated_token::ID);
    ata
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ata_is_deterministic_per_owner() {
        let mint = Pubkey::new_from_array([8u8; 32]);
        let a = Pubkey::new_from_array([1u8; 32]);
        let b = Pubkey::new_from_array([2u8; 32]);
        assert_eq!(expected_ata_address(&a, &mint), expected_ata_address(&a, &mint));
        assert_ne!(expected_ata_address(&a, &mint), expected_ata_address(&b, &mint));
    }
}
