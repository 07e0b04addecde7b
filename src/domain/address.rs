//! Token Address Validation
//!
//! Shape validation for candidate Solana contract addresses. This runs before
//! any network call is issued, so it must be pure and must never panic.

use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

/// Check whether a string looks like a valid Solana token mint address.
///
/// Rejects EVM-style `0x` addresses, any string whose length is not 43 or 44
/// characters, and anything the `Pubkey` constructor refuses (non-base58
/// characters, wrong decoded byte length).
pub fn is_valid_token_address(address: &str) -> bool {
    if address.starts_with("0x") {
        return false;
    }

    // Base58-encoded 32-byte keys are 43 or 44 characters
    let len = address.len();
    if len != 43 && len != 44 {
        return false;
    }

    Pubkey::from_str(address).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
    const WSOL_MINT: &str = "So11111111111111111111111111111111111111112";

    #[test]
    fn test_accepts_known_mints() {
        assert!(is_valid_token_address(USDC_MINT));
        assert!(is_valid_token_address(WSOL_MINT));
    }

    #[test]
    fn test_rejects_evm_address() {
        // Right length, wrong chain
        assert!(!is_valid_token_address(
            "0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984abcd"
        ));
        assert!(!is_valid_token_address("0x"));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(!is_valid_token_address(""));
        assert!(!is_valid_token_address("abc"));
        assert!(!is_valid_token_address(&"1".repeat(42)));
        assert!(!is_valid_token_address(&"1".repeat(45)));
        assert!(!is_valid_token_address(&format!("{}X", USDC_MINT)));
    }

    #[test]
    fn test_rejects_non_base58_characters() {
        // '0', 'O', 'I', 'l' are not in the base58 alphabet
        assert!(!is_valid_token_address(&"0".repeat(44)));
        assert!(!is_valid_token_address(&"O".repeat(44)));
        assert!(!is_valid_token_address(&"l".repeat(43)));
        assert!(!is_valid_token_address(
            "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1!"
        ));
    }

    #[test]
    fn test_rejects_valid_base58_with_wrong_byte_length() {
        // 44 chars of '1' decode to 44 zero bytes, not 32
        assert!(!is_valid_token_address(&"1".repeat(44)));
    }
}
