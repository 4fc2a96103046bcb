//! Solana address parsing and validation.
//!
//! A Solana address is the Base58 encoding of a raw 32-byte Ed25519 public
//! key. There is no hashing step and no checksum, so "valid" only means the
//! string decodes to exactly 32 bytes. Off-curve keys (program-derived
//! addresses) are valid destinations too.

use std::fmt;
use std::str::FromStr;

use crate::error::SolError;

/// A decoded Solana address.
///
/// Used both for the connected wallet account and for transfer destinations.
/// It carries only public key bytes, never key material.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 32]);

impl Address {
    /// Wraps raw public key bytes.
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }
}

impl From<[u8; 32]> for Address {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl FromStr for Address {
    type Err = SolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        address_to_bytes(s).map(Self)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&bytes_to_address(&self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

/// Validate a Solana address string.
///
/// Returns `Ok(true)` if the string decodes to exactly 32 bytes, or an
/// error describing why it does not.
pub fn validate_address(address: &str) -> Result<bool, SolError> {
    address_to_bytes(address).map(|_| true)
}

/// Decode a Solana address string to its 32-byte representation.
pub fn address_to_bytes(address: &str) -> Result<[u8; 32], SolError> {
    if address.is_empty() {
        return Err(SolError::InvalidAddress("empty string".into()));
    }

    let bytes = bs58::decode(address)
        .into_vec()
        .map_err(|e| SolError::InvalidAddress(format!("base58 decode failed: {e}")))?;

    let arr: [u8; 32] = bytes.try_into().map_err(|v: Vec<u8>| {
        SolError::InvalidAddress(format!("expected 32 bytes, got {}", v.len()))
    })?;

    Ok(arr)
}

/// Encode 32 bytes as a Solana address (Base58 string).
pub fn bytes_to_address(bytes: &[u8; 32]) -> String {
    bs58::encode(bytes).into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The System Program address is 32 zero bytes, which encodes to
    /// "11111111111111111111111111111111" in Base58.
    #[test]
    fn system_program_address() {
        let addr: Address = "11111111111111111111111111111111".parse().unwrap();
        assert_eq!(addr.to_bytes(), [0u8; 32]);
        assert_eq!(addr.to_string(), "11111111111111111111111111111111");
    }

    #[test]
    fn token_program_parses_and_displays_unchanged() {
        let address = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";
        let parsed: Address = address.parse().unwrap();
        assert_eq!(parsed.to_string(), address);
    }

    #[test]
    fn debug_shows_base58() {
        let addr = Address::new([0u8; 32]);
        assert_eq!(
            format!("{addr:?}"),
            "Address(11111111111111111111111111111111)"
        );
    }

    #[test]
    fn validate_valid_address() {
        assert!(validate_address("MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr").unwrap());
    }

    #[test]
    fn validate_garbage_returns_error() {
        // Valid alphabet, wrong length.
        let err = validate_address("Addr123").unwrap_err();
        assert!(err.to_string().contains("invalid address"));
        // '-' and '!' are outside the Base58 alphabet.
        let err = validate_address("not-a-valid-address!!!").unwrap_err();
        assert!(err.to_string().contains("base58 decode failed"));
    }

    #[test]
    fn validate_too_short_returns_error() {
        // "1" decodes to a single zero byte, which is not 32 bytes.
        let err = validate_address("1").unwrap_err();
        assert!(err.to_string().contains("expected 32 bytes, got 1"));
    }

    #[test]
    fn empty_string_is_rejected() {
        assert!("".parse::<Address>().is_err());
    }

    #[test]
    fn whitespace_is_not_part_of_the_alphabet() {
        assert!(" 11111111111111111111111111111111".parse::<Address>().is_err());
    }
}
