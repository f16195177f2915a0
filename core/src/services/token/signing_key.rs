//! Signing key derivation for the token service.
//!
//! Operators may configure the token secret either as a standard Base64
//! string (recommended) or as plain text (a common misconfiguration). The
//! `Auto` encoding accepts both without a separate flag, and any candidate
//! material shorter than the HMAC-SHA256 minimum is stretched with a
//! SHA-256 digest so the derived key always meets the required strength.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use rand::RngCore;
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Minimum key length accepted for HMAC-SHA256 signing (256 bits),
/// per RFC 7518
pub const MIN_KEY_BYTES: usize = 32;

/// How a configured secret string should be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecretEncoding {
    /// Detect Base64 versus plain text with the compatibility heuristic
    #[default]
    Auto,
    /// Secret is a standard Base64 encoding of the key material; invalid
    /// input is a configuration error
    Base64,
    /// UTF-8 bytes of the secret are used as-is
    Plain,
}

impl FromStr for SecretEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(SecretEncoding::Auto),
            "base64" => Ok(SecretEncoding::Base64),
            "plain" => Ok(SecretEncoding::Plain),
            _ => Err(format!("Invalid secret encoding: {}", s)),
        }
    }
}

/// Provenance of the derived key material
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    /// Secret decoded as standard Base64
    Base64Decoded,
    /// UTF-8 bytes of the secret used directly
    PlainUtf8,
    /// Candidate material was below the minimum length and was replaced
    /// by its SHA-256 digest
    DigestStretched,
    /// Fresh random key; tokens signed with it cannot be verified after
    /// a process restart
    Ephemeral,
}

/// Key material for HMAC-SHA256 signing, always at least
/// [`MIN_KEY_BYTES`] long
pub struct SigningKey {
    bytes: Vec<u8>,
    source: KeySource,
}

impl SigningKey {
    /// Derives the signing key from a configured secret.
    ///
    /// Derivation is a pure function of the secret and encoding: the same
    /// input always yields the same key.
    ///
    /// # Arguments
    ///
    /// * `secret` - The operator-supplied secret string
    /// * `encoding` - How the secret should be interpreted
    ///
    /// # Returns
    ///
    /// The derived key, or an error when `SecretEncoding::Base64` is
    /// requested for a string that is not valid Base64
    pub fn derive(secret: &str, encoding: SecretEncoding) -> Result<Self, DomainError> {
        let normalized = secret.trim();

        let (candidate, source) = match encoding {
            SecretEncoding::Auto => {
                if looks_like_base64(normalized) {
                    match BASE64.decode(normalized) {
                        Ok(bytes) => (bytes, KeySource::Base64Decoded),
                        // Fall back to raw bytes when decode fails
                        Err(_) => (normalized.as_bytes().to_vec(), KeySource::PlainUtf8),
                    }
                } else {
                    (normalized.as_bytes().to_vec(), KeySource::PlainUtf8)
                }
            }
            SecretEncoding::Base64 => {
                let bytes = BASE64
                    .decode(normalized)
                    .map_err(|e| DomainError::Validation {
                        message: format!("token secret is not valid Base64: {e}"),
                    })?;
                (bytes, KeySource::Base64Decoded)
            }
            SecretEncoding::Plain => (normalized.as_bytes().to_vec(), KeySource::PlainUtf8),
        };

        if candidate.len() < MIN_KEY_BYTES {
            let digest = Sha256::digest(&candidate);
            return Ok(Self {
                bytes: digest.to_vec(),
                source: KeySource::DigestStretched,
            });
        }

        Ok(Self {
            bytes: candidate,
            source,
        })
    }

    /// Generates a fresh random 256-bit key.
    ///
    /// Degraded mode: every token signed with an ephemeral key becomes
    /// unverifiable once the process restarts. The token service logs a
    /// warning when constructed with one.
    pub fn ephemeral() -> Self {
        let mut bytes = vec![0u8; MIN_KEY_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self {
            bytes,
            source: KeySource::Ephemeral,
        }
    }

    /// Raw key bytes for the HMAC
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Provenance of the key material
    pub fn source(&self) -> KeySource {
        self.source
    }

    /// True when this key was generated at random rather than derived
    pub fn is_ephemeral(&self) -> bool {
        self.source == KeySource::Ephemeral
    }
}

// Key material must never reach logs or error messages.
impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SigningKey({:?}, {} bytes)", self.source, self.bytes.len())
    }
}

/// Heuristic Base64 classification: the Base64 character set plus a
/// length that is a multiple of four. Not a strict validation.
fn looks_like_base64(s: &str) -> bool {
    !s.is_empty()
        && s.len() % 4 == 0
        && s.bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/' || b == b'=')
}
