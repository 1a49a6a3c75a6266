//! # Keyed Digests
//!
//! HMAC over SHA-512/256, encoded as standard padded base64.
//!
//! ## Security Properties
//!
//! - Secrets shorter than [`MIN_SECRET_LENGTH`] bytes are rejected at construction
//! - Secret material is zeroized when the generator is dropped
//! - Output is deterministic for a given secret and input

use base64::{engine::general_purpose::STANDARD, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha512_256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::DigestError;

type HmacSha512_256 = Hmac<Sha512_256>;

/// Minimum secret length in bytes.
pub const MIN_SECRET_LENGTH: usize = 32;

#[derive(Clone, Zeroize, ZeroizeOnDrop)]
struct SecretMaterial(Vec<u8>);

/// Produces keyed, text-safe digests of input strings.
///
/// Stateless after construction and safe to share across threads.
#[derive(Clone)]
pub struct DigestGenerator {
    secret: SecretMaterial,
}

impl DigestGenerator {
    /// Create a generator from a secret key.
    ///
    /// # Errors
    ///
    /// Returns `DigestError::WeakKey` if the secret is shorter than
    /// [`MIN_SECRET_LENGTH`] bytes.
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self, DigestError> {
        let secret = secret.as_ref();
        if secret.len() < MIN_SECRET_LENGTH {
            return Err(DigestError::WeakKey {
                min: MIN_SECRET_LENGTH,
                actual: secret.len(),
            });
        }

        Ok(Self {
            secret: SecretMaterial(secret.to_vec()),
        })
    }

    /// Compute the encoded digest of `input`.
    ///
    /// # Errors
    ///
    /// Returns `DigestError::Encoding` if the MAC cannot be keyed.
    pub fn generate(&self, input: &str) -> Result<String, DigestError> {
        let mut mac = HmacSha512_256::new_from_slice(&self.secret.0)
            .map_err(|e| DigestError::Encoding(e.to_string()))?;
        mac.update(input.as_bytes());
        let tag = mac.finalize().into_bytes();

        Ok(STANDARD.encode(tag))
    }
}

impl std::fmt::Debug for DigestGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DigestGenerator")
            .field("secret", &"<redacted>")
            .finish()
    }
}
