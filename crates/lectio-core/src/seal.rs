//! Payload sealing with ChaCha20-Poly1305.
//!
//! A sealed blob is `nonce || ciphertext`, base64-encoded. The base64 string
//! is what the stash stores and what the integrity digest is computed over.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Nonce,
};
use rand::RngCore;

use crate::error::CoreError;

/// Length of the ChaCha20-Poly1305 nonce prepended to each blob.
const NONCE_LEN: usize = 12;

/// A 256-bit pre-shared sealing key.
///
/// The production key is an embedded constant shared by both ends of the
/// handoff, so sealing provides obfuscation of the URL and viewer id against
/// casual inspection, not confidentiality against a motivated client-side
/// attacker. This is a known gap in the handoff contract; do not substitute a
/// derived or rotated key without changing the contract.
#[derive(Clone)]
pub struct SealKey([u8; 32]);

impl SealKey {
    /// Generate a new random key.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Create from raw bytes.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Seal a plaintext into a self-contained base64 blob.
    ///
    /// A fresh random nonce is drawn per call, so sealing the same plaintext
    /// twice yields different blobs.
    pub fn seal(&self, plaintext: &[u8]) -> Result<String, CoreError> {
        let cipher = ChaCha20Poly1305::new_from_slice(&self.0)
            .map_err(|e| CoreError::EncryptionError(e.to_string()))?;

        let mut nonce_bytes = [0u8; NONCE_LEN];
        rand::thread_rng().fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = cipher
            .encrypt(nonce, plaintext)
            .map_err(|e| CoreError::EncryptionError(e.to_string()))?;

        let mut blob = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        blob.extend_from_slice(&nonce_bytes);
        blob.extend_from_slice(&ciphertext);
        Ok(BASE64.encode(blob))
    }

    /// Open a sealed blob back into its plaintext.
    pub fn open(&self, sealed: &str) -> Result<Vec<u8>, CoreError> {
        let blob = BASE64
            .decode(sealed)
            .map_err(|e| CoreError::DecryptionError(e.to_string()))?;

        if blob.len() < NONCE_LEN {
            return Err(CoreError::DecryptionError("blob too short".into()));
        }
        let (nonce_bytes, ciphertext) = blob.split_at(NONCE_LEN);

        let cipher = ChaCha20Poly1305::new_from_slice(&self.0)
            .map_err(|e| CoreError::DecryptionError(e.to_string()))?;

        let nonce = Nonce::from_slice(nonce_bytes);
        cipher
            .decrypt(nonce, ciphertext)
            .map_err(|e| CoreError::DecryptionError(e.to_string()))
    }
}

impl std::fmt::Debug for SealKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material.
        f.write_str("SealKey(..)")
    }
}
