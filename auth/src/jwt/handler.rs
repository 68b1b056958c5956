use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::JwtError;

/// JWT token handler for encoding and decoding tokens.
///
/// Generic over the claims type. Signs with HS256 and requires an `exp` claim
/// on decode, checked with zero leeway.
///
/// An empty secret is held as a misconfiguration: encoding always fails with
/// `InvalidSecret` and decoding always fails with `InvalidToken`.
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    has_secret: bool,
}

impl JwtHandler {
    /// Create a new JWT handler with a secret key.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            has_secret: !secret.is_empty(),
        }
    }

    /// Encode claims into a JWT token.
    ///
    /// # Errors
    /// * `InvalidSecret` - Handler was built with an empty secret
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode<T: Serialize>(&self, claims: &T) -> Result<String, JwtError> {
        if !self.has_secret {
            return Err(JwtError::InvalidSecret);
        }

        encode(&Header::new(self.algorithm), claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Decode and validate a JWT token.
    ///
    /// Signature, algorithm and expiry are verified in one step.
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed, tampered, expired, or missing `exp`
    pub fn decode<T: DeserializeOwned>(&self, token: &str) -> Result<T, JwtError> {
        if !self.has_secret {
            return Err(JwtError::InvalidToken);
        }

        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        decode::<T>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|_| JwtError::InvalidToken)
    }
}
