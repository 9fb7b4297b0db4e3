use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::claims::TokenScope;
use super::errors::TokenError;

/// Encoder/decoder for signed, expiring, scope-tagged tokens.
///
/// Holds the process-wide signing secret and algorithm; both are fixed at
/// construction so parallel instances with distinct secrets can coexist
/// (test isolation, key rollover). Uses HS256 (HMAC with SHA-256).
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a codec with a secret key.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Sign a token for `subject` with the given scope, expiring `ttl` from now.
    ///
    /// Two calls with identical arguments produce distinct strings whenever
    /// the embedded issued-at differs; callers must not compare tokens for
    /// equality to compare identity.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn encode(
        &self,
        subject: &str,
        scope: TokenScope,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);
        let claims = Claims::new(subject, scope, ttl);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and return its subject.
    ///
    /// Checks signature, then expiry, then scope. The three failure modes
    /// are distinct so flows can react to each (see `TokenError`).
    ///
    /// # Errors
    /// * `Malformed` - Bad structure or signature (wrong secret included)
    /// * `Expired` - `exp` is in the past
    /// * `ScopeMismatch` - Signed and live, but issued for another purpose
    pub fn decode(&self, token: &str, expected_scope: TokenScope) -> Result<String, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Malformed(e.to_string()),
                }
            })?;

        let claims = token_data.claims;
        if claims.scope != expected_scope {
            return Err(TokenError::ScopeMismatch {
                expected: expected_scope,
                actual: claims.scope,
            });
        }

        Ok(claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> TokenCodec {
        TokenCodec::new(b"test_secret_key_at_least_32_bytes!")
    }

    #[test]
    fn test_round_trip_all_scopes() {
        let codec = codec();

        for scope in [
            TokenScope::Access,
            TokenScope::Refresh,
            TokenScope::EmailConfirmation,
        ] {
            let token = codec
                .encode("alice@example.com", scope, Duration::minutes(15))
                .expect("Failed to encode token");
            let subject = codec.decode(&token, scope).expect("Failed to decode token");
            assert_eq!(subject, "alice@example.com");
        }
    }

    #[test]
    fn test_decode_expired_token() {
        let codec = codec();

        let token = codec
            .encode("alice@example.com", TokenScope::Access, Duration::minutes(-5))
            .expect("Failed to encode token");

        let result = codec.decode(&token, TokenScope::Access);
        assert_eq!(result, Err(TokenError::Expired));
    }

    #[test]
    fn test_decode_scope_mismatch() {
        let codec = codec();

        let token = codec
            .encode("alice@example.com", TokenScope::Refresh, Duration::days(7))
            .expect("Failed to encode token");

        let result = codec.decode(&token, TokenScope::Access);
        assert_eq!(
            result,
            Err(TokenError::ScopeMismatch {
                expected: TokenScope::Access,
                actual: TokenScope::Refresh,
            })
        );
    }

    #[test]
    fn test_decode_with_wrong_secret_is_malformed() {
        let signer = TokenCodec::new(b"secret1_at_least_32_bytes_long_key!");
        let verifier = TokenCodec::new(b"secret2_at_least_32_bytes_long_key!");

        let token = signer
            .encode("alice@example.com", TokenScope::Access, Duration::minutes(15))
            .expect("Failed to encode token");

        let result = verifier.decode(&token, TokenScope::Access);
        assert!(matches!(result, Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_decode_garbage_is_malformed() {
        let result = codec().decode("not.a.token", TokenScope::Access);
        assert!(matches!(result, Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_encode_is_not_byte_deterministic_across_instants() {
        let codec = codec();

        // iat differs across these two calls as long as the clock advances;
        // equality of token strings is never part of the contract.
        let first = codec
            .encode("alice@example.com", TokenScope::Access, Duration::minutes(15))
            .expect("Failed to encode token");
        std::thread::sleep(std::time::Duration::from_millis(1100));
        let second = codec
            .encode("alice@example.com", TokenScope::Access, Duration::minutes(15))
            .expect("Failed to encode token");

        assert_ne!(first, second);
        assert_eq!(codec.decode(&first, TokenScope::Access).unwrap(), "alice@example.com");
        assert_eq!(codec.decode(&second, TokenScope::Access).unwrap(), "alice@example.com");
    }
}
