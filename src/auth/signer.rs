//! HS256 token signer.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header};

use crate::auth::{query_string_hash, Claims, TOKEN_TTL_SECS};
use crate::error::AuthError;

/// Signs request tokens with the shared key.
///
/// The key is never exposed; `Debug` only prints the issuer.
#[derive(Clone)]
pub struct TokenSigner {
    issuer: String,
    key: EncodingKey,
}

impl TokenSigner {
    /// Create a signer for `issuer`. Fails on an empty key.
    pub fn new(issuer: impl Into<String>, key: &[u8]) -> Result<Self, AuthError> {
        if key.is_empty() {
            return Err(AuthError::EmptySecret);
        }
        Ok(Self {
            issuer: issuer.into(),
            key: EncodingKey::from_secret(key),
        })
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Build the claim set for a request issued at `issued_at`.
    pub fn claims(&self, method: &str, target: &str, issued_at: DateTime<Utc>) -> Claims {
        let iat = issued_at.timestamp();
        Claims {
            iss: self.issuer.clone(),
            iat,
            exp: iat + TOKEN_TTL_SECS,
            qsh: query_string_hash(method, target),
        }
    }

    /// Sign a token for `method` + `target` at the current time and return the
    /// `Authorization` header value.
    pub fn sign(&self, method: &str, target: &str) -> Result<String, AuthError> {
        self.sign_at(method, target, Utc::now())
    }

    /// Same as [`sign`](Self::sign) with an injected issue time.
    pub fn sign_at(
        &self,
        method: &str,
        target: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        let claims = self.claims(method, target, issued_at);
        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.key)?;
        Ok(format!("bearer {}", token))
    }
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("issuer", &self.issuer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use jsonwebtoken::errors::ErrorKind;
    use jsonwebtoken::{DecodingKey, Validation};

    const KEY: &[u8] = b"My Secret";

    fn verifier() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&["admin"]);
        validation
    }

    fn token_of(header_value: &str) -> &str {
        header_value
            .strip_prefix("bearer ")
            .expect("header value should start with 'bearer '")
    }

    #[test]
    fn test_empty_key_is_rejected() {
        let err = TokenSigner::new("admin", b"").unwrap_err();
        assert!(matches!(err, AuthError::EmptySecret));
    }

    #[test]
    fn test_claims_expire_one_second_after_issue() {
        let signer = TokenSigner::new("admin", KEY).unwrap();
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let claims = signer.claims("POST", "/clusters", at);

        assert_eq!(claims.iss, "admin");
        assert_eq!(claims.iat, at.timestamp());
        assert_eq!(claims.exp, at.timestamp() + 1);
        assert_eq!(claims.qsh, query_string_hash("POST", "/clusters"));
    }

    #[test]
    fn test_sign_at_is_deterministic() {
        let signer = TokenSigner::new("admin", KEY).unwrap();
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        assert_eq!(
            signer.sign_at("GET", "/volumes", at).unwrap(),
            signer.sign_at("GET", "/volumes", at).unwrap()
        );
    }

    #[test]
    fn test_tokens_issued_apart_differ_in_expiration() {
        let signer = TokenSigner::new("admin", KEY).unwrap();
        let first = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let second = first + Duration::seconds(2);

        let a = signer.sign_at("GET", "/clusters", first).unwrap();
        let b = signer.sign_at("GET", "/clusters", second).unwrap();
        assert_ne!(a, b);
        assert_ne!(
            signer.claims("GET", "/clusters", first).exp,
            signer.claims("GET", "/clusters", second).exp
        );
    }

    #[test]
    fn test_fresh_token_verifies_with_shared_key() {
        let signer = TokenSigner::new("admin", KEY).unwrap();
        let header_value = signer.sign("DELETE", "/nodes/abc").unwrap();

        let decoded = jsonwebtoken::decode::<Claims>(
            token_of(&header_value),
            &DecodingKey::from_secret(KEY),
            &verifier(),
        )
        .unwrap();

        assert_eq!(decoded.claims.iss, "admin");
        assert_eq!(decoded.claims.qsh, query_string_hash("DELETE", "/nodes/abc"));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let signer = TokenSigner::new("admin", KEY).unwrap();
        let past = Utc::now() - Duration::seconds(30);
        let header_value = signer.sign_at("GET", "/hello", past).unwrap();

        let err = jsonwebtoken::decode::<Claims>(
            token_of(&header_value),
            &DecodingKey::from_secret(KEY),
            &verifier(),
        )
        .unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ExpiredSignature));
    }

    #[test]
    fn test_wrong_key_is_rejected() {
        let signer = TokenSigner::new("admin", KEY).unwrap();
        let header_value = signer.sign("GET", "/hello").unwrap();

        let err = jsonwebtoken::decode::<Claims>(
            token_of(&header_value),
            &DecodingKey::from_secret(b"another key"),
            &verifier(),
        )
        .unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidSignature));
    }

    #[test]
    fn test_debug_hides_key() {
        let signer = TokenSigner::new("admin", KEY).unwrap();
        let printed = format!("{:?}", signer);
        assert!(printed.contains("admin"));
        assert!(!printed.contains("My Secret"));
    }
}
