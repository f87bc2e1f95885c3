//! Request authentication — per-call signed tokens.
//!
//! ## Token Model
//!
//! Every outbound call carries `Authorization: bearer <jwt>`. The token is
//! HS256-signed with the shared key and is bound to one request:
//!
//! - `iss` — the configured user.
//! - `iat` / `exp` — Unix seconds; the token lives for [`TOKEN_TTL_SECS`].
//! - `qsh` — hex SHA-256 of `METHOD&target`, so a token cannot be replayed
//!   against another method or path.
//!
//! Tokens are minted fresh for every request (including each poll) and are
//! never cached.

pub mod signer;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub use signer::TokenSigner;

/// Lifetime of a signed token, in seconds.
pub const TOKEN_TTL_SECS: i64 = 1;

/// Claim set carried by every request token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
    pub qsh: String,
}

/// Compute the query-string hash binding a token to `method` + `target`.
pub fn query_string_hash(method: &str, target: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(method.as_bytes());
    hasher.update(b"&");
    hasher.update(target.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_hash_is_stable() {
        assert_eq!(
            query_string_hash("GET", "/clusters"),
            query_string_hash("GET", "/clusters")
        );
    }

    #[test]
    fn test_query_string_hash_matches_sha256_of_joined_input() {
        let expected = hex::encode(Sha256::digest(b"GET&/hello"));
        assert_eq!(query_string_hash("GET", "/hello"), expected);
        assert_eq!(expected.len(), 64);
    }

    #[test]
    fn test_query_string_hash_changes_with_either_input() {
        let base = query_string_hash("GET", "/clusters");
        assert_ne!(base, query_string_hash("POST", "/clusters"));
        assert_ne!(base, query_string_hash("GET", "/clusters/1"));
    }
}
