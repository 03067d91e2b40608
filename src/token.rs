//! ES256 developer-token minting.
//!
//! The Apple Music API authenticates browser players with a developer
//! token: a compact JWT signed with the team's P-256 key, carrying the
//! team identifier as issuer and the key identifier in the `kid` header.
//! Credentials live in a JSON document next to the server and are re-read
//! for every mint, so rotating the key on disk needs no restart.

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Token lifetime in seconds: 180 days, just under the six-month maximum
/// the Apple Music API accepts.
pub const TOKEN_TTL_SECS: i64 = 180 * 24 * 60 * 60;

/// Errors from loading credentials or signing a token.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The secrets document could not be read.
    #[error("failed to read secrets: {0}")]
    Io(#[from] std::io::Error),

    /// The secrets document is not the expected JSON shape.
    #[error("malformed secrets document: {0}")]
    MalformedSecrets(#[from] serde_json::Error),

    /// Key parsing or signature generation failed.
    #[error("signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

/// Signing credentials, as stored in `secrets.json`.
///
/// Field names map to the camelCase keys of the document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Secrets {
    /// PEM-encoded P-256 private key (the `.p8` download).
    pub private_key: String,
    /// 10-character developer team identifier, used as the `iss` claim.
    pub team_id: String,
    /// Identifier of the signing key, embedded as the `kid` header.
    pub key_id: String,
}

impl Secrets {
    /// Parse a secrets document from raw bytes.
    pub fn parse(raw: &[u8]) -> Result<Self, TokenError> {
        Ok(serde_json::from_slice(raw)?)
    }

    /// Read and parse the secrets document at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TokenError> {
        let raw = std::fs::read(path)?;
        Self::parse(&raw)
    }
}

/// Registered claims carried by a developer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeveloperTokenClaims {
    /// Issuer: the developer team identifier.
    pub iss: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch (`iat` + [`TOKEN_TTL_SECS`]).
    pub exp: i64,
}

/// Mint a compact-serialized developer token from `secrets`.
///
/// Signs fresh on every call; nothing is cached between mints.
pub fn mint_developer_token(secrets: &Secrets) -> Result<String, TokenError> {
    let iat = Utc::now().timestamp();
    let claims = DeveloperTokenClaims {
        iss: secrets.team_id.clone(),
        iat,
        exp: iat + TOKEN_TTL_SECS,
    };

    let mut header = Header::new(Algorithm::ES256);
    header.kid = Some(secrets.key_id.clone());

    let key = EncodingKey::from_ec_pem(secrets.private_key.as_bytes())?;
    Ok(jsonwebtoken::encode(&header, &claims, &key)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{TEST_PRIVATE_KEY_PEM, TEST_PUBLIC_KEY_PEM};
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use jsonwebtoken::{decode, decode_header, DecodingKey, Validation};

    fn test_secrets() -> Secrets {
        Secrets {
            private_key: TEST_PRIVATE_KEY_PEM.to_string(),
            team_id: "ABCDE12345".to_string(),
            key_id: "KEY1234567".to_string(),
        }
    }

    #[test]
    fn mints_compact_three_segment_token() {
        let token = mint_developer_token(&test_secrets()).unwrap();
        let segments: Vec<&str> = token.split('.').collect();
        assert_eq!(segments.len(), 3);
        assert!(segments.iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn header_names_algorithm_and_key() {
        let token = mint_developer_token(&test_secrets()).unwrap();
        let header = decode_header(&token).unwrap();

        assert_eq!(header.alg, Algorithm::ES256);
        assert_eq!(header.kid.as_deref(), Some("KEY1234567"));
    }

    #[test]
    fn claims_carry_issuer_and_half_year_expiry() {
        let token = mint_developer_token(&test_secrets()).unwrap();

        let segments: Vec<&str> = token.split('.').collect();
        let payload = URL_SAFE_NO_PAD.decode(segments[1]).unwrap();
        let claims: serde_json::Value = serde_json::from_slice(&payload).unwrap();

        assert_eq!(claims["iss"], "ABCDE12345");
        let iat = claims["iat"].as_i64().unwrap();
        let exp = claims["exp"].as_i64().unwrap();
        assert_eq!(exp - iat, TOKEN_TTL_SECS);
        assert_eq!(exp - iat, 15_552_000);
    }

    #[test]
    fn signature_verifies_against_public_half() {
        let token = mint_developer_token(&test_secrets()).unwrap();

        let key = DecodingKey::from_ec_pem(TEST_PUBLIC_KEY_PEM.as_bytes()).unwrap();
        let decoded =
            decode::<DeveloperTokenClaims>(&token, &key, &Validation::new(Algorithm::ES256))
                .unwrap();

        assert_eq!(decoded.claims.iss, "ABCDE12345");
        assert_eq!(decoded.claims.exp - decoded.claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn rejects_unparseable_private_key() {
        let mut secrets = test_secrets();
        secrets.private_key = "not a pem".to_string();

        let err = mint_developer_token(&secrets).unwrap_err();
        assert!(matches!(err, TokenError::Signing(_)));
    }

    #[test]
    fn parses_camel_case_document() {
        let doc = serde_json::json!({
            "teamId": "ABCDE12345",
            "keyId": "KEY1234567",
            "privateKey": TEST_PRIVATE_KEY_PEM,
        });

        let secrets = Secrets::parse(doc.to_string().as_bytes()).unwrap();
        assert_eq!(secrets.team_id, "ABCDE12345");
        assert_eq!(secrets.key_id, "KEY1234567");
        assert_eq!(secrets.private_key, TEST_PRIVATE_KEY_PEM);
    }

    #[test]
    fn rejects_document_with_missing_keys() {
        let err = Secrets::parse(br#"{"teamId": "ABCDE12345"}"#).unwrap_err();
        assert!(matches!(err, TokenError::MalformedSecrets(_)));
    }

    #[test]
    fn load_surfaces_missing_file_as_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Secrets::load(dir.path().join("secrets.json")).unwrap_err();
        assert!(matches!(err, TokenError::Io(_)));
    }
}
