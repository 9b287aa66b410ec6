//! JWKS (JSON Web Key Set) 모델
//!
//! Google의 ID 토큰 서명 공개키 목록(`/oauth2/v3/certs`)을 표현합니다.

use serde::{Deserialize, Serialize};

/// 단일 RSA 공개키
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Jwk {
    pub kid: String,
    pub kty: String,
    #[serde(default)]
    pub alg: Option<String>,
    #[serde(rename = "use", default)]
    pub key_use: Option<String>,
    /// RSA modulus (base64url)
    pub n: String,
    /// RSA exponent (base64url)
    pub e: String,
}

/// 공개키 목록
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JwkSet {
    pub keys: Vec<Jwk>,
}

impl JwkSet {
    /// `kid`로 키를 찾습니다.
    pub fn find_key(&self, kid: &str) -> Option<&Jwk> {
        self.keys.iter().find(|key| key.kid == kid)
    }
}
