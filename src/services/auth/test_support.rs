//! 테스트용 Google 모의 환경
//!
//! 고정 RSA 키로 ID 토큰을 발급하고, wiremock 서버에 JWKS를 올려
//! 실제 Google 없이 검증 경로 전체를 시험합니다.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::config::{GoogleEndpoints, GoogleOAuthConfig};
use crate::services::auth::GoogleAuthService;

pub const TEST_CLIENT_ID: &str = "test-client.apps.googleusercontent.com";
pub const TEST_KID: &str = "test-key-1";

const TEST_PRIVATE_KEY_PEM: &str = include_str!("testdata/google_test_key.pem");

/// `testdata/google_test_key.pem`의 공개 모듈러스 (base64url)
const TEST_MODULUS: &str = "7X794EbYgz5JuRhv42dasiTRUE66pjf1-qiFcjK9y2XGPaJWB2RJTpYPGyOdXSLdF4-L7nN0rjMVKSOAuvlT-2zbYgbCog_mf0TF1ufmjmcS-r6Q4QNXwd4hOqzubEj-knRT43JwDXH5RTqoCYEnFHZfbASYXRFcP-_39M3bh-oxOmIriMRZW_YgnD9CtuNTwqFTxeRuLiyAZMjBwquQORT80jkKSc2S-o3XXu1ZkvdKeyja05VQg7KWHcCXkV7BGMhI8mKaKFs-ttrktvCggZNUG3AauXr1ftOlCvJOX8ztaqxryQDgGP2jaUH046P5Eu5SmT7CzrdYvWkIqOy3ww";

pub fn jwks_json() -> Value {
    json!({
        "keys": [{
            "kid": TEST_KID,
            "kty": "RSA",
            "alg": "RS256",
            "use": "sig",
            "n": TEST_MODULUS,
            "e": "AQAB"
        }]
    })
}

pub fn standard_claims(audience: &str) -> Value {
    let now = Utc::now().timestamp();
    json!({
        "iss": "https://accounts.google.com",
        "sub": "110169484474386276334",
        "aud": audience,
        "azp": audience,
        "exp": now + 3600,
        "iat": now,
        "email": "jane@example.com",
        "email_verified": true,
        "name": "Jane Doe",
        "picture": "https://lh3.googleusercontent.com/a/photo.jpg"
    })
}

pub fn mint_id_token_with_kid(claims: &Value, kid: &str) -> String {
    let mut header = Header::new(Algorithm::RS256);
    header.kid = Some(kid.to_string());

    let key = EncodingKey::from_rsa_pem(TEST_PRIVATE_KEY_PEM.as_bytes())
        .expect("test key should parse");
    encode(&header, claims, &key).expect("test token should sign")
}

pub fn mint_id_token(claims: &Value) -> String {
    mint_id_token_with_kid(claims, TEST_KID)
}

/// 서명은 그대로 두고 페이로드의 이메일만 바꿉니다.
pub fn tamper_email(token: &str) -> String {
    let parts: Vec<&str> = token.split('.').collect();
    let payload = URL_SAFE_NO_PAD.decode(parts[1]).expect("payload should decode");
    let mut claims: Value = serde_json::from_slice(&payload).expect("payload should parse");
    claims["email"] = json!("attacker@example.com");
    let forged = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&claims).expect("claims serialize"));

    format!("{}.{}.{}", parts[0], forged, parts[2])
}

pub async fn mount_jwks(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/oauth2/v3/certs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(jwks_json()))
        .mount(server)
        .await;
}

pub fn test_config() -> GoogleOAuthConfig {
    GoogleOAuthConfig::new(
        TEST_CLIENT_ID,
        "test-secret",
        "http://localhost:3000/auth/google/callback",
    )
}

pub fn service_for(server: &MockServer) -> GoogleAuthService {
    let http_client = reqwest::Client::builder()
        .no_proxy()
        .build()
        .expect("client should build");

    GoogleAuthService::with_http_client(
        test_config(),
        GoogleEndpoints::with_base_url(&server.uri()),
        http_client,
    )
    .expect("test config is complete")
}
