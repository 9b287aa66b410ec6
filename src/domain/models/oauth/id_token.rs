//! Google ID 토큰 클레임 모델

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 서명 검증을 통과한 Google ID 토큰의 클레임
///
/// 파사드는 검증 외에는 클레임을 해석하지 않고 그대로 전달합니다.
/// 자주 쓰는 클레임은 필드로 노출하고, 그 외 클레임은 `extra`에 보존됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdTokenPayload {
    /// 발급자 (`accounts.google.com` 또는 `https://accounts.google.com`)
    pub iss: String,
    /// Google 사용자 고유 ID
    pub sub: String,
    /// 대상 (OAuth 클라이언트 ID)
    pub aud: String,
    /// 만료 시각 (Unix timestamp)
    pub exp: i64,
    /// 발급 시각 (Unix timestamp)
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Google Workspace 도메인
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
    /// 위에 정의되지 않은 나머지 클레임
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
