//! Google OAuth 토큰 모델
//!
//! 토큰 엔드포인트의 원본 응답([`GoogleTokenResponse`])과
//! 호출자에게 돌려주는 토큰 집합([`TokenSet`])을 정의합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Google 토큰 엔드포인트 응답
///
/// Authorization code 교환과 리프레시 토큰 갱신 모두 이 형식으로 응답합니다.
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// 토큰 만료 시간 (초 단위)
    pub expires_in: Option<i64>,
    /// 갱신 응답에는 보통 포함되지 않습니다
    pub refresh_token: Option<String>,
    pub scope: Option<String>,
    /// `openid` 스코프를 요청한 경우에만 포함됩니다
    pub id_token: Option<String>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// 코드 교환/토큰 갱신 결과
///
/// 반환된 뒤에는 호출자가 소유하며, 요청 간에 유지하려면 세션 등에 직접 저장해야 합니다.
/// 파사드는 어떤 토큰도 내부에 보관하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSet {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
    pub token_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    /// 토큰 만료 시간 (초 단위)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
    /// 만료 시각 (Unix epoch 밀리초)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<i64>,
}

impl TokenSet {
    /// 토큰 응답을 수신 시각 기준의 토큰 집합으로 변환합니다.
    ///
    /// `expires_in`이 `i64` 밀리초 범위를 넘으면 만료 시각은 `None`으로 남습니다.
    pub fn from_response(response: GoogleTokenResponse, received_at: DateTime<Utc>) -> Self {
        let expiry_date = response.expires_in.and_then(|seconds| {
            seconds
                .checked_mul(1000)
                .and_then(|millis| received_at.timestamp_millis().checked_add(millis))
        });

        Self {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            id_token: response.id_token,
            token_type: response.token_type,
            scope: response.scope,
            expires_in: response.expires_in,
            expiry_date,
        }
    }

    /// 주어진 시각에 액세스 토큰이 만료되었는지 확인합니다.
    ///
    /// 만료 정보가 없으면 만료되지 않은 것으로 봅니다.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expiry_date
            .map(|expiry| now.timestamp_millis() >= expiry)
            .unwrap_or(false)
    }
}
