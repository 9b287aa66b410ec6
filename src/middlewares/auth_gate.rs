//! Bearer ID 토큰 인증 판정
//!
//! HTTP 프레임워크와 무관하게 `Authorization` 헤더 값만으로 요청의 통과 여부를 결정합니다.
//! actix-web 어댑터는 [`AuthMiddlewareService`](super::auth_inner::AuthMiddlewareService)에 있습니다.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::domain::models::oauth::IdTokenPayload;
use crate::services::auth::GoogleAuthService;

/// 거부 사유
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// 헤더가 없거나 `Bearer <token>` 형식이 아님
    MissingToken,
    /// 토큰 검증 실패 (상세 사유는 로그용)
    InvalidToken(String),
}

impl Rejection {
    /// 클라이언트에게 돌려주는 메시지
    pub fn message(&self) -> &'static str {
        match self {
            Rejection::MissingToken => "No token provided",
            Rejection::InvalidToken(_) => "Invalid token",
        }
    }

    /// 401 응답 본문
    pub fn body(&self) -> Value {
        json!({ "error": self.message() })
    }
}

/// 판정 결과
#[derive(Debug, Clone, PartialEq)]
pub enum GateOutcome {
    Allowed(IdTokenPayload),
    Rejected(Rejection),
}

/// `Authorization` 헤더에서 Bearer 토큰을 꺼냅니다.
///
/// 스킴은 대소문자를 구분하며, 토큰이 비어 있으면 `None`입니다.
pub fn bearer_token(authorization: &str) -> Option<&str> {
    authorization
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Bearer ID 토큰 검증기
#[derive(Clone)]
pub struct AuthGate {
    google_auth: Arc<GoogleAuthService>,
}

impl AuthGate {
    pub fn new(google_auth: Arc<GoogleAuthService>) -> Self {
        Self { google_auth }
    }

    /// 헤더 값으로 요청 통과 여부를 판정합니다.
    pub async fn check(&self, authorization: Option<&str>) -> GateOutcome {
        let Some(token) = authorization.and_then(bearer_token) else {
            return GateOutcome::Rejected(Rejection::MissingToken);
        };

        match self.google_auth.verify_id_token(token).await {
            Ok(payload) => GateOutcome::Allowed(payload),
            Err(e) => GateOutcome::Rejected(Rejection::InvalidToken(e.to_string())),
        }
    }
}
