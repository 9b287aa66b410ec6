//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! Google 로그인 파사드의 각 연산은 실패 종류별로 구분된 [`AuthError`]를 반환합니다.
//! 예제 서버의 핸들러는 이를 감싸는 [`AppError`]를 사용하며,
//! 두 타입 모두 `actix_web::ResponseError`를 구현하여 JSON 에러 응답으로 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | 에러 | HTTP Status |
//! |------|-------------|
//! | `AuthError::Configuration` | 500 Internal Server Error |
//! | `AuthError::TokenVerification` | 401 Unauthorized |
//! | 그 외 `AuthError` (Google 호출 실패) | 502 Bad Gateway |
//! | `AppError::ValidationError` | 400 Bad Request |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AuthError;
//!
//! match google_auth.revoke_token(&access_token).await {
//!     Ok(_) => log::info!("토큰 폐기 완료"),
//!     // 폐기 실패는 로그아웃을 막지 않습니다
//!     Err(AuthError::TokenRevocation(e)) => log::error!("토큰 폐기 실패: {}", e),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// Google 인증 파사드 에러 타입
///
/// 각 변형은 하위 전송/프로토콜 실패 메시지를 그대로 담습니다.
/// 파사드 내부에서는 어떤 에러도 삼키지 않으며, 재시도도 하지 않습니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AuthError {
    /// 필수 설정값(client_id, client_secret, redirect_uri) 누락
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Authorization code → 토큰 교환 실패
    #[error("Failed to get tokens: {0}")]
    TokenExchange(String),

    /// 사용자 정보 조회 또는 응답 매핑 실패
    #[error("Failed to get user profile: {0}")]
    ProfileFetch(String),

    /// ID 토큰 서명/발급자/대상/만료 검증 실패
    #[error("Failed to verify ID token: {0}")]
    TokenVerification(String),

    /// 리프레시 토큰으로 액세스 토큰 갱신 실패
    #[error("Failed to refresh token: {0}")]
    TokenRefresh(String),

    /// 토큰 폐기 실패 (호출자는 치명적이지 않은 실패로 취급해야 함)
    #[error("Failed to revoke token: {0}")]
    TokenRevocation(String),
}

impl AuthError {
    /// 에러 종류에 대응하는 HTTP 상태 코드
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::TokenVerification(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::BAD_GATEWAY,
        }
    }
}

impl actix_web::ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        AuthError::status_code(self)
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(AuthError::status_code(self))
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 예제 서버 핸들러용 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 인증 파사드 에러 (상태 코드는 `AuthError`를 따름)
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::Auth(e) => e.status_code(),
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(actix_web::ResponseError::status_code(self))
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AuthResult<T> = Result<T, AuthError>;
