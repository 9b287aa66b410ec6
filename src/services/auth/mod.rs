//! 인증 서비스 모듈
//!
//! Google OAuth 2.0 로그인 파사드와 ID 토큰 검증기를 제공합니다.
//!
//! # Features
//!
//! - 동의 화면 URL 생성
//! - Authorization code 교환, 액세스 토큰 갱신/폐기
//! - 사용자 정보 조회
//! - JWKS 기반 ID 토큰 검증 (키 캐시 및 교체 대응)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::GoogleAuthService;
//!
//! let google_auth = Arc::new(GoogleAuthService::new(GoogleOAuthConfig::from_env())?);
//! let payload = google_auth.verify_id_token(&id_token).await?;
//! ```

pub mod google_auth_service;
pub mod id_token_verifier;

pub use google_auth_service::*;
pub use id_token_verifier::*;

#[cfg(test)]
pub mod test_support;

#[cfg(test)]
mod google_auth_service_tests;
