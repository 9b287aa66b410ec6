//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 관리하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! - [`auth_config`] - Google OAuth 클라이언트 정보 및 엔드포인트
//! - [`data_config`] - 서버, 실행 환경, 세션, Rate Limiting 설정
//!
//! 모든 설정 구조체는 `from_env()` 외에 `from_lookup(..)`을 제공하므로,
//! 프로세스 환경을 건드리지 않고도 테스트할 수 있습니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # Google OAuth (필수)
//! export GOOGLE_CLIENT_ID="your-client-id"
//! export GOOGLE_CLIENT_SECRET="your-client-secret"
//! export GOOGLE_REDIRECT_URI="http://localhost:3000/auth/google/callback"
//!
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="3000"
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export SESSION_TTL_HOURS="24"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

/// 프로세스 환경 변수 조회
pub fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
