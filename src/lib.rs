//! Google OAuth 2.0 로그인 파사드
//!
//! Google 로그인에 필요한 OAuth 2.0 / OpenID Connect 연산을 하나의 서비스로 묶고,
//! Bearer ID 토큰으로 라우트를 보호하는 actix-web 미들웨어를 제공합니다.
//!
//! # Features
//!
//! - **동의 화면 URL**: 오프라인 접근과 재동의를 요청하는 인증 URL 생성
//! - **토큰 교환/갱신/폐기**: Authorization code 교환, 리프레시, 폐기
//! - **사용자 정보**: OAuth2 v1 userinfo 조회
//! - **ID 토큰 검증**: JWKS 캐시 기반 RS256 서명 및 `iss`/`aud`/`exp` 검증
//! - **인증 미들웨어**: 실패 시 401 JSON 응답, 성공 시 클레임을 요청에 부착
//!
//! 파사드는 자격 증명을 보관하지 않으므로 하나의 인스턴스를 여러 사용자 요청이 공유할 수 있습니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 예제 서버 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Handlers / MW   │ ← 세션, Bearer 토큰 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │GoogleAuthService│ ← OAuth 2.0 파사드
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Google APIs   │ ← token / userinfo / revoke / certs
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use google_auth::config::GoogleOAuthConfig;
//! use google_auth::services::auth::GoogleAuthService;
//!
//! let google_auth = Arc::new(GoogleAuthService::new(GoogleOAuthConfig::from_env())?);
//!
//! let login_url = google_auth.auth_url();
//! let tokens = google_auth.exchange_code(&code).await?;
//! let profile = google_auth.user_profile(&tokens.access_token).await?;
//!
//! App::new().service(web::scope("/api").wrap(google_auth.middleware()));
//! ```

pub mod config;
pub mod caching;
pub mod domain;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
