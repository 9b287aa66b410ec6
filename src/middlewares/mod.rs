//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용하는 인증 미들웨어를 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (GoogleAuthMiddleware)
//! - Bearer 토큰 추출
//! - Google ID 토큰 서명/클레임 검증
//! - 검증된 클레임을 request extension에 저장
//! - 실패 시 핸들러를 호출하지 않고 401 응답
//!
//! # 사용 방법
//!
//! ## 특정 스코프에만 적용
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! App::new()
//!     .service(
//!         web::scope("/api")
//!             .wrap(google_auth.middleware())
//!             .service(api_me)
//!     )
//!     .service(health_check)
//! ```
//!
//! ## 프레임워크 없이 판정만 사용
//! ```rust,ignore
//! let gate = AuthGate::new(google_auth.clone());
//! match gate.check(request.header("Authorization")).await {
//!     GateOutcome::Allowed(payload) => { /* ... */ }
//!     GateOutcome::Rejected(rejection) => respond(401, rejection.body()),
//! }
//! ```

pub mod auth_gate;
pub mod auth_middleware;
mod auth_inner;

pub use auth_gate::{bearer_token, AuthGate, GateOutcome, Rejection};
pub use auth_middleware::GoogleAuthMiddleware;
