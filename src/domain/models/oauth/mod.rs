//! # Google OAuth 2.0 Domain Models
//!
//! Google OAuth 2.0 / OpenID Connect 플로우에서 주고받는 값들을 정의합니다.
//!
//! ## Authorization Code Flow
//! ```text
//! 1. 사용자 → 인증 URL로 리다이렉트 (access_type=offline, prompt=consent)
//! 2. Google → 인증 후 code와 함께 redirect_uri로 리다이렉트
//! 3. 서버 → code를 TokenSet으로 교환
//! 4. 서버 → access_token으로 UserProfile 조회
//! 5. API 클라이언트 → Authorization: Bearer <id_token> 으로 보호된 API 호출
//! ```
//!
//! ## 구성
//!
//! - [`google_user`] - `UserProfile`
//! - [`google_token`] - `GoogleTokenResponse`, `TokenSet`
//! - [`id_token`] - `IdTokenPayload`
//! - [`jwks`] - `Jwk`, `JwkSet`

pub mod google_user;
pub mod google_token;
pub mod id_token;
pub mod jwks;

pub use google_user::*;
pub use google_token::*;
pub use id_token::*;
pub use jwks::*;
