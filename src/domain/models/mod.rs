//! 도메인 모델 모듈
//!
//! - [`oauth`] - Google 토큰, 사용자 정보, ID 토큰 클레임, JWKS
//! - [`auth`] - 요청에 부착되는 인증 정보 추출자

pub mod oauth;
pub mod auth;

pub use oauth::*;
pub use auth::*;
