//! 도메인 계층
//!
//! - [`models`] - Google OAuth 토큰/프로필/클레임 값 객체
//! - [`dto`] - 예제 서버 요청 DTO

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
