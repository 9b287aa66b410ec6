//! 요청 DTO 모듈

pub mod auth_request;

pub use auth_request::*;
