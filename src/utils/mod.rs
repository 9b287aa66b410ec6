//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 스코프 목록 파싱, HTML 이스케이프

pub mod string_utils;
