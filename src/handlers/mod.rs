//! HTTP 요청 핸들러 모듈
//!
//! - [`auth`] - Google 로그인, 콜백, 로그아웃, 토큰 갱신
//! - [`pages`] - 홈/대시보드 페이지와 보호된 API

use actix_web::http::header;
use actix_web::HttpResponse;

pub mod auth;
pub mod pages;

/// 302 리다이렉트 응답
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}
