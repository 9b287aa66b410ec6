//! API 라우트 설정 모듈
//!
//! 예제 서버의 엔드포인트를 기능별로 그룹화하여 등록합니다.
//!
//! # Routes
//!
//! | 경로 | 인증 | 설명 |
//! |------|------|------|
//! | `GET /` | - | 홈 페이지 |
//! | `GET /dashboard` | 세션 | 프로필 페이지 |
//! | `GET /auth/google` | - | Google 동의 화면으로 이동 |
//! | `GET /auth/google/callback` | - | 로그인 완료 |
//! | `GET /logout` | 세션 | 토큰 폐기 및 로그아웃 |
//! | `POST /api/auth/refresh` | - | 액세스 토큰 갱신 |
//! | `GET /api/me` | Bearer ID 토큰 | 검증된 클레임 |
//! | `GET /health` | - | 헬스체크 |
//!
//! # Examples
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(web::Data::from(google_auth.clone()))
//!     .app_data(sessions.clone())
//!     .configure(|cfg| configure_all_routes(cfg, &google_auth))
//! ```

use std::sync::Arc;

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::handlers;
use crate::services::auth::GoogleAuthService;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig, google_auth: &Arc<GoogleAuthService>) {
    // Health check endpoint
    cfg.service(health_check);

    configure_page_routes(cfg);
    configure_auth_routes(cfg);
    configure_api_routes(cfg, google_auth);
}

fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::pages::home)
        .service(handlers::pages::dashboard);
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(handlers::auth::google_login)
            .service(handlers::auth::google_callback),
    )
    .service(handlers::auth::logout);
}

/// `/api/auth`는 `/api` 스코프보다 먼저 등록해야 미들웨어를 거치지 않습니다.
fn configure_api_routes(cfg: &mut web::ServiceConfig, google_auth: &Arc<GoogleAuthService>) {
    cfg.service(web::scope("/api/auth").service(handlers::auth::refresh_token));

    cfg.service(
        web::scope("/api")
            .wrap(google_auth.middleware())
            .service(handlers::pages::api_me),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
