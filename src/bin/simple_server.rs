//! 최소 구성 Google 로그인 예제 서버
//!
//! 미들웨어와 Rate Limiting 없이 로그인, 콜백, 대시보드(JSON), 로그아웃만 제공합니다.

use actix_web::{get, middleware, web, App, HttpRequest, HttpResponse, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use serde_json::json;

use google_auth::caching::SessionStore;
use google_auth::config::{GoogleOAuthConfig, ServerConfig, SessionConfig};
use google_auth::domain::OAuthCallbackQuery;
use google_auth::handlers::{self, auth::complete_login, redirect};
use google_auth::services::auth::GoogleAuthService;

/// 콜백 실패 시 500 "Authentication failed"
#[get("/google/callback")]
async fn callback(
    query: web::Query<OAuthCallbackQuery>,
    google_auth: web::Data<GoogleAuthService>,
    sessions: web::Data<SessionStore>,
) -> HttpResponse {
    let code = query.code().unwrap_or_default();

    match complete_login(&google_auth, &sessions, code).await {
        Ok(session_id) => HttpResponse::Found()
            .insert_header((actix_web::http::header::LOCATION, "/dashboard"))
            .cookie(sessions.session_cookie(&session_id))
            .finish(),
        Err(e) => {
            error!("Google 로그인 실패: {}", e);
            HttpResponse::InternalServerError().body("Authentication failed")
        }
    }
}

#[get("/dashboard")]
async fn dashboard(req: HttpRequest, sessions: web::Data<SessionStore>) -> HttpResponse {
    match sessions.session_for(&req) {
        Some((_, session)) => HttpResponse::Ok().json(json!({ "user": session.user })),
        None => redirect("/"),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));

    let google_auth = web::Data::new(GoogleAuthService::new(GoogleOAuthConfig::from_env()).map_err(|e| {
        error!("Google OAuth 설정 오류: {}", e);
        std::io::Error::other(e)
    })?);
    let sessions = web::Data::new(SessionStore::new(SessionConfig::from_env()));
    let bind_address = ServerConfig::from_env().bind_address();

    info!("Server running on http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(google_auth.clone())
            .app_data(sessions.clone())
            .service(handlers::pages::home)
            .service(dashboard)
            .service(
                web::scope("/auth")
                    .service(handlers::auth::google_login)
                    .service(callback),
            )
            .service(handlers::auth::logout)
    })
        .bind(bind_address.as_str())?
        .run()
        .await
}
