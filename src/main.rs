//! Google OAuth 예제 서버
//!
//! Actix-web 기반 HTTP 서버를 구동하고 Google 로그인 파사드, 세션 저장소,
//! 인증 미들웨어를 연결합니다.

use std::sync::Arc;
use std::time::Duration;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use env_logger::Env;
use log::{error, info};

use google_auth::caching::SessionStore;
use google_auth::config::{
    Environment, GoogleEndpoints, GoogleOAuthConfig, RateLimitConfig, ServerConfig, SessionConfig,
};
use google_auth::routes::configure_all_routes;
use google_auth::services::auth::GoogleAuthService;

/// 만료 세션 정리 주기
const SESSION_PURGE_INTERVAL: Duration = Duration::from_secs(600);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    // .env의 RUST_LOG가 로거에 반영되도록 파일은 먼저 읽고, 결과는 로거 초기화 후 기록
    let env_file = load_env_file();
    init_logging();
    env_file.log();

    info!("🚀 Google OAuth 예제 서버 시작중... ({:?})", Environment::current());

    let google_auth = Arc::new(
        GoogleAuthService::with_endpoints(GoogleOAuthConfig::from_env(), GoogleEndpoints::from_env())
            .map_err(|e| {
                error!("Google OAuth 설정 오류: {}", e);
                std::io::Error::other(e)
            })?,
    );

    let sessions = web::Data::new(SessionStore::new(SessionConfig::from_env()));
    spawn_session_purger(sessions.clone());

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(google_auth, sessions).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, Rate Limiting, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    google_auth: Arc<GoogleAuthService>,
    sessions: web::Data<SessionStore>,
) -> std::io::Result<()> {
    let server_config = ServerConfig::from_env();
    let bind_address = server_config.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Login: http://{}/auth/google", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let port = server_config.port;

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors(port);
        let routes_auth = google_auth.clone();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            .app_data(web::Data::from(google_auth.clone()))
            .app_data(sessions.clone())

            // 라우트 설정
            .configure(move |cfg| configure_all_routes(cfg, &routes_auth))
    })
        .bind(bind_address.as_str())?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

/// 환경 설정 파일 로드 결과
#[derive(Debug, PartialEq)]
struct EnvFileLoad {
    profile: String,
    loaded: Option<&'static str>,
    failures: Vec<(&'static str, String)>,
}

impl EnvFileLoad {
    /// 로드 결과를 기록합니다. 로거 초기화 이후에 호출해야 합니다.
    fn log(&self) {
        info!("Current profile: {}", self.profile);

        for (file, reason) in &self.failures {
            if self.profile == "prod" {
                error!("{} 파일 로드 실패: {}", file, reason);
            } else {
                info!("{} 파일 없음: {}", file, reason);
            }
        }

        match self.loaded {
            Some(file) => info!("{} 파일 로드 됨", file),
            None => info!("환경 설정 파일 없이 프로세스 환경 변수만 사용"),
        }
    }
}

/// 프로필별로 시도할 설정 파일 (앞에서부터 처음 성공한 파일만 로드)
fn env_files_for_profile(profile: &str) -> &'static [&'static str] {
    match profile {
        "prod" => &[".env.prod"],
        // 개발 환경에서 .env.dev가 없으면 .env로 대체
        "dev" => &[".env.dev", ".env"],
        _ => &[".env"],
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// 로거가 초기화되기 전에 호출되므로 직접 로그를 남기지 않고 결과를 반환합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드, 없으면 .env (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// # Examples
///
/// ```bash
/// PROFILE=prod cargo run --bin google_auth
/// ```
fn load_env_file() -> EnvFileLoad {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());
    let mut load = EnvFileLoad {
        loaded: None,
        failures: Vec::new(),
        profile,
    };

    for &file in env_files_for_profile(&load.profile) {
        match dotenv::from_filename(file) {
            Ok(_) => {
                load.loaded = Some(file);
                break;
            }
            Err(e) => load.failures.push((file, e.to_string())),
        }
    }

    load
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=google_auth=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 만료된 세션을 주기적으로 정리합니다
fn spawn_session_purger(sessions: web::Data<SessionStore>) {
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(SESSION_PURGE_INTERVAL);
        loop {
            interval.tick().await;
            let purged = sessions.purge_expired();
            if purged > 0 {
                info!("만료 세션 {}개 정리", purged);
            }
        }
    });
}

/// CORS 설정을 구성합니다
///
/// 서버 자신의 로컬호스트 Origin에서 쿠키를 포함한 요청을 허용합니다.
fn configure_cors(port: u16) -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin(&format!("http://localhost:{}", port))
        .allowed_origin(&format!("http://127.0.0.1:{}", port))

        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])

        // 자격 증명(쿠키 등) 지원
        .supports_credentials()

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
