//! Authentication HTTP Handlers
//!
//! Google 로그인 플로우의 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 로그인 결과는 서버 측 세션에 보관되고, 브라우저에는 세션 ID 쿠키만 전달됩니다.
//!
//! # Endpoints
//!
//! - `GET /auth/google` - Google 동의 화면으로 리다이렉트
//! - `GET /auth/google/callback` - 코드 교환, 프로필 조회, 세션 생성
//! - `GET /logout` - 토큰 폐기 후 세션 삭제
//! - `POST /api/auth/refresh` - 리프레시 토큰으로 액세스 토큰 갱신
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::caching::SessionStore;
use crate::domain::{OAuthCallbackQuery, RefreshTokenRequest};
use crate::errors::{AppError, AuthResult};
use crate::handlers::redirect;
use crate::services::auth::GoogleAuthService;

#[get("/google")]
pub async fn google_login(google_auth: web::Data<GoogleAuthService>) -> HttpResponse {
    redirect(&google_auth.auth_url())
}

/// Google OAuth 콜백
///
/// | 상황 | 결과 |
/// |------|------|
/// | Google이 `error` 전달 (사용자 거부 등) | `/?error=auth_failed` |
/// | `code` 없음 | `/?error=no_code` |
/// | 교환/조회 실패 | `/?error=auth_failed` |
/// | 성공 | 세션 쿠키 설정 후 `/dashboard` |
#[get("/google/callback")]
pub async fn google_callback(
    query: web::Query<OAuthCallbackQuery>,
    google_auth: web::Data<GoogleAuthService>,
    sessions: web::Data<SessionStore>,
) -> HttpResponse {
    if let Some(error) = &query.error {
        let description = query
            .error_description
            .as_deref()
            .unwrap_or("OAuth 인증이 취소되었거나 실패했습니다");
        log::warn!("Google OAuth 에러: {} - {}", error, description);
        return redirect("/?error=auth_failed");
    }

    let Some(code) = query.code() else {
        log::warn!("OAuth 콜백에 authorization code 없음");
        return redirect("/?error=no_code");
    };

    match complete_login(&google_auth, &sessions, code).await {
        Ok(session_id) => HttpResponse::Found()
            .insert_header((actix_web::http::header::LOCATION, "/dashboard"))
            .cookie(sessions.session_cookie(&session_id))
            .finish(),
        Err(e) => {
            log::error!("Google 로그인 실패: {}", e);
            redirect("/?error=auth_failed")
        }
    }
}

/// 코드를 교환하고 프로필을 조회해 세션을 만듭니다.
///
/// 두 예제 서버가 공유하는 로그인 완료 단계이며, 생성된 세션 ID를 반환합니다.
pub async fn complete_login(
    google_auth: &GoogleAuthService,
    sessions: &SessionStore,
    code: &str,
) -> AuthResult<String> {
    let tokens = google_auth.exchange_code(code).await?;
    let profile = google_auth.user_profile(&tokens.access_token).await?;

    log::info!("Google 로그인 성공: {}", profile.email);
    Ok(sessions.create(tokens, profile))
}

/// 로그아웃
///
/// 토큰 폐기 실패는 로그만 남기고 로그아웃을 계속 진행합니다.
#[get("/logout")]
pub async fn logout(
    req: HttpRequest,
    google_auth: web::Data<GoogleAuthService>,
    sessions: web::Data<SessionStore>,
) -> HttpResponse {
    end_session(&req, &google_auth, &sessions).await;

    HttpResponse::Found()
        .insert_header((actix_web::http::header::LOCATION, "/"))
        .cookie(sessions.removal_cookie())
        .finish()
}

/// 세션의 액세스 토큰을 폐기하고 세션을 제거합니다.
pub async fn end_session(req: &HttpRequest, google_auth: &GoogleAuthService, sessions: &SessionStore) {
    let Some(session_id) = SessionStore::session_id(req) else {
        return;
    };

    if let Some(session) = sessions.destroy(&session_id) {
        if let Err(e) = google_auth.revoke_token(&session.tokens.access_token).await {
            log::error!("토큰 폐기 실패 ({}): {}", session.user.email, e);
        }
        log::info!("로그아웃: {}", session.user.email);
    }
}

#[post("/refresh")]
pub async fn refresh_token(
    payload: web::Json<RefreshTokenRequest>,
    google_auth: web::Data<GoogleAuthService>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let tokens = google_auth.refresh_access_token(&payload.refresh_token).await?;

    Ok(HttpResponse::Ok().json(tokens))
}
