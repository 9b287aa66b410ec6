//! 예제 서버 페이지 핸들러
//!
//! 템플릿 엔진 없이 최소한의 HTML을 직접 생성합니다.
//! 프로필 값은 모두 [`escape_html`]을 거쳐 출력됩니다.
use actix_web::http::header::ContentType;
use actix_web::{get, web, HttpRequest, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::caching::SessionStore;
use crate::domain::models::auth::VerifiedUser;
use crate::domain::models::oauth::UserProfile;
use crate::handlers::redirect;
use crate::utils::string_utils::escape_html;

#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    pub error: Option<String>,
}

#[get("/")]
pub async fn home(
    req: HttpRequest,
    query: web::Query<HomeQuery>,
    sessions: web::Data<SessionStore>,
) -> HttpResponse {
    let body = match sessions.session_for(&req) {
        Some((_, session)) => format!(
            "<h1>Welcome, {}</h1>{}<p>{}</p>\
             <p><a href=\"/dashboard\">Dashboard</a> | <a href=\"/logout\">Logout</a></p>",
            escape_html(&session.user.name),
            picture_tag(&session.user),
            escape_html(&session.user.email),
        ),
        None => {
            let notice = query
                .error
                .as_deref()
                .map(|error| format!("<p class=\"error\">Login failed: {}</p>", escape_html(error)))
                .unwrap_or_default();
            format!(
                "<h1>Google OAuth Example</h1>{}<p><a href=\"/auth/google\">Login with Google</a></p>",
                notice
            )
        }
    };

    html_page("Home", &body)
}

#[get("/dashboard")]
pub async fn dashboard(req: HttpRequest, sessions: web::Data<SessionStore>) -> HttpResponse {
    let Some((_, session)) = sessions.session_for(&req) else {
        return redirect("/");
    };

    let user = &session.user;
    let verified = match user.verified_email {
        Some(true) => "yes",
        Some(false) => "no",
        None => "unknown",
    };

    let body = format!(
        "<h1>Dashboard</h1>{}\
         <dl><dt>Name</dt><dd>{}</dd><dt>Email</dt><dd>{}</dd>\
         <dt>Verified</dt><dd>{}</dd><dt>Google ID</dt><dd>{}</dd></dl>\
         <p><a href=\"/\">Home</a> | <a href=\"/logout\">Logout</a></p>",
        picture_tag(user),
        escape_html(&user.name),
        escape_html(&user.email),
        verified,
        escape_html(&user.id),
    );

    html_page("Dashboard", &body)
}

/// 미들웨어가 검증한 ID 토큰 클레임을 그대로 돌려줍니다.
#[get("/me")]
pub async fn api_me(user: VerifiedUser) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "user": user.payload() }))
}

fn picture_tag(user: &UserProfile) -> String {
    user.picture
        .as_deref()
        .map(|url| {
            format!(
                "<img src=\"{}\" alt=\"{}\" width=\"96\" height=\"96\">",
                escape_html(url),
                escape_html(&user.name)
            )
        })
        .unwrap_or_default()
}

fn html_page(title: &str, body: &str) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{}</title></head><body>{}</body></html>",
        title, body
    ))
}
