//! Google ID 토큰 인증 미들웨어
//!
//! `Authorization: Bearer <id_token>` 헤더를 검증하고, 통과한 요청에는
//! 검증된 클레임([`IdTokenPayload`](crate::domain::models::oauth::IdTokenPayload))을
//! request extension에 넣어 핸들러로 넘깁니다.
//!
//! | 상황 | 응답 |
//! |------|------|
//! | 헤더 없음 / Bearer 형식 아님 | 401 `{"error": "No token provided"}` |
//! | 검증 실패 | 401 `{"error": "Invalid token"}` |
//! | 검증 성공 | 다음 핸들러 실행 |
//!
//! ```rust,ignore
//! App::new().service(
//!     web::scope("/api")
//!         .wrap(google_auth.middleware())
//!         .service(api_me)
//! )
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_gate::AuthGate;
use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::auth::GoogleAuthService;

/// 인증 미들웨어 팩토리
pub struct GoogleAuthMiddleware {
    gate: AuthGate,
}

impl GoogleAuthMiddleware {
    pub fn new(google_auth: Arc<GoogleAuthService>) -> Self {
        Self {
            gate: AuthGate::new(google_auth),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for GoogleAuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            gate: self.gate.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use actix_web::{test, web, App, HttpResponse};
    use serde_json::{json, Value};
    use wiremock::MockServer;

    use crate::domain::models::auth::VerifiedUser;
    use crate::services::auth::test_support::*;

    static HANDLER_CALLS: AtomicUsize = AtomicUsize::new(0);

    async fn protected(user: VerifiedUser) -> HttpResponse {
        HANDLER_CALLS.fetch_add(1, Ordering::SeqCst);
        HttpResponse::Ok().json(json!({ "user": user.payload() }))
    }

    async fn counted(counter: web::Data<AtomicUsize>) -> HttpResponse {
        counter.fetch_add(1, Ordering::SeqCst);
        HttpResponse::Ok().finish()
    }

    #[actix_web::test]
    async fn test_missing_header_is_rejected_before_handler() {
        let server = MockServer::start().await;
        let google_auth = std::sync::Arc::new(service_for(&server));
        let counter = web::Data::new(AtomicUsize::new(0));

        let app = test::init_service(
            App::new().app_data(counter.clone()).service(
                web::scope("/api")
                    .wrap(google_auth.middleware())
                    .route("/me", web::get().to(counted)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/me").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": "No token provided"}));
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_non_bearer_scheme_is_rejected() {
        let server = MockServer::start().await;
        let google_auth = std::sync::Arc::new(service_for(&server));
        let counter = web::Data::new(AtomicUsize::new(0));

        let app = test::init_service(
            App::new().app_data(counter.clone()).service(
                web::scope("/api")
                    .wrap(google_auth.middleware())
                    .route("/me", web::get().to(counted)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/me")
            .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": "No token provided"}));
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_tampered_token_is_rejected() {
        let server = MockServer::start().await;
        mount_jwks(&server).await;
        let google_auth = std::sync::Arc::new(service_for(&server));
        let counter = web::Data::new(AtomicUsize::new(0));
        let token = tamper_email(&mint_id_token(&standard_claims(TEST_CLIENT_ID)));

        let app = test::init_service(
            App::new().app_data(counter.clone()).service(
                web::scope("/api")
                    .wrap(google_auth.middleware())
                    .route("/me", web::get().to(counted)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": "Invalid token"}));
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_handler_with_payload() {
        let server = MockServer::start().await;
        mount_jwks(&server).await;
        let google_auth = std::sync::Arc::new(service_for(&server));
        let token = mint_id_token(&standard_claims(TEST_CLIENT_ID));

        let app = test::init_service(
            App::new().service(
                web::scope("/api")
                    .wrap(google_auth.middleware())
                    .route("/me", web::get().to(protected)),
            ),
        )
        .await;

        let before = HANDLER_CALLS.load(Ordering::SeqCst);
        let req = test::TestRequest::get()
            .uri("/api/me")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["user"]["sub"], "110169484474386276334");
        assert_eq!(body["user"]["email"], "jane@example.com");
        assert_eq!(HANDLER_CALLS.load(Ordering::SeqCst), before + 1);
    }
}
