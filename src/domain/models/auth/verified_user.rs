use std::future::{ready, Ready};
use std::ops::Deref;

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};

use crate::domain::models::oauth::IdTokenPayload;

/// 인증 미들웨어가 검증한 ID 토큰 클레임
///
/// `GoogleAuthMiddleware`가 적용된 라우트의 핸들러에서 추출자로 사용합니다.
///
/// ```rust,ignore
/// #[get("/me")]
/// async fn me(user: VerifiedUser) -> HttpResponse {
///     HttpResponse::Ok().json(json!({ "user": user.payload() }))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct VerifiedUser(pub IdTokenPayload);

impl VerifiedUser {
    pub fn payload(&self) -> &IdTokenPayload {
        &self.0
    }

    pub fn into_inner(self) -> IdTokenPayload {
        self.0
    }
}

impl Deref for VerifiedUser {
    type Target = IdTokenPayload;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for VerifiedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<IdTokenPayload>() {
            Some(payload) => ready(Ok(VerifiedUser(payload.clone()))),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}
