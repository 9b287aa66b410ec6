use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;

use crate::middlewares::auth_gate::{AuthGate, GateOutcome, Rejection};

/// [`GoogleAuthMiddleware`](super::GoogleAuthMiddleware)가 감싸는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub gate: AuthGate,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let gate = self.gate.clone();

        Box::pin(async move {
            let authorization = req
                .headers()
                .get("Authorization")
                .and_then(|h| h.to_str().ok())
                .map(str::to_owned);

            match gate.check(authorization.as_deref()).await {
                GateOutcome::Allowed(payload) => {
                    log::debug!("인증 성공: sub {}", payload.sub);
                    req.extensions_mut().insert(payload);
                }
                GateOutcome::Rejected(rejection) => {
                    match &rejection {
                        Rejection::MissingToken => {
                            log::warn!("인증 실패: 토큰 없음 ({})", req.path())
                        }
                        Rejection::InvalidToken(reason) => {
                            log::warn!("인증 실패: {} ({})", reason, req.path())
                        }
                    }

                    let response = HttpResponse::Unauthorized().json(rejection.body());
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    return Ok(res);
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
