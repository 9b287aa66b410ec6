//! # Google OAuth 2.0 인증 서비스
//!
//! Google OAuth 2.0 Authorization Code 플로우의 각 단계를 하나의 파사드로 제공합니다.
//!
//! ## OAuth 2.0 Authorization Code Flow
//!
//! ```text
//! ┌─────────────┐            ┌─────────────────┐            ┌─────────────────┐
//! │  브라우저     │            │   우리 서버       │            │  Google OAuth   │
//! └─────────────┘            └─────────────────┘            └─────────────────┘
//!        │ 1. GET /auth/google        │                              │
//!        ├───────────────────────────►│ auth_url()                   │
//!        │ 2. 302 → Google 동의 화면    │                              │
//!        │◄───────────────────────────┤                              │
//!        │ 3. 로그인 및 동의                                           │
//!        ├──────────────────────────────────────────────────────────►│
//!        │ 4. 302 → /auth/google/callback?code=xxx                   │
//!        │◄──────────────────────────────────────────────────────────┤
//!        ├───────────────────────────►│ exchange_code()              │
//!        │                            ├─────────────────────────────►│
//!        │                            │ user_profile()               │
//!        │                            ├─────────────────────────────►│
//!        │ 5. 세션 생성 후 /dashboard     │                              │
//!        │◄───────────────────────────┤                              │
//! ```
//!
//! ## 자격 증명 처리
//!
//! 서비스는 어떤 토큰도 내부에 보관하지 않습니다. 모든 연산은 필요한 토큰을
//! 인자로 받고, 결과 토큰은 호출자에게 그대로 돌려줍니다. 따라서 하나의 인스턴스를
//! `Arc`로 공유해 여러 사용자의 요청을 동시에 처리해도 서로의 자격 증명이 섞이지 않습니다.
//!
//! ## 사용하는 Google API 엔드포인트
//!
//! | 용도 | 엔드포인트 | 메서드 |
//! |------|------------|--------|
//! | **Authorization** | `https://accounts.google.com/o/oauth2/v2/auth` | GET |
//! | **Token Exchange / Refresh** | `https://oauth2.googleapis.com/token` | POST |
//! | **User Info** | `https://www.googleapis.com/oauth2/v1/userinfo` | GET |
//! | **Revoke** | `https://oauth2.googleapis.com/revoke` | POST |
//! | **JWKS** | `https://www.googleapis.com/oauth2/v3/certs` | GET |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let service = Arc::new(GoogleAuthService::new(GoogleOAuthConfig::from_env())?);
//!
//! let url = service.auth_url();
//! let tokens = service.exchange_code(&code).await?;
//! let profile = service.user_profile(&tokens.access_token).await?;
//! ```

use std::sync::Arc;

use chrono::Utc;

use crate::config::{GoogleEndpoints, GoogleOAuthConfig};
use crate::domain::models::oauth::{GoogleTokenResponse, IdTokenPayload, TokenSet, UserProfile};
use crate::errors::{AuthError, AuthResult};
use crate::middlewares::GoogleAuthMiddleware;
use crate::services::auth::IdTokenVerifier;

/// Google OAuth 2.0 인증 파사드
///
/// 생성 시점에 설정을 검증하며, 이후 설정은 변경되지 않습니다.
pub struct GoogleAuthService {
    config: GoogleOAuthConfig,
    endpoints: GoogleEndpoints,
    http_client: reqwest::Client,
    verifier: IdTokenVerifier,
}

impl GoogleAuthService {
    /// Google 운영 엔드포인트를 사용하는 서비스를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::Configuration` - `client_id`, `client_secret`, `redirect_uri` 중 누락된 값이 있는 경우
    pub fn new(config: GoogleOAuthConfig) -> AuthResult<Self> {
        Self::with_endpoints(config, GoogleEndpoints::default())
    }

    /// 엔드포인트를 지정해 서비스를 생성합니다.
    pub fn with_endpoints(config: GoogleOAuthConfig, endpoints: GoogleEndpoints) -> AuthResult<Self> {
        Self::with_http_client(config, endpoints, reqwest::Client::new())
    }

    /// HTTP 클라이언트까지 지정해 서비스를 생성합니다.
    pub fn with_http_client(
        mut config: GoogleOAuthConfig,
        endpoints: GoogleEndpoints,
        http_client: reqwest::Client,
    ) -> AuthResult<Self> {
        config.validate()?;
        config.scopes = config.effective_scopes();

        let verifier = IdTokenVerifier::new(
            http_client.clone(),
            endpoints.certs_uri.clone(),
            endpoints.issuers.clone(),
            config.client_id.clone(),
        );

        log::info!(
            "Google OAuth 서비스 초기화 (client_id: {}, scopes: {})",
            config.client_id,
            config.scopes.join(" ")
        );

        Ok(Self {
            config,
            endpoints,
            http_client,
            verifier,
        })
    }

    pub fn config(&self) -> &GoogleOAuthConfig {
        &self.config
    }

    pub fn endpoints(&self) -> &GoogleEndpoints {
        &self.endpoints
    }

    /// 사용자를 보낼 Google 동의 화면 URL을 생성합니다.
    ///
    /// 리프레시 토큰을 항상 받을 수 있도록 `access_type=offline`과 `prompt=consent`를 요청합니다.
    /// 네트워크 호출 없이 설정만으로 결정되므로 같은 설정이면 항상 같은 URL을 돌려줍니다.
    pub fn auth_url(&self) -> String {
        let scope = self.config.scopes.join(" ");

        let params = [
            ("access_type", "offline"),
            ("scope", scope.as_str()),
            ("prompt", "consent"),
            ("response_type", "code"),
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.endpoints.auth_uri, query_string)
    }

    /// Authorization code를 토큰 집합으로 교환합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::TokenExchange` - 코드가 비어 있거나, 만료/재사용되었거나, 통신에 실패한 경우
    pub async fn exchange_code(&self, code: &str) -> AuthResult<TokenSet> {
        let code = code.trim();
        if code.is_empty() {
            return Err(AuthError::TokenExchange("authorization code is empty".to_string()));
        }

        let params = [
            ("code", code),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let token_response = self
            .request_tokens(&params)
            .await
            .map_err(AuthError::TokenExchange)?;

        log::debug!(
            "Authorization code 교환 성공 (refresh_token: {}, id_token: {})",
            token_response.refresh_token.is_some(),
            token_response.id_token.is_some()
        );

        Ok(TokenSet::from_response(token_response, Utc::now()))
    }

    /// 액세스 토큰으로 Google 사용자 정보를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::ProfileFetch` - 토큰이 유효하지 않거나, 통신/파싱에 실패한 경우
    pub async fn user_profile(&self, access_token: &str) -> AuthResult<UserProfile> {
        let response = self
            .http_client
            .get(&self.endpoints.userinfo_uri)
            .query(&[("alt", "json")])
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthError::ProfileFetch(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AuthError::ProfileFetch(describe_failure(status, &error_text)));
        }

        let profile = response
            .json::<UserProfile>()
            .await
            .map_err(|e| AuthError::ProfileFetch(format!("invalid response: {}", e)))?;

        log::debug!("Google 사용자 정보 조회 성공: {}", profile.email);
        Ok(profile)
    }

    /// ID 토큰의 서명과 클레임을 검증합니다.
    ///
    /// `aud`는 이 서비스의 `client_id`와 일치해야 합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::TokenVerification` - 위조, 만료, 대상 불일치, 형식 오류 등
    pub async fn verify_id_token(&self, id_token: &str) -> AuthResult<IdTokenPayload> {
        self.verifier.verify(id_token).await
    }

    /// 리프레시 토큰으로 새 액세스 토큰을 발급받습니다.
    ///
    /// Google은 갱신 응답에 리프레시 토큰을 보통 포함하지 않으므로,
    /// 이 경우 인자로 받은 리프레시 토큰을 결과에 그대로 담아 돌려줍니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::TokenRefresh` - 리프레시 토큰이 폐기/만료되었거나 통신에 실패한 경우
    pub async fn refresh_access_token(&self, refresh_token: &str) -> AuthResult<TokenSet> {
        if refresh_token.trim().is_empty() {
            return Err(AuthError::TokenRefresh("refresh token is empty".to_string()));
        }

        let params = [
            ("refresh_token", refresh_token),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("grant_type", "refresh_token"),
        ];

        let token_response = self
            .request_tokens(&params)
            .await
            .map_err(AuthError::TokenRefresh)?;

        let mut tokens = TokenSet::from_response(token_response, Utc::now());
        if tokens.refresh_token.is_none() {
            tokens.refresh_token = Some(refresh_token.to_string());
        }

        log::debug!("액세스 토큰 갱신 성공");
        Ok(tokens)
    }

    /// 액세스 토큰 또는 리프레시 토큰을 폐기합니다.
    ///
    /// Google이 2xx로 응답하면 `Ok(true)`를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::TokenRevocation` - Google이 거부했거나 통신에 실패한 경우
    pub async fn revoke_token(&self, token: &str) -> AuthResult<bool> {
        let response = self
            .http_client
            .post(&self.endpoints.revoke_uri)
            .form(&[("token", token)])
            .send()
            .await
            .map_err(|e| AuthError::TokenRevocation(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AuthError::TokenRevocation(describe_failure(status, &error_text)));
        }

        log::info!("Google 토큰 폐기 완료");
        Ok(true)
    }

    /// 이 서비스로 Bearer ID 토큰을 검증하는 actix-web 미들웨어를 만듭니다.
    ///
    /// ```rust,ignore
    /// web::scope("/api").wrap(service.middleware())
    /// ```
    pub fn middleware(self: &Arc<Self>) -> GoogleAuthMiddleware {
        GoogleAuthMiddleware::new(Arc::clone(self))
    }

    /// 토큰 엔드포인트에 form 요청을 보내고 응답을 파싱합니다.
    ///
    /// 실패 사유는 호출 연산에 맞는 에러 변형으로 감싸도록 문자열로 돌려줍니다.
    async fn request_tokens(&self, params: &[(&str, &str)]) -> Result<GoogleTokenResponse, String> {
        let response = self
            .http_client
            .post(&self.endpoints.token_uri)
            .form(params)
            .send()
            .await
            .map_err(|e| format!("request failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(describe_failure(status, &error_text));
        }

        response
            .json::<GoogleTokenResponse>()
            .await
            .map_err(|e| format!("invalid response: {}", e))
    }
}

/// Google 에러 응답을 한 줄 사유로 요약합니다.
///
/// `{"error": "...", "error_description": "..."}` 형식이면 그 값을, 아니면 원문을 사용합니다.
fn describe_failure(status: reqwest::StatusCode, body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();

    let detail = parsed.as_ref().and_then(|value| {
        let error = value.get("error")?;
        let code = error
            .as_str()
            .or_else(|| error.get("message").and_then(|m| m.as_str()))?;
        let description = value.get("error_description").and_then(|d| d.as_str());
        Some(match description {
            Some(description) => format!("{} ({})", code, description),
            None => code.to_string(),
        })
    });

    match detail {
        Some(detail) => format!("{} {}", status.as_u16(), detail),
        None if body.trim().is_empty() => format!("{}", status.as_u16()),
        None => format!("{} {}", status.as_u16(), body.trim()),
    }
}
