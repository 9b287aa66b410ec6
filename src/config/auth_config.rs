//! # Authentication Configuration Module
//!
//! Google OAuth 2.0 클라이언트 정보와 Google 엔드포인트 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export GOOGLE_REDIRECT_URI="http://localhost:3000/auth/google/callback"
//! ```
//!
//! ## 선택 환경 변수
//!
//! ```bash
//! # 공백 또는 콤마로 구분된 스코프 목록 (기본값: userinfo.email, userinfo.profile)
//! export GOOGLE_SCOPES="openid email profile"
//!
//! # 엔드포인트 재정의 (테스트/프록시 환경)
//! export GOOGLE_AUTH_URI="https://accounts.google.com/o/oauth2/v2/auth"
//! export GOOGLE_TOKEN_URI="https://oauth2.googleapis.com/token"
//! export GOOGLE_USERINFO_URI="https://www.googleapis.com/oauth2/v1/userinfo"
//! export GOOGLE_REVOKE_URI="https://oauth2.googleapis.com/revoke"
//! export GOOGLE_CERTS_URI="https://www.googleapis.com/oauth2/v3/certs"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{GoogleOAuthConfig, GoogleEndpoints};
//!
//! let config = GoogleOAuthConfig::new(client_id, client_secret, redirect_uri)
//!     .with_scopes(["openid", "email"]);
//! let endpoints = GoogleEndpoints::from_env();
//! ```

use std::fmt;

use crate::config::env_lookup;
use crate::errors::AuthError;
use crate::utils::string_utils::parse_scope_list;

/// 스코프가 지정되지 않았을 때 요청하는 기본 스코프
pub const DEFAULT_SCOPES: [&str; 2] = [
    "https://www.googleapis.com/auth/userinfo.email",
    "https://www.googleapis.com/auth/userinfo.profile",
];

/// Google OAuth 2.0 클라이언트 설정
///
/// Google Cloud Console 에서 생성한 OAuth 2.0 클라이언트 정보를 담습니다.
/// 값의 유효성은 [`GoogleAuthService::new`](crate::services::auth::GoogleAuthService::new)
/// 시점에 [`validate`](Self::validate)로 검증되며, 이후에는 변경되지 않습니다.
///
/// ## 보안 고려사항
///
/// - `client_secret`은 절대 클라이언트 사이드에 노출되어서는 안 됩니다
/// - `Debug` 출력에서 `client_secret`은 마스킹됩니다
#[derive(Clone, PartialEq)]
pub struct GoogleOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    /// 비어 있으면 [`DEFAULT_SCOPES`]를 사용합니다
    pub scopes: Vec<String>,
}

impl GoogleOAuthConfig {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            scopes: Vec::new(),
        }
    }

    /// 요청할 스코프를 지정합니다.
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    /// 프로세스 환경 변수에서 설정을 읽습니다.
    ///
    /// 누락된 필수값은 빈 문자열로 남고, 서비스 생성 시 `Configuration` 에러가 됩니다.
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    /// 임의의 키 조회 함수로 설정을 읽습니다.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let scopes = lookup("GOOGLE_SCOPES")
            .map(|raw| parse_scope_list(&raw))
            .unwrap_or_default();

        Self {
            client_id: lookup("GOOGLE_CLIENT_ID").unwrap_or_default(),
            client_secret: lookup("GOOGLE_CLIENT_SECRET").unwrap_or_default(),
            redirect_uri: lookup("GOOGLE_REDIRECT_URI").unwrap_or_default(),
            scopes,
        }
    }

    /// 필수 필드가 모두 채워져 있는지 검증합니다.
    ///
    /// 공백만 있는 값도 누락으로 간주합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::Configuration` - 누락된 필드 이름 목록을 포함
    pub fn validate(&self) -> Result<(), AuthError> {
        let missing: Vec<&str> = [
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
            ("redirect_uri", &self.redirect_uri),
        ]
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AuthError::Configuration(format!(
                "client_id, client_secret, and redirect_uri are required (missing: {})",
                missing.join(", ")
            )))
        }
    }

    /// 실제로 요청할 스코프 목록 (비어 있으면 기본 스코프)
    pub fn effective_scopes(&self) -> Vec<String> {
        if self.scopes.is_empty() {
            DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect()
        } else {
            self.scopes.clone()
        }
    }
}

impl fmt::Debug for GoogleOAuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleOAuthConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("redirect_uri", &self.redirect_uri)
            .field("scopes", &self.scopes)
            .finish()
    }
}

/// Google OAuth 2.0 / OpenID Connect 엔드포인트 모음
///
/// 기본값은 Google 운영 엔드포인트이며, 환경 변수나 [`with_base_url`](Self::with_base_url)로
/// 재정의할 수 있습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct GoogleEndpoints {
    /// 사용자 동의 화면 (authorization endpoint)
    pub auth_uri: String,
    /// 코드 교환 / 토큰 갱신 (token endpoint)
    pub token_uri: String,
    /// 사용자 정보 (OAuth2 v1 userinfo)
    pub userinfo_uri: String,
    /// 토큰 폐기 (revocation endpoint)
    pub revoke_uri: String,
    /// ID 토큰 서명 공개키 (JWKS)
    pub certs_uri: String,
    /// 허용하는 ID 토큰 발급자(`iss`)
    pub issuers: Vec<String>,
}

impl Default for GoogleEndpoints {
    fn default() -> Self {
        Self {
            auth_uri: "https://accounts.google.com/o/oauth2/v2/auth".to_string(),
            token_uri: "https://oauth2.googleapis.com/token".to_string(),
            userinfo_uri: "https://www.googleapis.com/oauth2/v1/userinfo".to_string(),
            revoke_uri: "https://oauth2.googleapis.com/revoke".to_string(),
            certs_uri: "https://www.googleapis.com/oauth2/v3/certs".to_string(),
            issuers: vec![
                "accounts.google.com".to_string(),
                "https://accounts.google.com".to_string(),
            ],
        }
    }
}

impl GoogleEndpoints {
    /// 환경 변수 재정의를 반영한 엔드포인트
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            auth_uri: lookup("GOOGLE_AUTH_URI").unwrap_or(defaults.auth_uri),
            token_uri: lookup("GOOGLE_TOKEN_URI").unwrap_or(defaults.token_uri),
            userinfo_uri: lookup("GOOGLE_USERINFO_URI").unwrap_or(defaults.userinfo_uri),
            revoke_uri: lookup("GOOGLE_REVOKE_URI").unwrap_or(defaults.revoke_uri),
            certs_uri: lookup("GOOGLE_CERTS_URI").unwrap_or(defaults.certs_uri),
            issuers: defaults.issuers,
        }
    }

    /// 모든 엔드포인트를 하나의 베이스 URL 아래로 배치합니다.
    ///
    /// 경로는 Google 엔드포인트의 경로를 그대로 따르며, 발급자 목록은 유지됩니다.
    ///
    /// ```rust,ignore
    /// let endpoints = GoogleEndpoints::with_base_url(&mock_server.uri());
    /// assert!(endpoints.token_uri.ends_with("/token"));
    /// ```
    pub fn with_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');

        Self {
            auth_uri: format!("{}/o/oauth2/v2/auth", base),
            token_uri: format!("{}/token", base),
            userinfo_uri: format!("{}/oauth2/v1/userinfo", base),
            revoke_uri: format!("{}/revoke", base),
            certs_uri: format!("{}/oauth2/v3/certs", base),
            ..Self::default()
        }
    }
}
