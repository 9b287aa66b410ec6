//! Google ID 토큰 검증
//!
//! Google 서명 공개키(JWKS)를 TTL 캐시에 보관하고, RS256 서명과
//! 발급자(`iss`)/대상(`aud`)/만료(`exp`) 클레임을 검증합니다.
//!
//! 토큰 헤더의 `kid`가 캐시된 키 목록에 없으면 Google 키 교체로 보고
//! 키 목록을 한 번만 새로 받아 다시 찾습니다. `kid`는 서명되지 않은 헤더 값이므로
//! 이런 강제 재조회는 [`FORCED_REFRESH_MIN_INTERVAL_SECONDS`] 간격으로 제한되고,
//! 그 사이의 알 수 없는 `kid`는 캐시만으로 거부됩니다.

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use tokio::sync::{Mutex, RwLock};

use crate::domain::models::oauth::{IdTokenPayload, Jwk, JwkSet};
use crate::errors::{AuthError, AuthResult};

/// 키 목록 캐시 유지 시간 (초)
const JWKS_TTL_SECONDS: i64 = 3600;

/// `exp`/`iat` 비교 시 허용하는 시계 오차 (초)
const CLOCK_SKEW_LEEWAY_SECONDS: u64 = 60;

/// 알 수 없는 `kid`로 인한 강제 재조회 사이의 최소 간격 (초)
pub const FORCED_REFRESH_MIN_INTERVAL_SECONDS: i64 = 60;

struct CachedKeySet {
    jwks: JwkSet,
    fetched_at: i64,
}

impl CachedKeySet {
    fn is_fresh(&self, now: i64) -> bool {
        now - self.fetched_at < JWKS_TTL_SECONDS
    }
}

/// ID 토큰 검증기
///
/// 캐시에는 공개키만 보관되므로 여러 요청이 동시에 공유해도 안전합니다.
pub struct IdTokenVerifier {
    http_client: reqwest::Client,
    certs_uri: String,
    issuers: Vec<String>,
    audience: String,
    cache: RwLock<Option<CachedKeySet>>,
    last_forced_refresh: Mutex<Option<i64>>,
}

impl IdTokenVerifier {
    pub fn new(
        http_client: reqwest::Client,
        certs_uri: impl Into<String>,
        issuers: Vec<String>,
        audience: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            certs_uri: certs_uri.into(),
            issuers,
            audience: audience.into(),
            cache: RwLock::new(None),
            last_forced_refresh: Mutex::new(None),
        }
    }

    /// ID 토큰을 검증하고 클레임을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AuthError::TokenVerification` - 형식, 알고리즘, 키, 서명, 발급자, 대상, 만료 중
    ///   하나라도 실패한 경우
    pub async fn verify(&self, id_token: &str) -> AuthResult<IdTokenPayload> {
        let header = decode_header(id_token)
            .map_err(|e| AuthError::TokenVerification(format!("malformed token: {}", e)))?;

        if header.alg != Algorithm::RS256 {
            return Err(AuthError::TokenVerification(format!(
                "unsupported algorithm: expected RS256, got {:?}",
                header.alg
            )));
        }

        let kid = header
            .kid
            .ok_or_else(|| AuthError::TokenVerification("token header has no kid".to_string()))?;

        let jwk = match self.find_key(&kid, false).await? {
            Some(jwk) => jwk,
            None => self.find_key_after_refresh(&kid).await?.ok_or_else(|| {
                AuthError::TokenVerification(format!("no signing key matches kid {}", kid))
            })?,
        };

        let decoding_key = DecodingKey::from_rsa_components(&jwk.n, &jwk.e)
            .map_err(|e| AuthError::TokenVerification(format!("invalid signing key: {}", e)))?;

        decode::<IdTokenPayload>(id_token, &decoding_key, &self.validation())
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                let reason = match e.kind() {
                    ErrorKind::ExpiredSignature => "token expired".to_string(),
                    ErrorKind::InvalidAudience => "audience mismatch".to_string(),
                    ErrorKind::InvalidIssuer => "issuer mismatch".to_string(),
                    ErrorKind::InvalidSignature => "invalid signature".to_string(),
                    ErrorKind::MissingRequiredClaim(claim) => format!("missing claim: {}", claim),
                    _ => format!("token rejected: {}", e),
                };
                AuthError::TokenVerification(reason)
            })
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(self.issuers.as_slice());
        validation.set_audience(&[&self.audience]);
        validation.set_required_spec_claims(&["exp", "iss", "aud", "sub"]);
        validation.validate_exp = true;
        validation.validate_nbf = false;
        validation.leeway = CLOCK_SKEW_LEEWAY_SECONDS;
        validation
    }

    async fn find_key(&self, kid: &str, force_refresh: bool) -> AuthResult<Option<Jwk>> {
        let jwks = self.key_set(force_refresh).await?;
        Ok(jwks.find_key(kid).cloned())
    }

    /// 캐시에 없는 `kid`를 키 목록을 새로 받아 다시 찾습니다.
    ///
    /// 마지막 강제 재조회 후 최소 간격이 지나지 않았으면 새로 받지 않고 캐시에서만 찾습니다.
    /// 잠금을 재조회가 끝날 때까지 쥐고 있으므로 동시에 들어온 요청도 한 번만 재조회합니다.
    async fn find_key_after_refresh(&self, kid: &str) -> AuthResult<Option<Jwk>> {
        let mut last_forced_refresh = self.last_forced_refresh.lock().await;
        let now = Utc::now().timestamp();

        if last_forced_refresh.is_some_and(|at| now - at < FORCED_REFRESH_MIN_INTERVAL_SECONDS) {
            log::debug!("JWKS에 kid {} 없음, 최근 재조회 직후라 캐시로만 판정", kid);
            return self.find_key(kid, false).await;
        }

        log::debug!("JWKS에 kid {} 없음, 키 목록 재조회", kid);
        *last_forced_refresh = Some(now);
        self.find_key(kid, true).await
    }

    /// 캐시된 키 목록을 반환하고, 만료되었거나 `force_refresh`면 새로 받습니다.
    async fn key_set(&self, force_refresh: bool) -> AuthResult<JwkSet> {
        let now = Utc::now().timestamp();

        if !force_refresh {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref().filter(|cached| cached.is_fresh(now)) {
                return Ok(cached.jwks.clone());
            }
        }

        let jwks = self.fetch_key_set().await?;

        let mut cache = self.cache.write().await;
        *cache = Some(CachedKeySet {
            jwks: jwks.clone(),
            fetched_at: now,
        });

        Ok(jwks)
    }

    async fn fetch_key_set(&self) -> AuthResult<JwkSet> {
        let response = self
            .http_client
            .get(&self.certs_uri)
            .send()
            .await
            .map_err(|e| AuthError::TokenVerification(format!("failed to fetch signing keys: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AuthError::TokenVerification(format!(
                "signing key endpoint returned {}",
                status
            )));
        }

        response
            .json::<JwkSet>()
            .await
            .map_err(|e| AuthError::TokenVerification(format!("failed to parse signing keys: {}", e)))
    }
}
