//! 예제 서버용 인메모리 세션 저장소
//!
//! 로그인에 성공한 사용자의 토큰과 프로필을 세션 ID(UUID v4) 아래에 보관합니다.
//! 세션 ID는 HttpOnly 쿠키로만 브라우저에 전달되며, 토큰 자체는 서버 밖으로 나가지 않습니다.
//!
//! 프로세스 재시작 시 모든 세션은 사라집니다.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::HttpRequest;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::domain::models::oauth::{TokenSet, UserProfile};

/// 세션 쿠키 이름
pub const SESSION_COOKIE_NAME: &str = "google_auth.sid";

/// 세션에 보관하는 로그인 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    pub tokens: TokenSet,
    pub user: UserProfile,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SessionData {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionData>>,
    config: SessionConfig,
}

impl SessionStore {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// 새 세션을 만들고 세션 ID를 반환합니다.
    pub fn create(&self, tokens: TokenSet, user: UserProfile) -> String {
        self.create_at(tokens, user, Utc::now())
    }

    fn create_at(&self, tokens: TokenSet, user: UserProfile, now: DateTime<Utc>) -> String {
        let session_id = Uuid::new_v4().to_string();
        let data = SessionData {
            tokens,
            user,
            created_at: now,
            expires_at: now + Duration::hours(self.config.ttl_hours),
        };

        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(session_id.clone(), data);

        log::debug!("세션 생성: {}", session_id);
        session_id
    }

    /// 유효한 세션을 조회합니다. 만료된 세션은 제거하고 `None`을 반환합니다.
    pub fn get(&self, session_id: &str) -> Option<SessionData> {
        self.get_at(session_id, Utc::now())
    }

    fn get_at(&self, session_id: &str, now: DateTime<Utc>) -> Option<SessionData> {
        let session = self
            .sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(session_id)
            .cloned()?;

        if session.is_expired_at(now) {
            self.destroy(session_id);
            return None;
        }

        Some(session)
    }

    /// 세션을 제거하고 제거된 데이터를 반환합니다.
    pub fn destroy(&self, session_id: &str) -> Option<SessionData> {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(session_id)
    }

    /// 만료된 세션을 모두 제거하고 제거한 개수를 반환합니다.
    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(Utc::now())
    }

    fn purge_expired_at(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired_at(now));
        before - sessions.len()
    }

    pub fn len(&self) -> usize {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 세션 ID를 담는 쿠키
    pub fn session_cookie(&self, session_id: &str) -> Cookie<'static> {
        Cookie::build(SESSION_COOKIE_NAME, session_id.to_string())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.config.secure_cookie)
            .max_age(CookieDuration::hours(self.config.ttl_hours))
            .finish()
    }

    /// 브라우저의 세션 쿠키를 지우는 쿠키
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(SESSION_COOKIE_NAME, "")
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.config.secure_cookie)
            .finish();
        cookie.make_removal();
        cookie
    }

    /// 요청 쿠키에서 세션 ID를 꺼냅니다.
    pub fn session_id(req: &HttpRequest) -> Option<String> {
        req.cookie(SESSION_COOKIE_NAME)
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty())
    }

    /// 요청에 연결된 유효한 세션을 조회합니다.
    pub fn session_for(&self, req: &HttpRequest) -> Option<(String, SessionData)> {
        let session_id = Self::session_id(req)?;
        let session = self.get(&session_id)?;
        Some((session_id, session))
    }
}
