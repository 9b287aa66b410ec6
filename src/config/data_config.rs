//! 서버 및 세션 설정 관리 모듈
//!
//! 예제 서버의 바인딩 주소, 실행 환경, 세션 쿠키, Rate Limiting 설정을 관리합니다.

use crate::config::env_lookup;

/// 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` (없으면 `NODE_ENV`) 환경 변수로 현재 환경을 판별합니다.
    ///
    /// 둘 다 없으면 개발 환경으로 간주합니다.
    pub fn current() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup("ENVIRONMENT")
            .or_else(|| lookup("NODE_ENV"))
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Development)
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        *self == Environment::Production
    }
}

/// HTTP 서버 바인딩 설정
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup("PORT")
            .and_then(|raw| match raw.parse::<u16>() {
                Ok(port) => Some(port),
                Err(e) => {
                    log::error!("PORT 파싱 실패: {}. 기본값 3000 사용", e);
                    None
                }
            })
            .unwrap_or(3000);

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 세션 쿠키 설정
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// 세션 유지 시간 (시간 단위, 기본 24시간)
    pub ttl_hours: i64,
    /// HTTPS 전용 쿠키 여부 (운영 환경에서만 활성화)
    pub secure_cookie: bool,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let ttl_hours = lookup("SESSION_TTL_HOURS")
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|hours| *hours > 0)
            .unwrap_or(24);

        Self {
            ttl_hours,
            secure_cookie: Environment::from_lookup(&lookup).is_production(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_hours: 24,
            secure_cookie: false,
        }
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let per_second = lookup("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = lookup("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        Self {
            per_second,
            burst_size,
        }
    }
}
