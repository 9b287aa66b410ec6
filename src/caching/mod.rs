//! 캐싱 계층 모듈
//!
//! 예제 서버의 로그인 세션을 프로세스 메모리에 보관합니다.
//!
//! # 주요 기능
//!
//! - UUID v4 세션 ID 발급
//! - TTL 기반 만료 및 일괄 정리
//! - HttpOnly / SameSite=Lax 세션 쿠키 생성
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::session_store::SessionStore;
//!
//! let sessions = SessionStore::new(SessionConfig::from_env());
//! let session_id = sessions.create(tokens, profile);
//! HttpResponse::Found().cookie(sessions.session_cookie(&session_id));
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! SESSION_TTL_HOURS=24  # 기본값
//! ```

pub mod session_store;

pub use session_store::*;
