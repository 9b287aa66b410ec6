//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `Arc`로 공유되어 actix-web `app_data`와 미들웨어에 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::GoogleAuthService;
//!
//! let google_auth = Arc::new(GoogleAuthService::new(config)?);
//! App::new().app_data(web::Data::from(google_auth.clone()))
//! ```

pub mod auth;
