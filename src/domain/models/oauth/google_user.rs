//! # Google 사용자 정보 모델
//!
//! Google OAuth2 v1 UserInfo 엔드포인트(`/oauth2/v1/userinfo?alt=json`)가 반환하는
//! 사용자 정보를 표현합니다.

use serde::{Deserialize, Serialize};

/// Google 사용자 프로필
///
/// 프로필 조회 때마다 새로 생성되는 불변 값입니다.
/// 응답에 없는 선택 필드는 기본값으로 채우지 않고 `None`으로 남깁니다.
///
/// | 필드 | 필수 스코프 |
/// |------|-------------|
/// | `id`, `email`, `verified_email` | `userinfo.email` |
/// | `name`, `picture` | `userinfo.profile` |
///
/// ```rust,ignore
/// let profile = google_auth.user_profile(&tokens.access_token).await?;
/// if profile.verified_email == Some(true) {
///     log::info!("검증된 이메일: {}", profile.email);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Google 사용자 고유 식별자 (변경되지 않음)
    pub id: String,

    /// 기본 이메일 주소
    pub email: String,

    /// 표시 이름
    pub name: String,

    /// 프로필 사진 URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,

    /// Google이 이메일 소유권을 검증했는지 여부
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_email: Option<bool>,
}
