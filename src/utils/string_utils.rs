//! # 문자열 유틸리티
//!
//! 설정 파싱과 예제 서버의 HTML 출력에 쓰이는 문자열 처리 함수들입니다.

/// 공백 또는 콤마로 구분된 스코프 문자열을 목록으로 분리합니다.
///
/// 빈 항목은 제거하고 입력 순서를 유지합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::parse_scope_list;
///
/// assert_eq!(parse_scope_list("openid, email profile"), vec!["openid", "email", "profile"]);
/// ```
pub fn parse_scope_list(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|scope| !scope.is_empty())
        .map(str::to_string)
        .collect()
}

/// HTML 본문/속성 값에 넣기 위해 특수 문자를 이스케이프합니다.
///
/// Google 프로필 값(이름, 사진 URL 등)은 사용자가 제어하는 값이므로
/// 페이지에 출력하기 전에 반드시 이 함수를 거쳐야 합니다.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
