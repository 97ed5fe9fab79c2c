//! # 문자열 유틸리티
//!
//! 로그 출력에 쓰이는 문자열 헬퍼입니다.

/// 로그 출력용으로 비밀 값의 앞부분만 남깁니다.
///
/// ```rust,ignore
/// assert_eq!(mask_secret("eyJhbGciOiJIUzI1NiIs"), "eyJh…(20)");
/// ```
pub fn mask_secret(value: &str) -> String {
    let visible: String = value.chars().take(4).collect();
    format!("{}…({})", visible, value.chars().count())
}
