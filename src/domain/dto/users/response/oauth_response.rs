//! OAuth 리다이렉트 응답 DTO
//!
//! 소셜 로그인을 시작할 때 서버가 내려주는 인증 페이지 주소를 표현합니다.

use serde::{Deserialize, Serialize};

/// OAuth 로그인 URL 응답
///
/// 클라이언트는 `auth_url`로 브라우저를 이동시켜 외부 프로바이더에서 인증을 진행합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthResponse {
    pub auth_url: String,
}
