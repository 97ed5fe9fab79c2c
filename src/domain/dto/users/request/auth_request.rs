//! 인증 요청관련 DTO
//!
//! 로그인 요청과 OAuth 콜백 파라미터를 매핑합니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 로컬 로그인 요청 구조체
///
/// 이메일 형식은 확인하지 않습니다. 존재하지 않는 계정은 서버가 401 `detail`로 답합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "이메일을 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// OAuth 콜백 쿼리 파라미터 구조체
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OAuthCallbackQuery {
    #[validate(length(min = 1, message = "Authorization code가 필요합니다"))]
    pub code: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// 에러가 있을 경우 (사용자가 거부했거나 에러 발생)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OAuthCallbackQuery {
    /// 프로바이더가 에러와 함께 리다이렉트했는지 확인합니다.
    pub fn is_denied(&self) -> bool {
        self.error.is_some()
    }
}
