//! 회원가입 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 요청 본문을 정의합니다.
//! 서버는 세 필드 모두 제약 없는 문자열로 받으므로 여기서도 비어 있는지만 확인합니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 회원가입 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "이메일을 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,

    #[validate(length(min = 1, message = "닉네임을 입력해주세요"))]
    pub nickname: String,
}
