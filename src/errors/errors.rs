//! 크레이트 전역에서 사용하는 에러 시스템
//!
//! 인증 API 페이로드를 해석하면서 발생할 수 있는 에러를 하나의 열거형으로 모읍니다.
//! 서버가 돌려준 [`ApiError`](crate::domain::dto::users::response::ApiError) 본문도
//! `ContractError::Api`로 감싸서 호출자에게 전달됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use auth_api_contracts::errors::{ContractError, ContractResult};
//! use auth_api_contracts::domain::dto::decode_response;
//!
//! fn on_login(status: u16, body: &str) -> ContractResult<()> {
//!     match decode_response::<LoginResponse>(status, body) {
//!         Ok(login) => println!("welcome {}", login.user.nickname),
//!         Err(ContractError::Api { detail, .. }) => println!("로그인 실패: {}", detail),
//!         Err(e) => return Err(e),
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// 크레이트 전역 에러 타입
///
/// 역직렬화 실패, 요청 DTO 검증 실패, 서버 보고 실패를 구분합니다.
#[derive(Error, Debug)]
pub enum ContractError {
    /// JSON 구문 오류 또는 필수 필드 누락
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// 직렬화 실패
    #[error("Encode error: {0}")]
    Encode(String),

    /// 요청 DTO 검증 실패
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// 서버가 실패 응답과 함께 돌려준 `detail`
    #[error("API error ({status}): {detail}")]
    Api { status: u16, detail: String },

    /// 지원하지 않는 OAuth 프로바이더 이름
    #[error("Unsupported OAuth provider: {0}")]
    UnknownProvider(String),

    /// 알 수 없는 응답 종류 이름
    #[error("Unknown response kind: {0}")]
    UnknownKind(String),
}

impl ContractError {
    /// 서버 응답에서 비롯된 에러라면 HTTP 상태 코드를 반환합니다.
    pub fn status(&self) -> Option<u16> {
        match self {
            ContractError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 4xx 응답(잘못된 자격 증명, 중복 이메일 등)인지 확인합니다.
    pub fn is_client_error(&self) -> bool {
        matches!(self.status(), Some(400..=499))
    }

    /// 사용자에게 보여줄 수 있는 메시지
    ///
    /// 서버가 보낸 `detail`은 그대로, 나머지는 `Display` 표현을 사용합니다.
    pub fn user_message(&self) -> String {
        match self {
            ContractError::Api { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type ContractResult<T> = Result<T, ContractError>;
