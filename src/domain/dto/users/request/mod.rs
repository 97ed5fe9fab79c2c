//! # 인증 관련 요청 DTO 모듈
//!
//! 클라이언트가 인증 API로 보내는 요청 본문을 정의합니다.
//! 서버로 보내기 전에 `validator` 크레이트로 형식 규칙을 먼저 확인할 수 있습니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use auth_api_contracts::domain::dto::users::request::{validate_request, LoginRequest};
//!
//! let req = LoginRequest { email: "a@b.com".into(), password: "secret".into() };
//! validate_request(&req)?;
//! let body = auth_api_contracts::domain::dto::encode_body(&req)?;
//! ```
//!
//! ## 에러 핸들링
//!
//! 검증 실패 시 `validator::ValidationErrors`가 `ContractError::Validation`으로 변환됩니다.

pub mod auth_request;
pub mod signup_request;

pub use auth_request::{LoginRequest, OAuthCallbackQuery};
pub use signup_request::SignupRequest;

use validator::Validate;

use crate::errors::ContractResult;

/// 요청 DTO를 검증하고 실패를 `ContractError`로 변환합니다.
pub fn validate_request<T: Validate>(request: &T) -> ContractResult<()> {
    request.validate()?;
    Ok(())
}
