//! 인증 API 데이터 계약
//!
//! 클라이언트와 인증 API 사이에서 오가는 JSON 본문의 형태를 Rust 타입으로 정의합니다.
//! 로그인, 회원가입, OAuth 리다이렉트 응답과 공통 에러 본문을 다루며,
//! 인증 로직이나 네트워크 전송은 포함하지 않습니다.
//!
//! # Features
//!
//! - **응답 계약**: `LoginResponse`, `SignupResponse`, `OAuthResponse`, `ApiError`
//! - **요청 계약**: `validator` 기반 로그인/회원가입 요청 검증
//! - **본문 해석**: 상태 코드와 본문을 받아 성공 타입 또는 `ContractError::Api`로 변환
//!
//! # Examples
//!
//! ```rust,ignore
//! use auth_api_contracts::domain::dto::{decode_response, LoginResponse};
//! use auth_api_contracts::errors::ContractError;
//!
//! match decode_response::<LoginResponse>(status, &body) {
//!     Ok(login) => save_token(login.authorization_header_value()),
//!     Err(ContractError::Api { detail, .. }) => show_message(&detail),
//!     Err(e) => log::error!("unexpected payload: {}", e),
//! }
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod utils;
