//! # Domain Layer Module
//!
//! 인증 API 경계의 데이터 계약을 모아 둔 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── DTOs      - 요청/응답 본문 (API 계약)
//! └── Models    - OAuth 프로바이더 등 보조 모델
//! ```

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
