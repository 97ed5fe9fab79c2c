//! # Domain Models Module
//!
//! DTO 밖에서 쓰이는 도메인 모델입니다.
//!
//! - [`oauth`] - OAuth 프로바이더 식별

pub mod oauth;

pub use oauth::OAuthProvider;
