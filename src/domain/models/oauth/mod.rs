//! # OAuth Domain Models Module
//!
//! 소셜 로그인 리다이렉트 플로우에서 쓰이는 도메인 모델입니다.
//! 클라이언트는 프로바이더를 골라 [`OAuthResponse`](crate::domain::dto::OAuthResponse)의
//! `auth_url`로 이동하고, 프로바이더는 `code`와 함께 콜백으로 돌아옵니다.

pub mod oauth_provider;

pub use oauth_provider::OAuthProvider;
