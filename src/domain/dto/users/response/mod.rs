//! # 인증 API 응답 DTO 모듈
//!
//! 인증 API가 클라이언트에게 돌려주는 JSON 본문의 형태를 정의합니다.
//! 네 가지 응답은 서로 독립적이며, 각기 다른 API 호출의 대안적인 응답 본문입니다.
//!
//! | 호출 | 응답 타입 | 내용 |
//! |------|-----------|------|
//! | 로그인 | [`LoginResponse`] | bearer 토큰 + 사용자 프로필 |
//! | 회원가입 | [`SignupResponse`] | 확인 메시지 + 사용자 프로필 |
//! | OAuth 시작 | [`OAuthResponse`] | 리다이렉트할 인증 URL |
//! | 실패한 모든 호출 | [`ApiError`] | `detail` 문자열 |
//!
//! 모든 필드는 필수입니다. 필드가 빠진 본문은 serde 역직렬화 단계에서 거부되며,
//! 선언되지 않은 추가 필드는 무시되고 보존되지 않습니다.
//!
//! ## JSON 응답 예제
//!
//! ### 로그인 응답
//! ```json
//! {
//!   "access_token": "eyJhbGciOiJIUzI1NiIs...",
//!   "user": {
//!     "id": "665f1c2e8b3a4d0012345678",
//!     "email": "user@example.com",
//!     "nickname": "수어러버",
//!     "created_at": "2024-06-01T10:00:00Z"
//!   }
//! }
//! ```
//!
//! ### 에러 응답
//! ```json
//! { "detail": "이메일 또는 비밀번호가 잘못되었습니다." }
//! ```
//!
//! ## 보안 고려사항
//!
//! - **로그 안전**: `LoginResponse`의 `Debug` 출력은 토큰을 가립니다

pub mod user_response;
pub mod oauth_response;
pub mod error_response;

pub use user_response::{AuthUser, LoginResponse, SignupResponse};
pub use oauth_response::OAuthResponse;
pub use error_response::ApiError;
