//! # User Data Transfer Objects Module
//!
//! 인증 API의 요청/응답 데이터 구조를 정의합니다.
//!
//! ```text
//! users/
//! ├── request/                    # 클라이언트 → 서버
//! │   ├── auth_request.rs        # 로그인, OAuth 콜백
//! │   └── signup_request.rs      # 회원가입
//! └── response/                   # 서버 → 클라이언트
//!     ├── user_response.rs       # 로그인/회원가입 응답, 사용자 프로필
//!     ├── oauth_response.rs      # OAuth 리다이렉트 URL
//!     └── error_response.rs      # 실패 응답
//! ```

pub mod request;
pub mod response;

pub use request::{LoginRequest, OAuthCallbackQuery, SignupRequest};
pub use response::{ApiError, AuthUser, LoginResponse, OAuthResponse, SignupResponse};
