//! # Data Transfer Objects (DTO) Module
//!
//! 클라이언트와 인증 API 사이에서 오가는 JSON 본문의 계약을 정의합니다.
//!
//! ## 설계 원칙
//!
//! - **구조만 정의**: 응답 타입은 필드와 중첩 구조만 선언하며 스스로 검증하지 않습니다.
//!   필수 필드 누락은 serde 역직렬화 단계에서 거부됩니다.
//! - **요청 검증**: 요청 타입은 `validator` 크레이트로 형식 규칙을 확인합니다.
//! - **전송 없음**: HTTP 메서드, 경로, 헤더는 서버 쪽에서 정해지며 여기서 가정하지 않습니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── users/
//! │   ├── request/    # 요청 DTO (클라이언트 → 서버)
//! │   └── response/   # 응답 DTO (서버 → 클라이언트)
//! └── decode.rs       # 상태 코드 + 본문 → 계약 타입
//! ```
//!
//! ## 예제
//!
//! ```rust,ignore
//! use auth_api_contracts::domain::dto::{decode_response, LoginResponse};
//!
//! let login: LoginResponse = decode_response(200, body)?;
//! let header = login.authorization_header_value();
//! ```

pub mod users;
pub mod decode;

pub use users::*;
pub use decode::{check_payload, decode_body, decode_response, encode_body, ResponseKind};
