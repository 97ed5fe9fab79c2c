//! # Configuration Module
//!
//! 환경 변수 기반의 설정값을 한곳에서 관리합니다.
//! 라이브러리 자체는 설정을 읽지 않으며, 바이너리가 로깅과 `.env` 로드에 사용합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 로깅, `.env` 파일 선택
//!
//! ## 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="development"  # development, test, staging, production
//! export PROFILE="dev"              # dev → .env.dev, prod → .env.prod, 그 외 → .env
//! export RUST_LOG="debug"           # 지정하면 환경별 기본 필터보다 우선
//! ```

pub mod data_config;

pub use data_config::*;
