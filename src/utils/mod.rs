//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 비밀 값 마스킹

pub mod string_utils;
