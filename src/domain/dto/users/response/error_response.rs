//! 실패 응답 DTO

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 실패한 API 호출이 돌려주는 에러 본문
///
/// 에러 코드나 분류 없이 사람이 읽을 수 있는 `detail` 문자열 하나만 담습니다.
/// `Display`는 `detail`을 그대로 출력합니다.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{detail}")]
pub struct ApiError {
    pub detail: String,
}

impl ApiError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_unchanged() {
        let error: ApiError = serde_json::from_str(r#"{"detail":"invalid credentials"}"#).unwrap();
        assert_eq!(error.detail, "invalid credentials");
        assert_eq!(error.to_string(), "invalid credentials");
    }

    #[test]
    fn test_korean_detail() {
        let error: ApiError =
            serde_json::from_str(r#"{"detail":"이메일 또는 비밀번호가 잘못되었습니다."}"#).unwrap();
        assert_eq!(error, ApiError::new("이메일 또는 비밀번호가 잘못되었습니다."));
    }

    #[test]
    fn test_extra_diagnostic_fields_ignored() {
        let error: ApiError =
            serde_json::from_str(r#"{"detail":"User not found","code":404}"#).unwrap();
        assert_eq!(error.detail, "User not found");
    }

    #[test]
    fn test_roundtrip() {
        let error = ApiError::new("Access denied");
        let json = serde_json::to_string(&error).unwrap();

        assert_eq!(json, r#"{"detail":"Access denied"}"#);
        assert_eq!(serde_json::from_str::<ApiError>(&json).unwrap(), error);
    }

    #[test]
    fn test_non_string_detail_rejected() {
        // FastAPI 검증 에러처럼 detail이 배열이면 이 계약에 맞지 않습니다.
        let json = r#"{"detail":[{"loc":["body","email"],"msg":"field required"}]}"#;
        assert!(serde_json::from_str::<ApiError>(json).is_err());
    }
}
