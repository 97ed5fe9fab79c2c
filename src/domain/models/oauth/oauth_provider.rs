use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ContractError;

/// 소셜 로그인 프로바이더
///
/// 인증 API는 Google과 Kakao 두 가지 외부 프로바이더를 통해
/// OAuth 리다이렉트 플로우를 시작할 수 있습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OAuthProvider {
    /// Google OAuth 2.0
    Google,
    /// Kakao OAuth 2.0
    Kakao,
}

impl OAuthProvider {
    /// 프로바이더의 소문자 문자열 표현
    ///
    /// ```rust,ignore
    /// assert_eq!(OAuthProvider::Google.as_str(), "google");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Kakao => "kakao",
        }
    }

    pub fn all() -> [OAuthProvider; 2] {
        [OAuthProvider::Google, OAuthProvider::Kakao]
    }
}

impl FromStr for OAuthProvider {
    type Err = ContractError;

    /// 대소문자 구분 없이 프로바이더 이름을 해석합니다.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "google" => Ok(OAuthProvider::Google),
            "kakao" => Ok(OAuthProvider::Kakao),
            _ => Err(ContractError::UnknownProvider(s.to_string())),
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
