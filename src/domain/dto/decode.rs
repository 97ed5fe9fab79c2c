//! 응답 본문 해석
//!
//! 외부 소비자가 이미 받아 둔 상태 코드와 본문을 계약 타입으로 바꿉니다.
//! 이 모듈은 네트워크 호출을 하지 않습니다.

use std::str::FromStr;

use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::dto::users::response::{ApiError, LoginResponse, OAuthResponse, SignupResponse};
use crate::errors::{ContractError, ContractResult};
use crate::utils::string_utils::mask_secret;

/// JSON 본문을 지정한 계약 타입으로 역직렬화합니다.
pub fn decode_body<T: DeserializeOwned>(body: &str) -> ContractResult<T> {
    let value = serde_json::from_str(body)?;
    debug!("decoded {} ({} bytes)", std::any::type_name::<T>(), body.len());
    Ok(value)
}

/// 계약 타입을 JSON 문자열로 직렬화합니다.
pub fn encode_body<T: Serialize>(value: &T) -> ContractResult<String> {
    serde_json::to_string(value).map_err(|e| ContractError::Encode(e.to_string()))
}

/// 상태 코드에 따라 성공 본문 또는 [`ApiError`]를 해석합니다.
///
/// - 2xx: `T`로 역직렬화
/// - 그 외: `ApiError`로 역직렬화한 뒤 `ContractError::Api`로 반환
///
/// 실패 응답의 본문이 `{"detail": ...}` 형태가 아니면 `ContractError::Decode`가 됩니다.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> ContractResult<T> {
    if (200..300).contains(&status) {
        return decode_body(body);
    }

    let error: ApiError = decode_body(body)?;
    warn!("API call failed with status {}: {}", status, error.detail);
    Err(ContractError::Api {
        status,
        detail: error.detail,
    })
}

/// 응답 본문의 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Login,
    Signup,
    OAuth,
    Error,
}

impl ResponseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseKind::Login => "login",
            ResponseKind::Signup => "signup",
            ResponseKind::OAuth => "oauth",
            ResponseKind::Error => "error",
        }
    }
}

impl FromStr for ResponseKind {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "login" => Ok(ResponseKind::Login),
            "signup" => Ok(ResponseKind::Signup),
            "oauth" => Ok(ResponseKind::OAuth),
            "error" => Ok(ResponseKind::Error),
            _ => Err(ContractError::UnknownKind(s.to_string())),
        }
    }
}

/// 본문이 지정한 종류의 계약을 만족하는지 확인합니다.
pub fn check_payload(kind: ResponseKind, body: &str) -> ContractResult<()> {
    match kind {
        ResponseKind::Login => {
            let login: LoginResponse = decode_body(body)?;
            debug!(
                "login payload for {} (token {})",
                login.user.email,
                mask_secret(&login.access_token)
            );
        }
        ResponseKind::Signup => {
            let signup: SignupResponse = decode_body(body)?;
            debug!("signup payload for {}: {}", signup.user.email, signup.message);
        }
        ResponseKind::OAuth => {
            let oauth: OAuthResponse = decode_body(body)?;
            debug!("oauth payload redirecting to {}", oauth.auth_url);
        }
        ResponseKind::Error => {
            let error: ApiError = decode_body(body)?;
            debug!("error payload: {}", error.detail);
        }
    }
    Ok(())
}
