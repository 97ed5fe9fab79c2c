//! 로그인/회원가입 응답과 사용자 프로필 DTO

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 인증 응답에 포함되는 사용자 프로필
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AuthUserWire")]
pub struct AuthUser {
    /// 사용자 식별자
    ///
    /// 원본 백엔드는 MongoDB 스타일의 `_id` 키로 내려주기도 하므로 둘 다 받습니다.
    /// 두 키가 모두 있으면 `id`가 우선하고, 직렬화할 때는 항상 `id`를 사용합니다.
    pub id: String,
    pub email: String,
    pub nickname: String,

    /// 생성 시각 (보통 `2024-01-01T00:00:00Z` 형태)
    pub created_at: String,
}

/// `AuthUser` 역직렬화용 본문 형태
#[derive(Deserialize)]
struct AuthUserWire {
    id: Option<String>,
    #[serde(rename = "_id")]
    underscore_id: Option<String>,
    email: String,
    nickname: String,
    created_at: String,
}

impl TryFrom<AuthUserWire> for AuthUser {
    type Error = String;

    fn try_from(wire: AuthUserWire) -> Result<Self, Self::Error> {
        let id = wire
            .id
            .or(wire.underscore_id)
            .ok_or_else(|| "missing field `id`".to_string())?;

        Ok(Self {
            id,
            email: wire.email,
            nickname: wire.nickname,
            created_at: wire.created_at,
        })
    }
}

impl AuthUser {
    /// `created_at`을 RFC 3339 타임스탬프로 해석합니다.
    ///
    /// 형식이 맞지 않으면 `None`을 반환하며, 원본 문자열은 그대로 남습니다.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// 로그인 응답 DTO
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// 불투명한 bearer 토큰. 내부 구조를 가정하지 않습니다.
    pub access_token: String,
    pub user: AuthUser,
}

impl LoginResponse {
    /// 이후 요청의 `Authorization` 헤더에 넣을 값
    pub fn authorization_header_value(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

// 토큰이 로그에 남지 않도록 Debug 출력에서 가립니다.
impl fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginResponse")
            .field("access_token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

/// 회원가입 응답 DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupResponse {
    /// 사람이 읽을 수 있는 확인 메시지
    pub message: String,
    pub user: AuthUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOGIN_JSON: &str = r#"{"access_token":"tok123","user":{"id":"u1","email":"a@b.com","nickname":"Al","created_at":"2024-01-01T00:00:00Z"}}"#;

    fn sample_user() -> AuthUser {
        AuthUser {
            id: "u1".to_string(),
            email: "a@b.com".to_string(),
            nickname: "Al".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_login_response_fields_preserved() {
        let login: LoginResponse = serde_json::from_str(LOGIN_JSON).unwrap();

        assert_eq!(login.access_token, "tok123");
        assert_eq!(login.user.id, "u1");
        assert_eq!(login.user.email, "a@b.com");
        assert_eq!(login.user.nickname, "Al");
        assert_eq!(login.user.created_at, "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_signup_response_message_verbatim() {
        let json = r#"{"message":"회원가입이 완료되었습니다.  ","user":{"id":"u1","email":"a@b.com","nickname":"Al","created_at":"2024-01-01T00:00:00Z"}}"#;
        let signup: SignupResponse = serde_json::from_str(json).unwrap();

        assert_eq!(signup.message, "회원가입이 완료되었습니다.  ");
        assert_eq!(signup.user, sample_user());
    }

    #[test]
    fn test_login_response_roundtrip() {
        let login = LoginResponse {
            access_token: "tok123".to_string(),
            user: sample_user(),
        };

        let json = serde_json::to_string(&login).unwrap();
        let parsed: LoginResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, login);
    }

    #[test]
    fn test_signup_response_roundtrip() {
        let signup = SignupResponse {
            message: "ok".to_string(),
            user: sample_user(),
        };

        let json = serde_json::to_string(&signup).unwrap();
        let parsed: SignupResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, signup);
    }

    #[test]
    fn test_missing_required_field_rejected() {
        // created_at 누락
        let json = r#"{"access_token":"tok123","user":{"id":"u1","email":"a@b.com","nickname":"Al"}}"#;
        assert!(serde_json::from_str::<LoginResponse>(json).is_err());

        // user 누락
        assert!(serde_json::from_str::<SignupResponse>(r#"{"message":"ok"}"#).is_err());
    }

    #[test]
    fn test_null_field_rejected() {
        let json = r#"{"access_token":null,"user":{"id":"u1","email":"a@b.com","nickname":"Al","created_at":"x"}}"#;
        assert!(serde_json::from_str::<LoginResponse>(json).is_err());
    }

    #[test]
    fn test_user_accepts_underscore_id() {
        let json = r#"{"_id":"665f1c","email":"a@b.com","nickname":"Al","created_at":"2024-01-01T00:00:00Z","streak_days":3}"#;
        let user: AuthUser = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, "665f1c");
        let out = serde_json::to_value(&user).unwrap();
        assert_eq!(out["id"], "665f1c");
        assert!(out.get("_id").is_none());
        assert!(out.get("streak_days").is_none());
    }

    #[test]
    fn test_user_with_both_id_keys() {
        let json = r#"{"access_token":"tok123","user":{"id":"u1","_id":"665f1c","email":"a@b.com","nickname":"Al","created_at":"2024-01-01T00:00:00Z"}}"#;
        let login: LoginResponse = serde_json::from_str(json).unwrap();

        assert_eq!(login.user.id, "u1");
        assert_eq!(login.user.email, "a@b.com");
    }

    #[test]
    fn test_user_without_any_id_rejected() {
        let json = r#"{"email":"a@b.com","nickname":"Al","created_at":"2024-01-01T00:00:00Z"}"#;
        let err = serde_json::from_str::<AuthUser>(json).unwrap_err();
        assert!(err.to_string().contains("missing field `id`"));
    }

    #[test]
    fn test_created_at_utc() {
        let user = sample_user();
        let parsed = user.created_at_utc().unwrap();
        assert_eq!(parsed.to_rfc3339(), "2024-01-01T00:00:00+00:00");

        let offset = AuthUser {
            created_at: "2024-01-01T09:00:00+09:00".to_string(),
            ..sample_user()
        };
        assert_eq!(offset.created_at_utc(), Some(parsed));

        let naive = AuthUser {
            created_at: "2024-01-01 00:00:00".to_string(),
            ..sample_user()
        };
        assert_eq!(naive.created_at_utc(), None);
        assert_eq!(naive.created_at, "2024-01-01 00:00:00");
    }

    #[test]
    fn test_authorization_header_value() {
        let login: LoginResponse = serde_json::from_str(LOGIN_JSON).unwrap();
        assert_eq!(login.authorization_header_value(), "Bearer tok123");
    }

    #[test]
    fn test_debug_hides_access_token() {
        let login: LoginResponse = serde_json::from_str(LOGIN_JSON).unwrap();
        let debug = format!("{:?}", login);

        assert!(!debug.contains("tok123"));
        assert!(debug.contains("<redacted>"));
        assert!(debug.contains("a@b.com"));
    }
}
