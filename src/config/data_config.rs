//! 실행 환경 및 로깅 설정 관리 모듈

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let name = env::var("ENVIRONMENT")
            .or_else(|_| env::var("NODE_ENV"))
            .unwrap_or_else(|_| "production".to_string());
        Self::from_str(&name)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 로깅 설정
pub struct LogConfig;

impl LogConfig {
    /// `RUST_LOG`가 없을 때 사용할 현재 환경의 기본 필터
    pub fn default_filter() -> &'static str {
        Self::default_filter_for_env(&Environment::current())
    }

    /// 특정 환경에 대한 기본 로그 필터를 반환합니다.
    ///
    /// - Development/Test: `debug` (디코딩 내역까지 출력)
    /// - Staging: `info`
    /// - Production: `warn` (API 실패만 출력)
    pub fn default_filter_for_env(env: &Environment) -> &'static str {
        match env {
            Environment::Development => "debug",
            Environment::Test => "debug",
            Environment::Staging => "info",
            Environment::Production => "warn",
        }
    }
}

/// `.env` 파일 선택 설정
pub struct EnvFileConfig;

impl EnvFileConfig {
    /// `PROFILE` 환경 변수에 맞는 `.env` 파일 이름
    ///
    /// 설정되지 않은 경우 `dev` 프로필을 사용합니다.
    pub fn file_name() -> &'static str {
        let profile = env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());
        Self::file_name_for_profile(&profile)
    }

    pub fn file_name_for_profile(profile: &str) -> &'static str {
        match profile {
            "prod" => ".env.prod",
            "dev" => ".env.dev",
            _ => ".env",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_log_filter_for_each_environment() {
        assert_eq!(
            LogConfig::default_filter_for_env(&Environment::Development),
            "debug"
        );
        assert_eq!(LogConfig::default_filter_for_env(&Environment::Test), "debug");
        assert_eq!(
            LogConfig::default_filter_for_env(&Environment::Staging),
            "info"
        );
        assert_eq!(
            LogConfig::default_filter_for_env(&Environment::Production),
            "warn"
        );
    }

    #[test]
    fn test_env_file_for_profile() {
        assert_eq!(EnvFileConfig::file_name_for_profile("prod"), ".env.prod");
        assert_eq!(EnvFileConfig::file_name_for_profile("dev"), ".env.dev");
        assert_eq!(EnvFileConfig::file_name_for_profile("local"), ".env");
    }

    #[test]
    fn test_env_file_unknown_profile_falls_back() {
        assert_eq!(EnvFileConfig::file_name_for_profile(""), ".env");
        assert_eq!(EnvFileConfig::file_name_for_profile("PROD"), ".env");
    }
}
