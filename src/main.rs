//! 인증 API 페이로드 검사기
//!
//! 표준 입력으로 받은 JSON 본문이 지정한 응답 계약을 만족하는지 확인합니다.
//!
//! ```bash
//! echo '{"detail":"invalid credentials"}' | auth_api_contracts error
//! ```

use std::io::Read;
use std::process::ExitCode;

use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use auth_api_contracts::config::{EnvFileConfig, LogConfig};
use auth_api_contracts::domain::dto::{check_payload, ResponseKind};

const USAGE: &str = "usage: auth_api_contracts <login|signup|oauth|error> < payload.json";

/// 계약을 만족함
const EXIT_ACCEPTED: u8 = 0;
/// 계약 위반
const EXIT_REJECTED: u8 = 1;
/// 잘못된 인자 또는 입력 읽기 실패
const EXIT_USAGE: u8 = 2;

fn main() -> ExitCode {
    let env_file = load_env_file();
    init_logging();

    match env_file {
        Ok(name) => info!("{} 파일 로드 됨", name),
        Err(e) => warn!("환경 파일 로드 실패: {}", e),
    }

    let kind_arg = std::env::args().nth(1);
    let code = exit_code(kind_arg.as_deref(), || {
        let mut body = String::new();
        std::io::stdin().read_to_string(&mut body)?;
        Ok(body)
    });

    if code == EXIT_USAGE {
        eprintln!("{}", USAGE);
    }
    ExitCode::from(code)
}

/// 응답 종류 인자와 본문으로 종료 코드를 결정합니다.
///
/// 본문은 인자가 올바를 때만 읽습니다.
fn exit_code<F>(kind_arg: Option<&str>, read_body: F) -> u8
where
    F: FnOnce() -> std::io::Result<String>,
{
    let Some(kind_arg) = kind_arg else {
        return EXIT_USAGE;
    };

    let kind: ResponseKind = match kind_arg.parse() {
        Ok(kind) => kind,
        Err(e) => {
            error!("{}", e);
            return EXIT_USAGE;
        }
    };

    let body = match read_body() {
        Ok(body) => body,
        Err(e) => {
            error!("표준 입력 읽기 실패: {}", e);
            return EXIT_USAGE;
        }
    };

    match check_payload(kind, &body) {
        Ok(()) => {
            info!("✅ {} 계약을 만족합니다", kind.as_str());
            EXIT_ACCEPTED
        }
        Err(e) => {
            error!("❌ {} 계약 위반: {}", kind.as_str(), e);
            EXIT_REJECTED
        }
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() -> Result<&'static str, dotenv::Error> {
    let file_name = EnvFileConfig::file_name();
    if file_name == ".env" {
        dotenv()?;
    } else {
        dotenv::from_filename(file_name)?;
    }
    Ok(file_name)
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 실행 환경별 기본 필터를 사용합니다.
///
/// ```bash
/// RUST_LOG=auth_api_contracts=debug auth_api_contracts login < login.json
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or(LogConfig::default_filter()));
}
