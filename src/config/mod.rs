//! # Configuration Module
//!
//! 사용자 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` / `application.yml`과 유사한 역할을 하며,
//! 환경 변수 기반의 설정값들을 타입이 있는 접근자로 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 저장소, 서버, Rate Limiting, CORS 설정
//! - [`validation_config`] - 사용자명 검증 패턴
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # 저장소 설정
//! export STORE_BACKEND="mongodb"        # mongodb | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="webflux"
//!
//! # 보호 설정
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,http://localhost:8080"
//!
//! # 검증 규칙
//! export USER_NAME_PATTERN="^[A-Za-z0-9]+$"
//! ```
//!
//! `PROFILE=dev` / `PROFILE=prod`로 실행하면 `.env.dev` / `.env.prod` 파일을
//! 먼저 읽어 들입니다. (`main.rs`의 `load_env_file` 참고)

pub mod data_config;
pub mod validation_config;

pub use data_config::*;
pub use validation_config::*;
