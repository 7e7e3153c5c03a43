//! 데이터 및 서버 설정 관리 모듈
//!
//! 저장소, 서버 바인딩, Rate Limiting, CORS 관련 설정을 관리합니다.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use log::error;

/// 환경 변수를 읽어 파싱하고, 없거나 파싱에 실패하면 기본값을 사용합니다.
///
/// 파싱 실패는 설정 오타일 가능성이 높으므로 에러 로그를 남깁니다.
fn env_parse_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        Err(_) => default,
    }
}

/// 사용자 레코드를 저장할 백엔드 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// MongoDB 컬렉션 (기본값)
    MongoDb,
    /// 프로세스 내부 맵 - 로컬 개발용, 재시작 시 데이터 소멸
    Memory,
}

impl StoreBackend {
    /// 문자열에서 StoreBackend를 생성합니다.
    ///
    /// 알 수 없는 값은 `MongoDb`로 취급합니다.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StoreBackend::Memory,
            _ => StoreBackend::MongoDb,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::MongoDb => "MongoDB",
            StoreBackend::Memory => "Memory",
        }
    }
}

/// 저장소 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// 사용자 문서를 담는 컬렉션 이름
    pub const USER_COLLECTION: &'static str = "user";

    /// `STORE_BACKEND` (기본값: mongodb)
    pub fn backend() -> StoreBackend {
        env::var("STORE_BACKEND")
            .map(|name| StoreBackend::from_name(&name))
            .unwrap_or(StoreBackend::MongoDb)
    }

    /// `MONGODB_URI` (기본값: "mongodb://localhost:27017")
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// `DATABASE_NAME` (기본값: "webflux")
    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "webflux".to_string())
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 8080)
    pub fn port() -> u16 {
        env_parse_or("PORT", 8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "127.0.0.1")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// 워커 스레드 수 (`WORKERS`, 기본값: 4)
    pub fn workers() -> usize {
        env_parse_or("WORKERS", 4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// Rate Limiting 설정 구조체
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn load() -> Self {
        Self {
            per_second: env_parse_or("RATE_LIMIT_PER_SECOND", 100),
            burst_size: env_parse_or("RATE_LIMIT_BURST_SIZE", 200),
        }
    }
}

/// CORS 허용 Origin 설정
pub struct CorsConfig;

impl CorsConfig {
    const DEFAULT_ORIGINS: [&'static str; 4] = [
        "http://localhost:3000",
        "http://127.0.0.1:3000",
        "http://localhost:8080",
        "http://127.0.0.1:8080",
    ];

    /// `CORS_ALLOWED_ORIGINS` (쉼표 구분). 비어 있으면 로컬 개발용 Origin을 사용합니다.
    pub fn allowed_origins() -> Vec<String> {
        env::var("CORS_ALLOWED_ORIGINS")
            .map(|raw| Self::parse_origins(&raw))
            .ok()
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect())
    }

    fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_backend_from_name() {
        assert_eq!(StoreBackend::from_name("memory"), StoreBackend::Memory);
        assert_eq!(StoreBackend::from_name(" In-Memory "), StoreBackend::Memory);
        assert_eq!(StoreBackend::from_name("mongodb"), StoreBackend::MongoDb);
        assert_eq!(StoreBackend::from_name("unknown"), StoreBackend::MongoDb);
    }

    #[test]
    fn test_parse_origins_skips_blanks() {
        assert_eq!(
            CorsConfig::parse_origins("http://a.test, ,http://b.test,"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert!(CorsConfig::parse_origins(" , ").is_empty());
    }

    #[test]
    fn test_env_parse_or_falls_back_for_missing_key() {
        assert_eq!(env_parse_or("WEBFLUX_TEST_SURELY_UNSET_KEY", 42u16), 42);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }
    }
}
