//! WebFlux 사용자 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 저장소(MongoDB 또는 인메모리)를 선택해 연결하고 `/user` REST API를 제공합니다.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use webflux_user_service::config::{
    CorsConfig, DatabaseConfig, RateLimitConfig, ServerConfig, StoreBackend, ValidationConfig,
};
use webflux_user_service::db::Database;
use webflux_user_service::domain::rules::NameRule;
use webflux_user_service::repositories::users::{
    MemoryUserRepository, MongoUserRepository, UserRepository,
};
use webflux_user_service::routes::configure_all_routes;
use webflux_user_service::services::users::UserService;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let (profile, env_file) = load_env_file();
    init_logging();

    info!("Current profile: {}", profile);
    match env_file {
        Ok(path) => info!("{} 파일 로드 됨", path.display()),
        Err(e) => warn!("환경 파일 로드 실패 (환경 변수만 사용): {}", e),
    }

    info!("🚀 WebFlux 사용자 서비스 시작중...");

    let repository = initialize_user_repository().await?;

    let name_pattern = ValidationConfig::name_pattern();
    let name_rule = NameRule::new(&name_pattern).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("USER_NAME_PATTERN 정규식 오류 ({}): {}", name_pattern, e),
        )
    })?;
    info!("사용자명 패턴: {}", name_rule.pattern());

    let user_service = web::Data::new(UserService::new(repository, name_rule));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(user_service: web::Data<UserService>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 User API: http://{}/user", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Rate Limiting 설정 오류: {:?}", rate_limit_config),
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();
    info!("CORS 허용 Origin: {:?}", allowed_origins);

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(user_service.clone())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// 로거 초기화 전에 호출되므로 결과를 반환만 하고, 기록은 호출 측에서 합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// ```bash
/// PROFILE=prod cargo run
/// ```
fn load_env_file() -> (String, dotenv::Result<PathBuf>) {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod"),
        "dev" => dotenv::from_filename(".env.dev"),
        _ => dotenv(),
    };

    (profile, loaded)
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=webflux_user_service=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// `STORE_BACKEND` 설정에 맞는 사용자 저장소를 생성합니다
///
/// MongoDB는 시작 시점에 `ping`으로 연결을 확인하며, 실패하면 서버를 띄우지 않습니다.
async fn initialize_user_repository() -> io::Result<Arc<dyn UserRepository>> {
    match DatabaseConfig::backend() {
        StoreBackend::Memory => {
            warn!("⚠️ 인메모리 저장소 사용 중: 재시작하면 데이터가 사라집니다");
            Ok(Arc::new(MemoryUserRepository::new()))
        }
        StoreBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::from_env().await.map_err(|e| {
                error!("데이터베이스 연결 실패: {}", e);
                io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string())
            })?;

            Ok(Arc::new(MongoUserRepository::new(&database)))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// `CORS_ALLOWED_ORIGINS`에 나열된 Origin만 허용합니다.
/// SSE 클라이언트(`EventSource`)가 보내는 `Cache-Control` 헤더도 허용합니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::CACHE_CONTROL,
        ])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
