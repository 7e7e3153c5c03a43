//! API 라우트 설정 모듈
//!
//! 사용자 엔드포인트를 `/user` 스코프에 묶고 헬스체크를 등록합니다.
//! 추출기(JSON 본문, 경로 변수) 실패를 [`AppError::BindingError`]로 바꾸는
//! 설정도 여기서 함께 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(user_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{error, web, HttpRequest, HttpResponse};
use serde_json::json;
use crate::core::errors::AppError;
use crate::handlers;
use crate::services::users::UserService;

/// 모든 라우트를 설정합니다
///
/// `UserService`는 호출 측에서 `web::Data`로 등록해야 합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).app_data(path_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// JSON 본문 역직렬화 실패를 바인딩 에러로 변환
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req: &HttpRequest| error::Error::from(AppError::from(err)))
}

/// 경로 변수 파싱 실패(`/user/age/abc/10` 등)를 바인딩 에러로 변환
fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req: &HttpRequest| error::Error::from(AppError::from(err)))
}

/// 사용자 관련 라우트를 설정합니다
///
/// ```bash
/// curl http://localhost:8080/user/get_all
/// curl -N http://localhost:8080/user/stream/age/20/30
/// curl -X PUT http://localhost:8080/user/update/64b7f3a2c9e77b1a2c3d4e5f \
///   -H "Content-Type: application/json" \
///   -d '{"name":"bob","age":41}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user")
            .service(handlers::users::get_all_users)
            .service(handlers::users::stream_all_users)
            .service(handlers::users::create_user)
            .service(handlers::users::delete_user)
            .service(handlers::users::update_user)
            .service(handlers::users::find_user)
            .service(handlers::users::find_by_age)
            .service(handlers::users::stream_by_age)
            .service(handlers::users::find_old_users)
            .service(handlers::users::stream_old_users)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "webflux_user_service",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "streaming": "Server-Sent Events"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check(service: web::Data<UserService>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": service.backend_name(),
            "streaming": "Server-Sent Events"
        }
    }))
}
