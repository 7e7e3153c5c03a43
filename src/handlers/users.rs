//! # User HTTP Handlers
//!
//! `/user` 스코프 아래의 사용자 CRUD 및 나이 범위 조회 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 성공 | 실패 |
//! |--------|------|------|------|------|
//! | `GET` | `/user/get_all` | 전체 목록 (배열) | 200 | - |
//! | `GET` | `/user/stream/all` | 전체 목록 (SSE) | 200 | - |
//! | `POST` | `/user/save` | 생성 (`id` 무시) | 200 | 400 |
//! | `DELETE` | `/user/del/{id}` | 삭제 | 200 | 404 |
//! | `PUT` | `/user/update/{id}` | 수정 | 200 | 400, 404 |
//! | `GET` | `/user/find/{id}` | 단건 조회 | 200 | 404 |
//! | `GET` | `/user/age/{start}/{end}` | 나이 범위 (배열) | 200 | 400 |
//! | `GET` | `/user/stream/age/{start}/{end}` | 나이 범위 (SSE) | 200 | 400 |
//! | `GET` | `/user/old` | 20~45세 (배열) | 200 | - |
//! | `GET` | `/user/stream/old` | 20~45세 (SSE) | 200 | - |
//!
//! ## Spring WebFlux와의 비교
//!
//! ```java
//! @GetMapping(value = "/stream/all", produces = MediaType.TEXT_EVENT_STREAM_VALUE)
//! public Flux<User> streamGetAll() {
//!     return this.repository.findAll();
//! }
//! ```
//!
//! Rust에서는 저장소가 돌려준 [`UserStream`]을 그대로 SSE 본문으로 흘려보냅니다.
//!
//! ```rust,ignore
//! #[get("/stream/all")]
//! pub async fn stream_all_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
//!     Ok(event_stream(service.list_all().await?))
//! }
//! ```
//!
//! ## SSE 프레이밍
//!
//! 레코드 하나당 이벤트 하나를 `data:<json>\n\n` 형식으로 보냅니다.
//! 스트림 중간에 저장소 에러가 나면 그 시점에서 연결이 종료됩니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::web::Bytes;
use futures_util::{Stream, StreamExt, TryStreamExt};
use validator::Validate;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::dto::users::{request::UserRequest, response::UserResponse};
use crate::repositories::users::UserStream;
use crate::services::users::UserService;


/// 스트림을 모두 모아 JSON 배열 응답으로 만듭니다.
async fn json_array(users: UserStream) -> Result<HttpResponse, AppError> {
    let users: Vec<UserResponse> = users.map_ok(UserResponse::from).try_collect().await?;
    Ok(HttpResponse::Ok().json(users))
}

/// SSE 이벤트 한 건
fn sse_event(user: &UserResponse) -> AppResult<Bytes> {
    let json = serde_json::to_string(user).context("SSE 이벤트 직렬화 실패")?;
    Ok(Bytes::from(format!("data:{}\n\n", json)))
}

fn sse_frames(users: UserStream) -> impl Stream<Item = AppResult<Bytes>> {
    users.map(|item| item.and_then(|user| sse_event(&UserResponse::from(user))))
}

/// 스트림을 `text/event-stream` 응답으로 만듭니다.
fn event_stream(users: UserStream) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header(CacheControl(vec![CacheDirective::NoCache]))
        .streaming(sse_frames(users))
}

/// 전체 사용자 목록 (배열)
#[get("/get_all")]
pub async fn get_all_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    json_array(service.list_all().await?).await
}

/// 전체 사용자 목록 (SSE)
#[get("/stream/all")]
pub async fn stream_all_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    Ok(event_stream(service.list_all().await?))
}

/// 사용자 생성 핸들러
///
/// 본문의 `id`는 무시되고 항상 새 사용자로 저장됩니다.
///
/// # Errors
///
/// * 400 - `name` 누락/공백(바인딩 에러) 또는 이름 규칙 위반(검증 에러)
///
/// ```bash
/// curl -X POST http://localhost:8080/user/save \
///   -H "Content-Type: application/json" \
///   -d '{"name":"alice","age":30}'
/// ```
#[post("/save")]
pub async fn create_user(
    payload: web::Json<UserRequest>,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user = service.create_user(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// 사용자 삭제 핸들러
///
/// 대상이 없으면 404. 같은 id로 두 번 호출하면 두 번째는 항상 404입니다.
#[delete("/del/{id}")]
pub async fn delete_user(
    id: web::Path<String>,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    if service.delete_user(&id).await? {
        Ok(HttpResponse::Ok().finish())
    } else {
        Err(AppError::NotFound)
    }
}

/// 사용자 수정 핸들러
///
/// `name`, `age`를 본문 값으로 덮어쓰고 `id`는 경로의 값을 유지합니다.
/// 이름 검사는 조회보다 먼저 수행되므로, 없는 id라도 이름이 잘못되면 400입니다.
#[put("/update/{id}")]
pub async fn update_user(
    id: web::Path<String>,
    payload: web::Json<UserRequest>,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user = service
        .update_user(&id, payload.into_inner())
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// 단건 조회 핸들러
#[get("/find/{id}")]
pub async fn find_user(
    id: web::Path<String>,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let user = service.find_user(&id).await?.ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// 나이 범위 조회 (양 끝 포함, 배열)
#[get("/age/{start}/{end}")]
pub async fn find_by_age(
    range: web::Path<(i32, i32)>,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let (start, end) = range.into_inner();
    json_array(service.find_by_age(start, end).await?).await
}

/// 나이 범위 조회 (양 끝 포함, SSE)
#[get("/stream/age/{start}/{end}")]
pub async fn stream_by_age(
    range: web::Path<(i32, i32)>,
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let (start, end) = range.into_inner();
    Ok(event_stream(service.find_by_age(start, end).await?))
}

/// 20~45세 사용자 (배열)
#[get("/old")]
pub async fn find_old_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    json_array(service.find_old_users().await?).await
}

/// 20~45세 사용자 (SSE)
#[get("/stream/old")]
pub async fn stream_old_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    Ok(event_stream(service.find_old_users().await?))
}
