//! # Application Error Handling System
//!
//! 사용자 서비스 전역에서 사용하는 에러 타입과 HTTP 응답 변환을 담당합니다.
//! Spring의 `@ControllerAdvice` + `@ExceptionHandler` 조합이 하던 일을
//! `actix_web::ResponseError` 구현 하나로 모았습니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 응답 본문 |
//! |----------|-------------|-----------|
//! | `BindingError` | 400 Bad Request | `\n필드:메시지` 줄 목록 (text/plain) |
//! | `ValidationError` | 400 Bad Request | `用户名不合法 필드:값` (text/plain) |
//! | `NotFound` | 404 Not Found | 없음 |
//! | `DatabaseError` | 500 Internal Server Error | `{"error": "..."}` |
//! | `InternalError` | 500 Internal Server Error | `{"error": "..."}` |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn find(service: &UserService, id: &str) -> AppResult<User> {
//!     service.find_user(id).await?.ok_or(AppError::NotFound)
//! }
//! ```

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::HttpResponse;
use log::error;
use thiserror::Error;
use validator::ValidationErrors;

/// 사용자명 검증 실패 응답에 붙는 고정 접두사 ("사용자명이 올바르지 않음")
pub const INVALID_NAME_PREFIX: &str = "用户名不合法 ";

/// 바인딩 실패 시 개별 필드 정보
///
/// 어떤 필드가 어떤 이유로 제약 조건을 통과하지 못했는지 담습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// 문제가 된 필드 이름 (`name`, `body`, `path` 등)
    pub field: String,
    /// 사람이 읽을 수 있는 실패 사유
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 서비스 경계에서 발생할 수 있는 실패의 닫힌 집합입니다.
/// 400 두 종류(바인딩/검증), 404, 그리고 나머지 모든 것(500)으로 나뉩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 요청 바인딩 실패
    ///
    /// 요청 본문이 선언된 제약 조건을 만족하지 않거나(`name` 누락 등),
    /// JSON 자체가 깨졌거나, 경로 변수를 파싱할 수 없을 때 발생합니다.
    #[error("Binding error: {}", binding_failure_body(.0))]
    BindingError(Vec<FieldError>),

    /// 도메인 검증 실패
    ///
    /// 사용자명 규칙([`NameRule`](crate::domain::rules::NameRule))에서만 발생합니다.
    #[error("Validation error: {field_name}:{field_value}")]
    ValidationError {
        field_name: String,
        field_value: String,
    },

    /// 리소스 없음
    #[error("Not found")]
    NotFound,

    /// 저장소(MongoDB) 연산 실패
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 그 외 예상하지 못한 실패
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 사용자명 검증 실패를 생성합니다.
    pub fn invalid_field(field_name: impl Into<String>, field_value: impl Into<String>) -> Self {
        AppError::ValidationError {
            field_name: field_name.into(),
            field_value: field_value.into(),
        }
    }
}

/// 바인딩 실패 목록을 응답 본문으로 변환합니다.
///
/// 빈 문자열에서 시작해 각 `field:message` 앞에 개행을 붙여 이어 붙이므로
/// 결과는 항상 개행으로 시작합니다. (`"\nname:must not be null"`)
pub fn binding_failure_body(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}:{}", e.field, e.message))
        .fold(String::new(), |acc, line| acc + "\n" + &line)
}

/// 검증 실패를 응답 본문으로 변환합니다.
pub fn validation_failure_body(field_name: &str, field_value: &str) -> String {
    format!("{}{}:{}", INVALID_NAME_PREFIX, field_name, field_value)
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BindingError(_) | AppError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 400 응답은 평문 본문, 404는 빈 본문, 500은 JSON 본문을 가집니다.
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::BindingError(errors) => HttpResponse::BadRequest()
                .insert_header(ContentType::plaintext())
                .body(binding_failure_body(errors)),
            AppError::ValidationError {
                field_name,
                field_value,
            } => HttpResponse::BadRequest()
                .insert_header(ContentType::plaintext())
                .body(validation_failure_body(field_name, field_value)),
            AppError::NotFound => HttpResponse::NotFound().finish(),
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                error!("요청 처리 실패: {}", self);
                HttpResponse::build(self.status_code()).json(serde_json::json!({
                    "error": self.to_string()
                }))
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut field_errors: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |err| {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    FieldError::new(field.clone(), message)
                })
            })
            .collect();

        // HashMap 순회 순서는 고정되지 않으므로 필드명 기준으로 정렬
        field_errors.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::BindingError(field_errors)
    }
}

impl From<JsonPayloadError> for AppError {
    fn from(err: JsonPayloadError) -> Self {
        AppError::BindingError(vec![FieldError::new("body", err.to_string())])
    }
}

impl From<PathError> for AppError {
    fn from(err: PathError) -> Self {
        AppError::BindingError(vec![FieldError::new("path", err.to_string())])
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let body = serde_json::to_string(&user).context("SSE 이벤트 직렬화 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
