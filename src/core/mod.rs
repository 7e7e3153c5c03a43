//! # Core Module
//!
//! 서비스 전역에서 공유하는 기반 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 바인딩/검증/404/내부 오류의 닫힌 집합
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현이 유일한 에러 → 응답 변환 지점
//! - **자동 변환**: `validator`, actix 추출기, mongodb 에러를 `AppError`로 변환
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 서비스 |
//! |--------|-----------|
//! | `@ControllerAdvice` | `impl ResponseError for AppError` |
//! | `WebExchangeBindException` | `AppError::BindingError` |
//! | 커스텀 `CheckException` | `AppError::ValidationError` |
//! | `defaultIfEmpty(404)` | `AppError::NotFound` |

pub mod errors;

pub use errors::*;
