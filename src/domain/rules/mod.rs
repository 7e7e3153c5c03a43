//! 도메인 검증 규칙
//!
//! 바인딩 단계(`validator`)를 통과한 값에 적용되는 비즈니스 규칙입니다.
//! 실패는 [`AppError::ValidationError`](crate::core::errors::AppError::ValidationError)로 보고됩니다.

pub mod name_rule;

pub use name_rule::NameRule;
