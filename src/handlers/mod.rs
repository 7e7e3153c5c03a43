//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring WebFlux의 `@RestController`와 같은 역할을 하며,
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, curl, EventSource)
//! └─────────────────────┬───────────────────────┘
//!                       │ JSON / text/event-stream
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)                           ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   UserService                                  ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   UserRepository (MongoDB | Memory)            ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 응답 규칙
//!
//! - 목록 조회는 JSON 배열 또는 SSE 스트림 두 가지 엔드포인트로 제공됩니다.
//!   두 엔드포인트는 같은 질의를 사용하며 응답 형식만 다릅니다.
//! - 단건 조회/수정/삭제 대상이 없으면 본문 없는 404를 반환합니다.
//! - 에러 변환은 [`AppError`](crate::core::errors::AppError)의 `ResponseError` 구현이 담당합니다.

pub mod users;
