//! WebFlux 사용자 서비스
//!
//! 사용자(`id`, `name`, `age`) 레코드에 대한 CRUD와 나이 범위 조회를 제공하는
//! REST 서비스입니다. 목록 조회는 JSON 배열과 Server-Sent Events 두 가지
//! 형식으로 제공됩니다.
//!
//! # Features
//!
//! - **사용자 CRUD**: 생성, 단건 조회, 수정, 삭제
//! - **나이 범위 조회**: 임의 범위 및 20~45세 고정 범위 (양 끝 포함)
//! - **스트리밍**: 레코드당 SSE 이벤트 하나
//! - **입력 검증**: 바인딩 검증(`validator`) + 사용자명 정규식 규칙
//! - **MongoDB**: 사용자 데이터 영구 저장 (로컬 개발용 인메모리 저장소 선택 가능)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /user/*, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 배열 / SSE 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 이름 규칙, 수정/삭제 흐름
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserRepository 트레이트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB | Memory│ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use webflux_user_service::domain::rules::NameRule;
//! use webflux_user_service::repositories::users::MemoryUserRepository;
//! use webflux_user_service::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(MemoryUserRepository::new()), NameRule::default());
//! let user = service.create_user(request).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
