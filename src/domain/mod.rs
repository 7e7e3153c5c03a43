//! # Domain Layer
//!
//! 사용자 서비스의 도메인 계층입니다. HTTP나 저장소 세부사항과 무관한
//! 데이터 구조와 규칙을 담습니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← MongoDB 문서와 1:1 대응되는 엔티티
//! ├── dto/          ← HTTP 요청/응답 전송 객체
//! └── rules/        ← 사용자명 검증 규칙
//! ```
//!
//! ## 데이터 흐름
//!
//! ```text
//! JSON 요청 → UserRequest (바인딩 검증) → User 엔티티 (NameRule 검증)
//!          → UserRepository → User 엔티티 → UserResponse → JSON / SSE
//! ```

pub mod entities;
pub mod dto;
pub mod rules;

pub use entities::users::User;
pub use dto::users::{UserRequest, UserResponse};
pub use rules::NameRule;
