//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 엔티티들을 정의합니다.
//! Spring Data의 `@Document` 클래스와 같은 역할입니다.
//!
//! ### MongoDB 통합
//! - **BSON 직렬화**: `serde`를 통한 자동 변환
//! - **ObjectId 지원**: MongoDB의 `_id` 필드와 매핑, 최초 저장 시 할당
//!
//! 엔티티는 HTTP 응답으로 직접 노출하지 않습니다. `ObjectId`는 JSON으로
//! 직렬화하면 `{"$oid": ...}` 형태가 되므로 응답은 항상
//! [`UserResponse`](crate::domain::dto::users::response::UserResponse)를 거칩니다.

pub mod users;

pub use users::*;
