//! Users Entity Module
//!
//! 사용자 도메인의 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::new("alice".to_string(), 30);
//! assert!(user.id.is_none()); // 저장 전에는 id 없음
//! ```

pub mod user;

pub use user::User;
