//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`UserRepository`](users::UserRepository) 트레이트에만 의존하며,
//! 실행 시점에 `STORE_BACKEND` 설정에 따라 구현체가 선택됩니다.
//!
//! | 구현체 | 저장소 | 용도 |
//! |--------|--------|------|
//! | [`MongoUserRepository`](users::MongoUserRepository) | MongoDB `user` 컬렉션 | 운영 |
//! | [`MemoryUserRepository`](users::MemoryUserRepository) | 프로세스 내부 맵 | 로컬 개발, 테스트 |
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{UserRepository, MongoUserRepository};
//!
//! let repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(&database));
//! let user = repo.find_by_id("64b7f3a2c9e77b1a2c3d4e5f").await?;
//! ```

pub mod users;
