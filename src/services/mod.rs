//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 핸들러는 [`UserService`](users::UserService)만 호출하며, 서비스는
//! 이름 규칙 검사와 저장소 호출 순서를 책임집니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(MemoryUserRepository::new()), NameRule::default());
//! let created = service.create_user(request).await?;
//! ```

pub mod users;
