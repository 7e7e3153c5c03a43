//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`] 트레이트와 MongoDB / 인메모리 구현체를 제공합니다.

pub mod user_repo;
pub mod mongo_user_repo;
pub mod memory_user_repo;

pub use user_repo::{UserRepository, UserStream, OLD_USER_MIN_AGE, OLD_USER_MAX_AGE};
pub use mongo_user_repo::MongoUserRepository;
pub use memory_user_repo::MemoryUserRepository;
