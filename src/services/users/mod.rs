//! 사용자 관리 서비스 모듈
//!
//! 사용자 생성, 수정, 삭제, 조회와 나이 범위 질의를 제공합니다.

pub mod user_service;

pub use user_service::UserService;
