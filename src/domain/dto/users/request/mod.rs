//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! 바인딩 단계 검증을 수행합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (실패 시 `body` 필드 바인딩 에러)
//! 2. **형식 검증**: `validator` 제약 조건 (실패 시 필드별 바인딩 에러)
//! 3. **도메인 검증**: 사용자명 패턴 (서비스 계층의 `NameRule`)

pub mod user_request;

pub use user_request::UserRequest;
