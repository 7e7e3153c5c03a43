//! # 사용자 관련 응답 DTO 모듈
//!
//! 엔티티를 클라이언트에게 노출할 JSON 형태로 변환합니다.
//! 배열 응답과 SSE 이벤트 모두 같은 [`UserResponse`]를 사용합니다.

pub mod user_response;

pub use user_response::UserResponse;
