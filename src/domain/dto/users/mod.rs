//! # User Data Transfer Objects Module
//!
//! 사용자 API의 요청/응답 데이터 구조를 정의합니다.
//!
//! ```text
//! users/
//! ├── request/
//! │   └── user_request.rs     # 생성/수정 공용 요청 본문
//! └── response/
//!     └── user_response.rs    # 단건/목록/SSE 공용 응답
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
