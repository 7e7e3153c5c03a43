//! 사용자 생성/수정 요청 DTO
//!
//! `POST /user/save`와 `PUT /user/update/{id}`가 같은 본문을 사용합니다.
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::users::User;

/// 사용자 생성/수정 요청 본문
///
/// `id`는 역직렬화만 허용하고 어디에도 사용하지 않습니다.
/// 생성 시에는 버려지고(항상 새 문서로 삽입), 수정 시에는 경로의 id가 우선합니다.
///
/// ```json
/// { "name": "alice", "age": 30 }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// 필수. 누락/`null`이면 바인딩 에러
    ///
    /// 빈 문자열이나 공백은 여기서 거르지 않고 [`NameRule`](crate::domain::rules::NameRule)이 판단합니다.
    #[serde(default)]
    #[validate(required(message = "must not be null"))]
    pub name: Option<String>,

    /// 누락 시 0
    #[serde(default)]
    pub age: i32,
}

impl From<UserRequest> for User {
    /// 요청의 `id`는 버립니다. 저장 전 엔티티는 항상 id가 없습니다.
    fn from(request: UserRequest) -> Self {
        User::new(request.name.unwrap_or_default(), request.age)
    }
}
