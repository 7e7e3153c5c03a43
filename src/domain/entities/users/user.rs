//! User Entity Implementation
//!
//! `user` 컬렉션에 저장되는 사용자 문서입니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `id`는 저장소가 최초 저장 시 할당하며 이후 변경되지 않습니다.
/// `None`이면 아직 저장되지 않은 사용자입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자명 ([`NameRule`](crate::domain::rules::NameRule) 통과 후에만 저장)
    pub name: String,
    /// 나이 (범위 제약 없음)
    pub age: i32,
}

impl User {
    /// 아직 저장되지 않은 새 사용자를 생성합니다.
    pub fn new(name: String, age: i32) -> Self {
        Self { id: None, name, age }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 수정 요청의 필드를 이 사용자에게 복사합니다.
    ///
    /// 복사 대상은 `name`, `age` 두 필드뿐이며 `id`는 그대로 유지됩니다.
    /// 새 필드가 추가되면 이 함수도 함께 갱신해야 합니다.
    pub fn copy_fields_from(&mut self, source: User) {
        let User { id: _, name, age } = source;
        self.name = name;
        self.age = age;
    }
}
