//! # MongoDB 사용자 리포지토리
//!
//! `user` 컬렉션에 사용자 문서를 저장합니다.
//!
//! | 연산 | MongoDB 명령 |
//! |------|-------------|
//! | `find_all` | `find({})` |
//! | `find_by_id` | `find_one({_id})` |
//! | `find_by_age_between` | `find({age: {$gte, $lte}})` |
//! | `save` (신규) | `insert_one` |
//! | `save` (기존) | `replace_one({_id}, upsert)` |
//! | `delete` | `delete_one({_id})` |

use async_trait::async_trait;
use futures_util::{StreamExt, TryStreamExt};
use log::{debug, info};
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    Collection,
};
use crate::{
    config::{DatabaseConfig, StoreBackend},
    core::errors::{AppError, AppResult},
    db::Database,
    domain::entities::users::User,
};
use super::user_repo::{UserRepository, UserStream};

/// MongoDB 기반 사용자 리포지토리
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        info!(
            "사용자 컬렉션: {}.{}",
            db.database_name(),
            DatabaseConfig::USER_COLLECTION
        );

        Self {
            collection: db.collection::<User>(DatabaseConfig::USER_COLLECTION),
        }
    }

    async fn find_stream(&self, filter: Document) -> AppResult<UserStream> {
        let cursor = self
            .collection
            .find(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(cursor
            .map_err(|e| AppError::DatabaseError(e.to_string()))
            .boxed())
    }
}

/// 나이 범위 필터 (양 끝 포함)
fn age_between_filter(start: i32, end: i32) -> Document {
    doc! { "age": { "$gte": start, "$lte": end } }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    fn backend(&self) -> StoreBackend {
        StoreBackend::MongoDb
    }

    async fn find_all(&self) -> AppResult<UserStream> {
        self.find_stream(doc! {}).await
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            debug!("ObjectId 형식이 아닌 ID 조회: {}", id);
            return Ok(None);
        };

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_age_between(&self, start: i32, end: i32) -> AppResult<UserStream> {
        if start > end {
            return Ok(futures_util::stream::empty().boxed());
        }

        self.find_stream(age_between_filter(start, end)).await
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        match user.id {
            None => {
                let result = self
                    .collection
                    .insert_one(&user)
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;

                let id = result.inserted_id.as_object_id().ok_or_else(|| {
                    AppError::InternalError("삽입된 문서의 ID가 ObjectId가 아닙니다".to_string())
                })?;

                user.id = Some(id);
            }
            Some(id) => {
                self.collection
                    .replace_one(doc! { "_id": id }, &user)
                    .upsert(true)
                    .await
                    .map_err(|e| AppError::DatabaseError(e.to_string()))?;
            }
        }

        Ok(user)
    }

    async fn delete(&self, user: &User) -> AppResult<()> {
        let Some(id) = user.id else {
            return Ok(());
        };

        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        debug!("사용자 삭제: {} (deleted_count={})", id, result.deleted_count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_between_filter_is_inclusive() {
        let filter = age_between_filter(20, 45);
        let age = filter.get_document("age").unwrap();

        assert_eq!(age.get_i32("$gte").unwrap(), 20);
        assert_eq!(age.get_i32("$lte").unwrap(), 45);
        assert_eq!(age.len(), 2);
    }
}
