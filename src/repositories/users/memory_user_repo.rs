//! # 인메모리 사용자 리포지토리
//!
//! 프로세스 내부 맵에 사용자를 보관합니다. `STORE_BACKEND=memory`일 때와
//! 핸들러 테스트에서 사용됩니다. 재시작하면 데이터가 사라집니다.
//! 조회 결과는 최초 삽입 순서를 따릅니다.

use std::sync::{Arc, RwLock};
use async_trait::async_trait;
use futures_util::{stream, StreamExt};
use mongodb::bson::oid::ObjectId;
use crate::{
    config::StoreBackend,
    core::errors::{AppError, AppResult},
    domain::entities::users::User,
};
use super::user_repo::{UserRepository, UserStream};

/// 인메모리 사용자 리포지토리
#[derive(Debug, Default, Clone)]
pub struct MemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

fn poisoned<E>(_: E) -> AppError {
    AppError::InternalError("사용자 저장소 잠금이 손상되었습니다".to_string())
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 조건에 맞는 사용자의 스냅샷을 스트림으로 반환합니다.
    fn snapshot<F>(&self, predicate: F) -> AppResult<UserStream>
    where
        F: Fn(&User) -> bool,
    {
        let users: Vec<AppResult<User>> = self
            .users
            .read()
            .map_err(poisoned)?
            .iter()
            .filter(|user| predicate(user))
            .cloned()
            .map(Ok)
            .collect();

        Ok(stream::iter(users).boxed())
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    fn backend(&self) -> StoreBackend {
        StoreBackend::Memory
    }

    async fn find_all(&self) -> AppResult<UserStream> {
        self.snapshot(|_| true)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        Ok(self
            .users
            .read()
            .map_err(poisoned)?
            .iter()
            .find(|user| user.id == Some(object_id))
            .cloned())
    }

    async fn find_by_age_between(&self, start: i32, end: i32) -> AppResult<UserStream> {
        self.snapshot(|user| start <= user.age && user.age <= end)
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        let id = *user.id.get_or_insert_with(ObjectId::new);
        let mut users = self.users.write().map_err(poisoned)?;

        match users.iter_mut().find(|stored| stored.id == Some(id)) {
            Some(stored) => *stored = user.clone(),
            None => users.push(user.clone()),
        }

        Ok(user)
    }

    async fn delete(&self, user: &User) -> AppResult<()> {
        if let Some(id) = user.id {
            self.users
                .write()
                .map_err(poisoned)?
                .retain(|stored| stored.id != Some(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::TryStreamExt;

    async fn seeded(ages: &[i32]) -> MemoryUserRepository {
        let repo = MemoryUserRepository::new();
        for (i, age) in ages.iter().enumerate() {
            repo.save(User::new(format!("user{}", i), *age)).await.unwrap();
        }
        repo
    }

    async fn ages(stream: UserStream) -> Vec<i32> {
        stream.map_ok(|u| u.age).try_collect().await.unwrap()
    }

    #[actix_web::test]
    async fn test_save_assigns_id_and_find_by_id_returns_it() {
        let repo = MemoryUserRepository::new();

        let saved = repo.save(User::new("alice".to_string(), 30)).await.unwrap();
        let id = saved.id_string().unwrap();

        assert_eq!(repo.find_by_id(&id).await.unwrap(), Some(saved));
    }

    #[actix_web::test]
    async fn test_save_with_id_replaces_record() {
        let repo = MemoryUserRepository::new();
        let mut saved = repo.save(User::new("alice".to_string(), 30)).await.unwrap();

        saved.age = 31;
        repo.save(saved.clone()).await.unwrap();

        assert_eq!(ages(repo.find_all().await.unwrap()).await, vec![31]);
    }

    #[actix_web::test]
    async fn test_malformed_id_is_absent() {
        let repo = seeded(&[30]).await;

        assert_eq!(repo.find_by_id("not-an-object-id").await.unwrap(), None);
    }

    #[actix_web::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = seeded(&[50, 10, 30]).await;

        assert_eq!(ages(repo.find_all().await.unwrap()).await, vec![50, 10, 30]);
    }

    #[actix_web::test]
    async fn test_age_range_is_inclusive() {
        let repo = seeded(&[19, 20, 30, 45, 46]).await;

        assert_eq!(ages(repo.find_by_age_between(20, 45).await.unwrap()).await, vec![20, 30, 45]);
        assert_eq!(ages(repo.find_old_users().await.unwrap()).await, vec![20, 30, 45]);
    }

    #[actix_web::test]
    async fn test_inverted_range_is_empty() {
        let repo = seeded(&[20, 30]).await;

        assert!(ages(repo.find_by_age_between(45, 20).await.unwrap()).await.is_empty());
    }

    #[actix_web::test]
    async fn test_delete_is_idempotent() {
        let repo = MemoryUserRepository::new();
        let saved = repo.save(User::new("alice".to_string(), 30)).await.unwrap();

        repo.delete(&saved).await.unwrap();
        repo.delete(&saved).await.unwrap();

        assert!(ages(repo.find_all().await.unwrap()).await.is_empty());
    }
}
