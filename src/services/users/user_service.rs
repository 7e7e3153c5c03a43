//! # 사용자 관리 서비스 구현
//!
//! Spring의 `@Service`에 해당하는 계층으로, 요청 DTO를 엔티티로 바꾸고
//! 이름 규칙을 적용한 뒤 저장소에 위임합니다.
//!
//! ```text
//! Handler ──▶ UserService ──▶ NameRule (동기, 순수)
//!                  │
//!                  ▼
//!          Arc<dyn UserRepository> ──▶ MongoDB | Memory
//! ```
//!
//! 저장소 에러는 가공하지 않고 그대로 전파합니다.

use std::sync::Arc;
use log::{debug, info};
use crate::{
    core::errors::AppResult,
    domain::{
        dto::users::request::UserRequest,
        entities::users::User,
        rules::NameRule,
    },
    repositories::users::{UserRepository, UserStream},
};

/// 사용자 관리 비즈니스 로직 서비스
///
/// 상태를 갖지 않으며 `Clone`이 가볍습니다. 워커마다 복제해 사용해도 모두
/// 같은 저장소를 바라봅니다.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
    name_rule: NameRule,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>, name_rule: NameRule) -> Self {
        Self { repo, name_rule }
    }

    /// 헬스체크에 노출할 저장소 이름
    pub fn backend_name(&self) -> &'static str {
        self.repo.backend().as_str()
    }

    /// 모든 사용자 스트림
    pub async fn list_all(&self) -> AppResult<UserStream> {
        self.repo.find_all().await
    }

    /// 새 사용자를 생성합니다.
    ///
    /// 요청에 포함된 `id`는 무시되며 항상 삽입으로 처리됩니다.
    /// 이름이 규칙에 맞지 않으면 저장소를 호출하지 않고 검증 에러를 반환합니다.
    pub async fn create_user(&self, request: UserRequest) -> AppResult<User> {
        let user = User::from(request);
        self.name_rule.check(&user.name)?;

        let saved = self.repo.save(user).await?;
        info!("사용자 생성: {:?}", saved.id_string());
        Ok(saved)
    }

    /// 기존 사용자를 수정합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 수정된 사용자
    /// * `Ok(None)` - 해당 ID의 사용자가 없는 경우 (저장소 변경 없음)
    /// * `Err(AppError::ValidationError)` - 이름 규칙 위반 (조회 전에 검사)
    pub async fn update_user(&self, id: &str, request: UserRequest) -> AppResult<Option<User>> {
        let changes = User::from(request);
        self.name_rule.check(&changes.name)?;

        let Some(mut stored) = self.repo.find_by_id(id).await? else {
            debug!("수정 대상 사용자 없음: {}", id);
            return Ok(None);
        };

        stored.copy_fields_from(changes);
        let saved = self.repo.save(stored).await?;
        info!("사용자 수정: {}", id);
        Ok(Some(saved))
    }

    /// 사용자를 삭제합니다. 삭제했으면 `true`, 대상이 없으면 `false`.
    pub async fn delete_user(&self, id: &str) -> AppResult<bool> {
        let Some(stored) = self.repo.find_by_id(id).await? else {
            debug!("삭제 대상 사용자 없음: {}", id);
            return Ok(false);
        };

        self.repo.delete(&stored).await?;
        info!("사용자 삭제: {}", id);
        Ok(true)
    }

    pub async fn find_user(&self, id: &str) -> AppResult<Option<User>> {
        self.repo.find_by_id(id).await
    }

    /// `start <= age <= end`인 사용자 스트림
    pub async fn find_by_age(&self, start: i32, end: i32) -> AppResult<UserStream> {
        self.repo.find_by_age_between(start, end).await
    }

    /// 나이 20~45세 사용자 스트림
    pub async fn find_old_users(&self) -> AppResult<UserStream> {
        self.repo.find_old_users().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures_util::TryStreamExt;
    use crate::core::errors::AppError;
    use crate::repositories::users::MemoryUserRepository;

    fn service() -> (UserService, Arc<MemoryUserRepository>) {
        let repo = Arc::new(MemoryUserRepository::new());
        (UserService::new(repo.clone(), NameRule::default()), repo)
    }

    fn request(name: &str, age: i32) -> UserRequest {
        UserRequest {
            id: None,
            name: Some(name.to_string()),
            age,
        }
    }

    #[actix_web::test]
    async fn test_create_ignores_client_id() {
        let (service, _) = service();
        let supplied = "64b7f3a2c9e77b1a2c3d4e5f";

        let mut req = request("alice", 30);
        req.id = Some(supplied.to_string());
        let created = service.create_user(req).await.unwrap();

        let id = created.id_string().unwrap();
        assert!(!id.is_empty());
        assert_ne!(id, supplied);
    }

    #[actix_web::test]
    async fn test_create_with_invalid_name_does_not_persist() {
        let (service, repo) = service();

        let result = service.create_user(request("alice!", 30)).await;

        assert!(matches!(result, Err(AppError::ValidationError { .. })));
        let all: Vec<User> = repo.find_all().await.unwrap().try_collect().await.unwrap();
        assert!(all.is_empty());
    }

    #[actix_web::test]
    async fn test_update_keeps_id_and_overwrites_fields() {
        let (service, _) = service();
        let created = service.create_user(request("alice", 30)).await.unwrap();
        let id = created.id_string().unwrap();

        let updated = service
            .update_user(&id, request("bob", 41))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "bob");
        assert_eq!(updated.age, 41);
        assert_eq!(service.find_user(&id).await.unwrap(), Some(updated));
    }

    #[actix_web::test]
    async fn test_update_validates_name_before_lookup() {
        let (service, _) = service();

        let result = service.update_user("missing", request("bad name", 30)).await;

        assert!(matches!(result, Err(AppError::ValidationError { .. })));
    }

    #[actix_web::test]
    async fn test_update_missing_user_returns_none() {
        let (service, _) = service();

        let result = service
            .update_user("64b7f3a2c9e77b1a2c3d4e5f", request("bob", 41))
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[actix_web::test]
    async fn test_delete_reports_presence() {
        let (service, _) = service();
        let id = service
            .create_user(request("alice", 30))
            .await
            .unwrap()
            .id_string()
            .unwrap();

        assert!(service.delete_user(&id).await.unwrap());
        assert!(!service.delete_user(&id).await.unwrap());
        assert!(!service.delete_user("garbage").await.unwrap());
    }

    struct FailingRepository;

    #[async_trait]
    impl UserRepository for FailingRepository {
        fn backend(&self) -> crate::config::StoreBackend {
            crate::config::StoreBackend::MongoDb
        }

        async fn find_all(&self) -> AppResult<UserStream> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }

        async fn find_by_id(&self, _id: &str) -> AppResult<Option<User>> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }

        async fn find_by_age_between(&self, _start: i32, _end: i32) -> AppResult<UserStream> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }

        async fn save(&self, _user: User) -> AppResult<User> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }

        async fn delete(&self, _user: &User) -> AppResult<()> {
            Err(AppError::DatabaseError("connection refused".to_string()))
        }
    }

    #[actix_web::test]
    async fn test_repository_errors_propagate() {
        let service = UserService::new(Arc::new(FailingRepository), NameRule::default());

        assert!(matches!(
            service.create_user(request("alice", 30)).await,
            Err(AppError::DatabaseError(_))
        ));
        assert!(matches!(
            service.delete_user("64b7f3a2c9e77b1a2c3d4e5f").await,
            Err(AppError::DatabaseError(_))
        ));
        assert!(matches!(service.find_old_users().await, Err(AppError::DatabaseError(_))));
    }
}
