//! # 사용자 리포지토리 트레이트
//!
//! 사용자 레코드 저장소가 제공해야 하는 연산을 정의합니다.
//! 여러 건을 반환하는 조회는 전체를 모으지 않고 [`UserStream`]으로 흘려보내며,
//! 핸들러가 배열 응답으로 모을지 SSE로 흘려보낼지 결정합니다.
//!
//! ## 에러 처리
//!
//! - 저장소 접근 실패는 [`AppError::DatabaseError`](crate::core::errors::AppError::DatabaseError)
//! - 형식이 잘못된 ID는 에러가 아니라 "없음"으로 취급합니다.

use async_trait::async_trait;
use futures_util::stream::BoxStream;
use crate::config::StoreBackend;
use crate::core::errors::AppResult;
use crate::domain::entities::users::User;

/// 사용자 레코드 스트림
///
/// 각 항목은 개별적으로 실패할 수 있으며, 스트림 중간의 에러는
/// 이미 전달된 항목에 영향을 주지 않습니다.
pub type UserStream = BoxStream<'static, AppResult<User>>;

/// "old users" 고정 범위 하한 (포함)
pub const OLD_USER_MIN_AGE: i32 = 20;
/// "old users" 고정 범위 상한 (포함)
pub const OLD_USER_MAX_AGE: i32 = 45;

/// 사용자 저장소
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 구현체가 사용하는 저장소 종류
    fn backend(&self) -> StoreBackend;

    /// 모든 사용자를 저장소 순서대로 조회합니다.
    async fn find_all(&self) -> AppResult<UserStream>;

    /// ID로 사용자를 조회합니다.
    ///
    /// * `Ok(None)` - 해당 ID가 없거나 ID 형식이 올바르지 않은 경우
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// `start <= age <= end`인 사용자를 조회합니다.
    ///
    /// `start > end`이면 빈 스트림을 반환합니다.
    async fn find_by_age_between(&self, start: i32, end: i32) -> AppResult<UserStream>;

    /// 사용자를 저장합니다.
    ///
    /// `id`가 없으면 새 ID를 할당해 삽입하고, 있으면 해당 레코드를 교체합니다.
    /// 저장된 사용자(할당된 ID 포함)를 반환합니다.
    async fn save(&self, user: User) -> AppResult<User>;

    /// 사용자를 삭제합니다. 이미 없는 레코드여도 성공으로 처리합니다.
    async fn delete(&self, user: &User) -> AppResult<()>;

    /// 나이가 [`OLD_USER_MIN_AGE`]..=[`OLD_USER_MAX_AGE`]인 사용자를 조회합니다.
    async fn find_old_users(&self) -> AppResult<UserStream> {
        self.find_by_age_between(OLD_USER_MIN_AGE, OLD_USER_MAX_AGE).await
    }
}
