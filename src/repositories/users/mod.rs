//! 사용자 저장소
//!
//! [`UserStore`]는 인증 게이트웨이와 시크릿 서비스가 사용하는 사용자 레코드 저장소
//! 인터페이스이며, [`UserRepository`](user_repo::UserRepository)가 MongoDB 구현체입니다.
//!
//! 트랜잭션은 사용하지 않습니다. 같은 사용자의 동시 시크릿 제출은
//! 마지막 쓰기가 남습니다.

pub mod user_repo;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use crate::config::AuthProvider;
use crate::domain::entities::users::user::User;
use crate::errors::errors::AppError;

pub use user_repo::UserRepository;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// 사용자명으로 한 건 조회. 레거시 전략에서 중복 레코드가 있으면 그중 하나를 반환합니다.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    async fn find_by_provider_id(
        &self,
        provider: AuthProvider,
        provider_user_id: &str,
    ) -> Result<Option<User>, AppError>;

    /// 새 레코드를 저장하고 ID가 채워진 레코드를 반환합니다.
    ///
    /// 유니크 인덱스 위반은 `AppError::ConflictError`입니다.
    async fn insert(&self, user: User) -> Result<User, AppError>;

    /// 시크릿을 덮어씁니다. 레코드가 없으면 `false`.
    async fn update_secret(&self, id: &str, secret: &str) -> Result<bool, AppError>;

    /// 시크릿이 있는 모든 레코드의 시크릿. 순서와 페이지네이션은 보장하지 않습니다.
    async fn find_secrets(&self) -> Result<Vec<String>, AppError>;
}
