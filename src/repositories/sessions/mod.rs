//! 세션 저장소
//!
//! 세션 레코드와 일회용 OAuth state를 TTL과 함께 보관합니다.
//!
//! - [`RedisSessionStore`] - 운영 환경 기본값 (`SESSION_STORE=redis`)
//! - [`MemorySessionStore`] - 단일 프로세스 개발 환경 (`SESSION_STORE=memory`)
//!
//! 세션 ID만 알면 세션을 조회할 수 있으므로 ID는 추측 불가능한 UUID v4를 사용합니다.

pub mod session_repo;
pub mod memory_store;

use async_trait::async_trait;
use crate::config::AuthProvider;
use crate::domain::models::auth::session::Session;
use crate::errors::errors::AppError;

pub use session_repo::RedisSessionStore;
pub use memory_store::MemorySessionStore;

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn save(&self, session: &Session, ttl_seconds: u64) -> Result<(), AppError>;

    /// 만료되었거나 없는 세션은 `None`
    async fn load(&self, session_id: &str) -> Result<Option<Session>, AppError>;

    async fn remove(&self, session_id: &str) -> Result<(), AppError>;

    async fn save_oauth_state(
        &self,
        state: &str,
        provider: AuthProvider,
        ttl_seconds: u64,
    ) -> Result<(), AppError>;

    /// state를 소비합니다. 같은 state로 두 번째 호출하면 `None`.
    async fn take_oauth_state(&self, state: &str) -> Result<Option<AuthProvider>, AppError>;
}
