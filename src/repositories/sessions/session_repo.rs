//! Redis 세션 저장소
//!
//! ```text
//! session:{id}          → Session (JSON), EX = 세션 TTL
//! oauth_state:{state}   → AuthProvider (JSON), EX = OAuth state TTL, GETDEL로 소비
//! ```

use async_trait::async_trait;
use crate::caching::redis::RedisClient;
use crate::config::AuthProvider;
use crate::domain::models::auth::session::Session;
use crate::errors::errors::AppError;
use super::SessionStore;

pub struct RedisSessionStore {
    redis: RedisClient,
}

impl RedisSessionStore {
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }

    fn session_key(session_id: &str) -> String {
        format!("session:{}", session_id)
    }

    fn state_key(state: &str) -> String {
        format!("oauth_state:{}", state)
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn save(&self, session: &Session, ttl_seconds: u64) -> Result<(), AppError> {
        self.redis
            .set_with_expiry(&Self::session_key(&session.id), session, ttl_seconds)
            .await?;
        Ok(())
    }

    async fn load(&self, session_id: &str) -> Result<Option<Session>, AppError> {
        let session: Option<Session> = self.redis.get(&Self::session_key(session_id)).await?;

        // Redis TTL과 레코드의 만료 시각 중 먼저 도래한 쪽을 따름
        Ok(session.filter(|s| !s.is_expired()))
    }

    async fn remove(&self, session_id: &str) -> Result<(), AppError> {
        self.redis.del(&Self::session_key(session_id)).await?;
        Ok(())
    }

    async fn save_oauth_state(
        &self,
        state: &str,
        provider: AuthProvider,
        ttl_seconds: u64,
    ) -> Result<(), AppError> {
        self.redis
            .set_with_expiry(&Self::state_key(state), &provider, ttl_seconds)
            .await?;
        Ok(())
    }

    async fn take_oauth_state(&self, state: &str) -> Result<Option<AuthProvider>, AppError> {
        Ok(self.redis.take(&Self::state_key(state)).await?)
    }
}
