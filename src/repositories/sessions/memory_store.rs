//! 프로세스 메모리 세션 저장소
//!
//! 재시작하면 모든 세션이 사라지며 여러 워커 프로세스 간에 공유되지 않습니다.
//! 항목마다 저장 시점의 TTL로 만료 시각을 기록하고, 쓰기마다 만료된 항목을 정리합니다.
//! 버려진 OAuth state나 로그아웃하지 않은 세션도 TTL이 지나면 사라집니다.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;
use async_trait::async_trait;
use chrono::Utc;
use crate::config::AuthProvider;
use crate::domain::models::auth::session::Session;
use crate::errors::errors::AppError;
use super::SessionStore;

#[derive(Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, (Session, i64)>>,
    states: RwLock<HashMap<String, (AuthProvider, i64)>>,
    failing: AtomicBool,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 이후 모든 호출을 `SessionStoreError`로 실패시킵니다. 장애 상황 재현용.
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn session_count(&self) -> usize {
        self.sessions.read().map(|s| s.len()).unwrap_or(0)
    }

    pub fn state_count(&self) -> usize {
        self.states.read().map(|s| s.len()).unwrap_or(0)
    }

    fn check(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::SessionStoreError("session store unavailable".to_string()));
        }
        Ok(())
    }

    fn lock_error() -> AppError {
        AppError::SessionStoreError("lock poisoned".to_string())
    }
}

fn expires_at(now: i64, ttl_seconds: u64) -> i64 {
    now.saturating_add(i64::try_from(ttl_seconds).unwrap_or(i64::MAX))
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn save(&self, session: &Session, ttl_seconds: u64) -> Result<(), AppError> {
        self.check()?;
        let now = Utc::now().timestamp();
        let deadline = session.expires_at.min(expires_at(now, ttl_seconds));

        let mut sessions = self.sessions.write().map_err(|_| Self::lock_error())?;
        sessions.retain(|_, (_, until)| *until > now);
        sessions.insert(session.id.clone(), (session.clone(), deadline));
        Ok(())
    }

    async fn load(&self, session_id: &str) -> Result<Option<Session>, AppError> {
        self.check()?;
        let now = Utc::now().timestamp();
        let mut sessions = self.sessions.write().map_err(|_| Self::lock_error())?;

        match sessions.get(session_id) {
            Some((_, until)) if *until <= now => {
                sessions.remove(session_id);
                Ok(None)
            }
            other => Ok(other.map(|(session, _)| session.clone())),
        }
    }

    async fn remove(&self, session_id: &str) -> Result<(), AppError> {
        self.check()?;
        let mut sessions = self.sessions.write().map_err(|_| Self::lock_error())?;
        sessions.remove(session_id);
        Ok(())
    }

    async fn save_oauth_state(
        &self,
        state: &str,
        provider: AuthProvider,
        ttl_seconds: u64,
    ) -> Result<(), AppError> {
        self.check()?;
        let now = Utc::now().timestamp();
        let mut states = self.states.write().map_err(|_| Self::lock_error())?;
        states.retain(|_, (_, until)| *until > now);
        states.insert(state.to_string(), (provider, expires_at(now, ttl_seconds)));
        Ok(())
    }

    async fn take_oauth_state(&self, state: &str) -> Result<Option<AuthProvider>, AppError> {
        self.check()?;
        let mut states = self.states.write().map_err(|_| Self::lock_error())?;

        Ok(states
            .remove(state)
            .filter(|(_, expires_at)| *expires_at > Utc::now().timestamp())
            .map(|(provider, _)| provider))
    }
}
