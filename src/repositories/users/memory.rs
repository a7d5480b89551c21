//! 테스트용 인메모리 사용자 저장소.
//!
//! MongoDB의 유니크 sparse 인덱스와 같은 규칙으로 프로바이더 ID 중복을 거부합니다.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};
use crate::config::AuthProvider;
use crate::domain::entities::users::user::User;
use crate::errors::errors::AppError;
use super::UserStore;

#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
    failing: AtomicBool,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 이후 모든 호출이 `DatabaseError`로 실패하게 합니다.
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }

    pub fn all(&self) -> Vec<User> {
        self.users.read().map(|users| users.clone()).unwrap_or_default()
    }

    fn check(&self) -> Result<(), AppError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError("store unavailable".to_string()));
        }
        Ok(())
    }

    fn lock_error() -> AppError {
        AppError::DatabaseError("lock poisoned".to_string())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.check()?;
        let users = self.users.read().map_err(|_| Self::lock_error())?;
        Ok(users.iter().find(|u| u.username.as_deref() == Some(username)).cloned())
    }

    async fn find_by_provider_id(
        &self,
        provider: AuthProvider,
        provider_user_id: &str,
    ) -> Result<Option<User>, AppError> {
        self.check()?;
        let users = self.users.read().map_err(|_| Self::lock_error())?;
        Ok(users.iter().find(|u| u.provider_id(provider) == Some(provider_user_id)).cloned())
    }

    async fn insert(&self, mut user: User) -> Result<User, AppError> {
        self.check()?;
        let mut users = self.users.write().map_err(|_| Self::lock_error())?;

        for provider in [AuthProvider::Google, AuthProvider::Facebook] {
            if let Some(pid) = user.provider_id(provider) {
                if users.iter().any(|u| u.provider_id(provider) == Some(pid)) {
                    return Err(AppError::ConflictError("이미 등록된 계정입니다".to_string()));
                }
            }
        }

        if let Some(name) = user.unique_username.as_deref() {
            if users.iter().any(|u| u.unique_username.as_deref() == Some(name)) {
                return Err(AppError::ConflictError("이미 등록된 계정입니다".to_string()));
            }
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn update_secret(&self, id: &str, secret: &str) -> Result<bool, AppError> {
        self.check()?;
        let mut users = self.users.write().map_err(|_| Self::lock_error())?;

        match users.iter_mut().find(|u| u.id_string().as_deref() == Some(id)) {
            Some(user) => {
                user.secret = Some(secret.to_string());
                user.updated_at = DateTime::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_secrets(&self) -> Result<Vec<String>, AppError> {
        self.check()?;
        let users = self.users.read().map_err(|_| Self::lock_error())?;
        Ok(users.iter().filter_map(|u| u.secret.clone()).collect())
    }
}
