//! # 시크릿 서비스
//!
//! 사용자당 시크릿은 하나이며 제출할 때마다 덮어씁니다.
//! 목록은 작성자 정보 없이 시크릿 문자열만 반환합니다.

use std::sync::Arc;
use crate::{
    domain::models::auth::authenticated_user::AuthenticatedUser,
    errors::errors::AppError,
    repositories::users::UserStore,
};

pub struct SecretService {
    users: Arc<dyn UserStore>,
}

impl SecretService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// 인증된 사용자의 시크릿을 덮어씁니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 공백뿐인 시크릿
    /// * `AppError::NotFound` - 세션의 사용자 레코드가 없음 (삭제된 계정)
    pub async fn submit_secret(&self, user: &AuthenticatedUser, secret: &str) -> Result<(), AppError> {
        if secret.trim().is_empty() {
            return Err(AppError::ValidationError("시크릿을 입력하세요".to_string()));
        }

        let updated = self.users.update_secret(&user.user_id, secret).await?;
        if !updated {
            log::warn!("시크릿 제출 대상 사용자 없음: {}", user.user_id);
            return Err(AppError::NotFound("사용자를 찾을 수 없습니다".to_string()));
        }

        log::info!("시크릿 제출: user={}", user.user_id);
        Ok(())
    }

    /// 시크릿이 있는 모든 사용자의 시크릿
    pub async fn list_secrets(&self) -> Result<Vec<String>, AppError> {
        self.users.find_secrets().await
    }
}
