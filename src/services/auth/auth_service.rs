//! # 인증 게이트웨이
//!
//! 로컬 자격 증명과 외부 프로바이더 신원을 사용자 레코드에 연결하고 세션을 발급합니다.
//!
//! ```text
//!   register / login ───────┐
//!                           ├──► UserStore ──► SessionService::establish ──► IssuedSession
//!   authenticate_with_provider ┘
//!
//!   logout ─────────────────────► SessionService::invalidate ──► Anonymous
//! ```
//!
//! ## 전략별 동작
//!
//! | 전략 | 해셔 | 로컬 가입/로그인 | 사용자명 중복 |
//! |------|------|------------------|---------------|
//! | `legacy` | [`LegacyDigestHasher`](super::LegacyDigestHasher) | 허용 | 허용 (두 번째 레코드 생성) |
//! | `local` | [`BcryptHasher`](super::BcryptHasher) | 허용 | 거부 |
//! | `federated` | [`BcryptHasher`](super::BcryptHasher) | 거부 | 거부 |
//!
//! 서로 다른 프로바이더로 가입한 같은 사람은 별개의 레코드로 유지됩니다.

use std::sync::Arc;
use crate::{
    config::{AuthProvider, AuthStrategy},
    domain::{
        entities::users::user::User,
        models::{
            auth::session::{IssuedSession, SessionState},
            oauth::{FindOrCreate, ProviderIdentity},
        },
    },
    errors::errors::AppError,
    repositories::users::UserStore,
};
use super::{PasswordHasher, SessionService};

/// 로그인 실패 시 사용자에게 보이는 메시지. 계정 존재 여부를 드러내지 않습니다.
pub const INVALID_CREDENTIALS: &str = "사용자명 또는 비밀번호가 올바르지 않습니다";

pub struct AuthService {
    strategy: AuthStrategy,
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
    sessions: Arc<SessionService>,
}

impl AuthService {
    pub fn new(
        strategy: AuthStrategy,
        users: Arc<dyn UserStore>,
        hasher: Arc<dyn PasswordHasher>,
        sessions: Arc<SessionService>,
    ) -> Self {
        Self { strategy, users, hasher, sessions }
    }

    /// 로컬 계정 생성 후 바로 세션을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 빈 사용자명 또는 비밀번호
    /// * `AppError::ConflictError` - 사용자명 중복 (`legacy` 전략 제외)
    /// * `AppError::AuthenticationError` - 로컬 자격 증명이 비활성화된 전략
    pub async fn register(&self, username: &str, password: &str) -> Result<IssuedSession, AppError> {
        self.ensure_local_enabled()?;
        let username = Self::validate_credentials(username, password)?;

        if self.strategy.enforces_unique_usernames()
            && self.users.find_by_username(username).await?.is_some()
        {
            log::info!("중복 사용자명으로 가입 시도: {}", username);
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }

        let password_hash = self.hasher.hash(password)?;
        let mut user = User::new_local(username.to_string(), password_hash);
        if self.strategy.enforces_unique_usernames() {
            user = user.with_unique_username();
        }

        // 조회와 삽입 사이에 같은 이름이 먼저 들어오면 유니크 인덱스가 거부
        let user = self.users.insert(user).await.map_err(|e| match e {
            AppError::ConflictError(_) => {
                log::info!("동시 가입 경쟁에서 밀린 사용자명: {}", username);
                AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string())
            }
            other => other,
        })?;

        log::info!("로컬 사용자 생성: {} ({})", username, self.hasher.scheme());

        self.sessions.establish(&user, AuthProvider::Local).await
    }

    /// 사용자명/비밀번호를 검증하고 세션을 발급합니다.
    ///
    /// 사용자 없음, 비밀번호 없음(프로바이더 전용 계정), 비밀번호 불일치는
    /// 모두 같은 `AuthenticationError`가 됩니다.
    pub async fn login(&self, username: &str, password: &str) -> Result<IssuedSession, AppError> {
        self.ensure_local_enabled()?;
        let username = Self::validate_credentials(username, password)
            .map_err(|_| AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()))?;

        let user = match self.users.find_by_username(username).await? {
            Some(user) => user,
            None => {
                log::warn!("로그인 실패 - 알 수 없는 사용자: {}", username);
                return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
            }
        };

        let verified = user
            .password_hash
            .as_deref()
            .is_some_and(|stored| self.hasher.verify(password, stored));

        if !verified {
            log::warn!("로그인 실패 - 자격 증명 불일치: {}", username);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        self.sessions.establish(&user, AuthProvider::Local).await
    }

    /// 프로바이더 ID로 레코드를 찾고 없으면 생성합니다.
    ///
    /// 생성이 유니크 인덱스 충돌로 실패하면 동시에 다른 요청이 먼저 생성한 것이므로
    /// 다시 조회한 레코드를 `Found`로 반환합니다.
    pub async fn find_or_create_by_provider(&self, identity: &ProviderIdentity) -> Result<FindOrCreate, AppError> {
        if identity.provider == AuthProvider::Local {
            return Err(AppError::ValidationError("로컬 계정은 프로바이더 신원이 아닙니다".to_string()));
        }

        if let Some(user) = self.find_by_identity(identity).await? {
            return Ok(FindOrCreate::Found(user));
        }

        match self.users.insert(User::new_federated(identity)).await {
            Ok(user) => {
                log::info!(
                    "프로바이더 사용자 생성: {}:{}",
                    identity.provider.as_str(),
                    identity.provider_user_id
                );
                Ok(FindOrCreate::Created(user))
            }
            Err(AppError::ConflictError(_)) => self
                .find_by_identity(identity)
                .await?
                .map(FindOrCreate::Found)
                .ok_or_else(|| AppError::DatabaseError("충돌 후 레코드를 찾을 수 없습니다".to_string())),
            Err(e) => Err(e),
        }
    }

    /// 프로바이더 신원으로 로그인합니다. 찾은 레코드든 새 레코드든 세션은 그 레코드에 바인딩됩니다.
    pub async fn authenticate_with_provider(
        &self,
        identity: &ProviderIdentity,
    ) -> Result<(FindOrCreate, IssuedSession), AppError> {
        let outcome = self.find_or_create_by_provider(identity).await?;
        let issued = self.sessions.establish(outcome.user(), identity.provider).await?;

        Ok((outcome, issued))
    }

    /// 항상 `Anonymous`로 끝납니다.
    pub async fn logout(&self, state: &SessionState) -> SessionState {
        self.sessions.invalidate(state).await
    }

    async fn find_by_identity(&self, identity: &ProviderIdentity) -> Result<Option<User>, AppError> {
        self.users
            .find_by_provider_id(identity.provider, &identity.provider_user_id)
            .await
    }

    fn ensure_local_enabled(&self) -> Result<(), AppError> {
        if self.strategy.allows_local_credentials() {
            Ok(())
        } else {
            Err(AppError::AuthenticationError("로컬 로그인이 비활성화되어 있습니다".to_string()))
        }
    }

    fn validate_credentials<'a>(username: &'a str, password: &str) -> Result<&'a str, AppError> {
        let username = username.trim();

        if username.is_empty() || password.is_empty() {
            return Err(AppError::ValidationError("사용자명과 비밀번호를 입력하세요".to_string()));
        }

        Ok(username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::repositories::users::memory::MemoryUserStore;
    use crate::services::auth::BcryptHasher;
    use crate::test_support::{TestHarness, TEST_SESSION_SECRET};
    use crate::repositories::sessions::MemorySessionStore;

    /// 사용자명 조회가 항상 비어 있는 저장소. 조회 직후 다른 요청이 먼저 삽입한 상황.
    struct StaleLookupStore {
        inner: Arc<MemoryUserStore>,
    }

    #[async_trait]
    impl UserStore for StaleLookupStore {
        async fn find_by_username(&self, _username: &str) -> Result<Option<User>, AppError> {
            Ok(None)
        }

        async fn find_by_provider_id(
            &self,
            provider: AuthProvider,
            provider_user_id: &str,
        ) -> Result<Option<User>, AppError> {
            self.inner.find_by_provider_id(provider, provider_user_id).await
        }

        async fn insert(&self, user: User) -> Result<User, AppError> {
            self.inner.insert(user).await
        }

        async fn update_secret(&self, id: &str, secret: &str) -> Result<bool, AppError> {
            self.inner.update_secret(id, secret).await
        }

        async fn find_secrets(&self) -> Result<Vec<String>, AppError> {
            self.inner.find_secrets().await
        }
    }

    fn stale_lookup_service(strategy: AuthStrategy, inner: Arc<MemoryUserStore>) -> AuthService {
        let sessions = SessionService::new(Arc::new(MemorySessionStore::new()), TEST_SESSION_SECRET.to_string(), 3600);

        AuthService::new(
            strategy,
            Arc::new(StaleLookupStore { inner }),
            Arc::new(BcryptHasher::new(4)),
            Arc::new(sessions),
        )
    }

    fn google(id: &str) -> ProviderIdentity {
        ProviderIdentity {
            provider: AuthProvider::Google,
            provider_user_id: id.to_string(),
            display_name: Some("Alice".to_string()),
            email: Some("alice@example.com".to_string()),
        }
    }

    #[actix_web::test]
    async fn test_register_then_login() {
        let h = TestHarness::new(AuthStrategy::LocalWithFederation);
        let auth = &h.ctx.auth;

        let registered = auth.register("alice", "pw1").await.unwrap();
        let state = h.ctx.sessions.resolve(Some(&registered.token)).await;
        assert!(state.is_authenticated());

        let logged_in = auth.login("alice", "pw1").await.unwrap();
        assert_eq!(logged_in.user_id(), registered.user_id());
        assert!(h.ctx.sessions.resolve(Some(&logged_in.token)).await.is_authenticated());
    }

    #[actix_web::test]
    async fn test_wrong_password_and_unknown_user_fail_identically() {
        let h = TestHarness::new(AuthStrategy::LocalWithFederation);
        h.ctx.auth.register("alice", "pw1").await.unwrap();

        let wrong = h.ctx.auth.login("alice", "wrong").await.unwrap_err();
        let unknown = h.ctx.auth.login("nobody", "pw1").await.unwrap_err();

        assert_eq!(wrong.public_message(), unknown.public_message());
        assert!(matches!(wrong, AppError::AuthenticationError(_)));
    }

    #[actix_web::test]
    async fn test_stored_password_is_not_plaintext() {
        let h = TestHarness::new(AuthStrategy::LocalWithFederation);
        h.ctx.auth.register("alice", "pw1").await.unwrap();

        let stored = h.users.all();
        let hash = stored[0].password_hash.as_deref().unwrap();
        assert_ne!(hash, "pw1");
        assert!(hash.starts_with("$2"));
    }

    #[actix_web::test]
    async fn test_duplicate_username_rejected_when_unique() {
        let h = TestHarness::new(AuthStrategy::LocalWithFederation);
        h.ctx.auth.register("alice", "pw1").await.unwrap();

        let second = h.ctx.auth.register("alice", "pw2").await;

        assert!(matches!(second, Err(AppError::ConflictError(_))));
        assert_eq!(h.users.len(), 1);
    }

    #[actix_web::test]
    async fn test_concurrent_registration_keeps_one_record() {
        let inner = Arc::new(MemoryUserStore::new());
        let service = stale_lookup_service(AuthStrategy::LocalWithFederation, inner.clone());

        service.register("alice", "pw1").await.unwrap();
        let second = service.register("alice", "pw2").await;

        match second {
            Err(AppError::ConflictError(msg)) => assert_eq!(msg, "이미 사용 중인 사용자명입니다"),
            other => panic!("Expected ConflictError, got {:?}", other.map(|_| ())),
        }
        assert_eq!(inner.len(), 1);
    }

    #[actix_web::test]
    async fn test_legacy_records_skip_unique_username() {
        let inner = Arc::new(MemoryUserStore::new());
        let service = stale_lookup_service(AuthStrategy::LegacyDigest, inner.clone());

        service.register("alice", "pw1").await.unwrap();
        service.register("alice", "pw2").await.unwrap();

        assert_eq!(inner.len(), 2);
        assert!(inner.all().iter().all(|u| u.unique_username.is_none()));
    }

    #[actix_web::test]
    async fn test_duplicate_username_creates_second_record_in_legacy_mode() {
        let h = TestHarness::new(AuthStrategy::LegacyDigest);
        h.ctx.auth.register("alice", "pw1").await.unwrap();

        h.ctx.auth.register("alice", "pw2").await.unwrap();

        assert_eq!(h.users.len(), 2);
    }

    #[actix_web::test]
    async fn test_legacy_identical_passwords_store_identical_values() {
        let h = TestHarness::new(AuthStrategy::LegacyDigest);
        h.ctx.auth.register("alice", "same").await.unwrap();
        h.ctx.auth.register("bob", "same").await.unwrap();

        let stored = h.users.all();
        assert_eq!(stored[0].password_hash, stored[1].password_hash);
    }

    #[actix_web::test]
    async fn test_federated_strategy_rejects_local_credentials() {
        let h = TestHarness::new(AuthStrategy::FederatedOnly);

        let result = h.ctx.auth.register("alice", "pw1").await;

        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
        assert_eq!(h.users.len(), 0);
    }

    #[actix_web::test]
    async fn test_account_without_password_cannot_password_login() {
        let h = TestHarness::new(AuthStrategy::LocalWithFederation);
        let mut user = User::new_federated(&google("g-1"));
        user.username = Some("alice".to_string());
        h.users.insert(user).await.unwrap();

        let result = h.ctx.auth.login("alice", "anything").await;
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[actix_web::test]
    async fn test_find_or_create_is_idempotent() {
        let h = TestHarness::new(AuthStrategy::LocalWithFederation);

        let (first, _) = h.ctx.auth.authenticate_with_provider(&google("g-1")).await.unwrap();
        let (second, _) = h.ctx.auth.authenticate_with_provider(&google("g-1")).await.unwrap();

        assert!(first.was_created());
        assert!(!second.was_created());
        assert_eq!(first.user().id, second.user().id);
        assert_eq!(h.users.len(), 1);
    }

    #[actix_web::test]
    async fn test_provider_session_is_bound_to_found_record() {
        let h = TestHarness::new(AuthStrategy::LocalWithFederation);
        let (created, _) = h.ctx.auth.authenticate_with_provider(&google("g-1")).await.unwrap();

        let (_, issued) = h.ctx.auth.authenticate_with_provider(&google("g-1")).await.unwrap();

        assert_eq!(Some(issued.user_id().to_string()), created.user().id_string());
        assert_eq!(issued.session.auth_provider, AuthProvider::Google);
    }

    #[actix_web::test]
    async fn test_cross_provider_accounts_are_not_merged() {
        let h = TestHarness::new(AuthStrategy::LocalWithFederation);
        let facebook = ProviderIdentity {
            provider: AuthProvider::Facebook,
            provider_user_id: "fb-1".to_string(),
            display_name: Some("Alice".to_string()),
            email: Some("alice@example.com".to_string()),
        };

        let (g, _) = h.ctx.auth.authenticate_with_provider(&google("g-1")).await.unwrap();
        let (f, _) = h.ctx.auth.authenticate_with_provider(&facebook).await.unwrap();

        assert_ne!(g.user().id, f.user().id);
        assert_eq!(h.users.len(), 2);
    }

    #[actix_web::test]
    async fn test_local_identity_is_not_a_provider_identity() {
        let h = TestHarness::new(AuthStrategy::LocalWithFederation);
        let local = ProviderIdentity {
            provider: AuthProvider::Local,
            provider_user_id: "x".to_string(),
            display_name: None,
            email: None,
        };

        let result = h.ctx.auth.find_or_create_by_provider(&local).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_user_store_failure_is_reported() {
        let h = TestHarness::new(AuthStrategy::LocalWithFederation);
        h.users.fail_all();

        let result = h.ctx.auth.login("alice", "pw1").await;
        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }

    #[actix_web::test]
    async fn test_logout_always_ends_anonymous() {
        let h = TestHarness::new(AuthStrategy::LocalWithFederation);
        let issued = h.ctx.auth.register("alice", "pw1").await.unwrap();
        let state = h.ctx.sessions.resolve(Some(&issued.token)).await;

        h.sessions.fail_all();

        assert_eq!(h.ctx.auth.logout(&state).await, SessionState::Anonymous);
    }
}
