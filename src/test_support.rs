//! 테스트용 인메모리 구성과 가짜 신원 프로바이더

use std::sync::Arc;
use async_trait::async_trait;
use crate::{
    config::{AuthProvider, AuthStrategy},
    core::AppContext,
    domain::models::oauth::ProviderIdentity,
    errors::errors::AppError,
    repositories::{sessions::MemorySessionStore, users::memory::MemoryUserStore},
    services::auth::{
        BcryptHasher, IdentityProvider, LegacyDigestHasher, OAuthService, PasswordHasher, SessionService,
    },
};

pub const TEST_SESSION_SECRET: &str = "test-session-secret";

/// 네트워크 없이 동작하는 프로바이더.
///
/// Authorization Code가 곧 사용자 식별자이며 `"{provider}-{code}"`를 ID로 돌려줍니다.
/// 코드가 `"fail"`이면 외부 서비스 오류를 냅니다.
pub struct FakeIdentityProvider {
    provider: AuthProvider,
}

impl FakeIdentityProvider {
    pub fn new(provider: AuthProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentityProvider {
    fn provider(&self) -> AuthProvider {
        self.provider
    }

    fn authorization_url(&self, state: &str) -> String {
        format!("https://{}.test/authorize?state={}", self.provider.as_str(), state)
    }

    async fn resolve_identity(&self, code: &str) -> Result<ProviderIdentity, AppError> {
        if code == "fail" {
            return Err(AppError::ExternalServiceError("token exchange failed".to_string()));
        }

        Ok(ProviderIdentity {
            provider: self.provider,
            provider_user_id: format!("{}-{}", self.provider.as_str(), code),
            display_name: Some(code.to_string()),
            email: None,
        })
    }
}

pub struct TestHarness {
    pub ctx: AppContext,
    pub users: Arc<MemoryUserStore>,
    pub sessions: Arc<MemorySessionStore>,
}

impl TestHarness {
    /// 전략에 맞는 해셔와 두 프로바이더(연동 허용 시)를 갖춘 컨텍스트
    pub fn new(strategy: AuthStrategy) -> Self {
        let users = Arc::new(MemoryUserStore::new());
        let sessions = Arc::new(MemorySessionStore::new());

        let hasher: Arc<dyn PasswordHasher> = match strategy {
            AuthStrategy::LegacyDigest => Arc::new(LegacyDigestHasher),
            _ => Arc::new(BcryptHasher::new(4)),
        };

        let mut oauth = OAuthService::new(sessions.clone(), 600);
        if strategy.allows_federation() {
            oauth = oauth
                .with_provider(Arc::new(FakeIdentityProvider::new(AuthProvider::Google)))
                .with_provider(Arc::new(FakeIdentityProvider::new(AuthProvider::Facebook)));
        }

        let ctx = AppContext::assemble(
            strategy,
            users.clone(),
            hasher,
            SessionService::new(sessions.clone(), TEST_SESSION_SECRET.to_string(), 3600),
            oauth,
        );

        Self { ctx, users, sessions }
    }
}
