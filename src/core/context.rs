use std::sync::Arc;
use crate::{
    config::{AuthStrategy, OAuthConfig},
    repositories::{sessions::SessionStore, users::UserStore},
    services::{
        auth::{hasher_for, AuthService, OAuthService, PasswordHasher, SessionService},
        secrets::SecretService,
    },
};

/// 요청 처리에 필요한 서비스 묶음
#[derive(Clone)]
pub struct AppContext {
    pub strategy: AuthStrategy,
    pub auth: Arc<AuthService>,
    pub sessions: Arc<SessionService>,
    pub secrets: Arc<SecretService>,
    pub oauth: Arc<OAuthService>,
}

impl AppContext {
    /// 환경 설정으로 서비스를 구성합니다.
    ///
    /// `legacy` 전략에서는 OAuth 프로바이더를 등록하지 않습니다.
    pub fn from_config(
        strategy: AuthStrategy,
        users: Arc<dyn UserStore>,
        session_store: Arc<dyn SessionStore>,
    ) -> Self {
        let oauth = if strategy.allows_federation() {
            OAuthService::from_config(session_store.clone())
        } else {
            OAuthService::new(session_store.clone(), OAuthConfig::state_ttl_seconds())
        };

        Self::assemble(
            strategy,
            users,
            Arc::from(hasher_for(strategy)),
            SessionService::from_config(session_store),
            oauth,
        )
    }

    pub fn assemble(
        strategy: AuthStrategy,
        users: Arc<dyn UserStore>,
        hasher: Arc<dyn PasswordHasher>,
        sessions: SessionService,
        oauth: OAuthService,
    ) -> Self {
        let sessions = Arc::new(sessions);

        Self {
            strategy,
            auth: Arc::new(AuthService::new(strategy, users.clone(), hasher, sessions.clone())),
            sessions,
            secrets: Arc::new(SecretService::new(users)),
            oauth: Arc::new(oauth),
        }
    }
}
