//! # 외부 프로바이더 OAuth 2.0 플로우
//!
//! ```text
//! GET /auth/{provider}
//!   └─ OAuthService::begin ── state 저장 (일회용, TTL) ──► 302 프로바이더 인증 페이지
//!
//! GET /auth/{provider}/secrets?code=..&state=..
//!   └─ OAuthService::complete
//!        ├─ state 소비 (없거나 다른 프로바이더 것이면 거부)
//!        ├─ IdentityProvider::resolve_identity(code)
//!        │     ├─ code → access token
//!        │     └─ access token → 사용자 정보
//!        └─ ProviderIdentity ──► AuthService::authenticate_with_provider
//! ```
//!
//! 프로바이더는 [`IdentityProvider`] 트레이트로 추상화되어 있으며,
//! 클라이언트 ID/시크릿이 설정된 프로바이더만 등록됩니다.

use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use uuid::Uuid;
use crate::{
    config::{AuthProvider, FacebookOAuthConfig, GoogleOAuthConfig, OAuthClientSettings, OAuthConfig},
    domain::{
        dto::forms::OAuthCallbackQuery,
        models::oauth::{
            facebook::{FacebookTokenResponse, FacebookUserInfo},
            google::{GoogleTokenResponse, GoogleUserInfo},
            ProviderIdentity,
        },
    },
    errors::errors::AppError,
    repositories::sessions::SessionStore,
};

/// 외부 신원 프로바이더
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    fn provider(&self) -> AuthProvider;

    /// 사용자를 보낼 프로바이더 인증 페이지 URL
    fn authorization_url(&self, state: &str) -> String;

    /// Authorization Code를 교환해 확인된 사용자 신원을 얻습니다.
    async fn resolve_identity(&self, code: &str) -> Result<ProviderIdentity, AppError>;
}

fn build_url(base: &str, params: &[(&str, &str)]) -> String {
    let query_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", base, query_string)
}

async fn read_json<T: DeserializeOwned>(
    response: reqwest::Response,
    provider: &str,
    step: &str,
) -> Result<T, AppError> {
    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        return Err(AppError::ExternalServiceError(format!(
            "{} {} 실패 ({}): {}", provider, step, status, error_text
        )));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| AppError::ExternalServiceError(format!("{} {} 응답 파싱 실패: {}", provider, step, e)))
}

/// Google OAuth 2.0 (OpenID Connect userinfo)
pub struct GoogleIdentityProvider {
    settings: OAuthClientSettings,
    http: reqwest::Client,
}

impl GoogleIdentityProvider {
    pub fn new(settings: OAuthClientSettings) -> Self {
        Self { settings, http: reqwest::Client::new() }
    }

    async fn exchange_code_for_token(&self, code: &str) -> Result<GoogleTokenResponse, AppError> {
        let params = [
            ("code", code),
            ("client_id", self.settings.client_id.as_str()),
            ("client_secret", self.settings.client_secret.as_str()),
            ("redirect_uri", self.settings.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self.http
            .post(&self.settings.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 요청 실패: {}", e)))?;

        read_json(response, "Google", "토큰 교환").await
    }

    async fn get_user_info(&self, access_token: &str) -> Result<GoogleUserInfo, AppError> {
        let response = self.http
            .get(&self.settings.userinfo_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 사용자 정보 요청 실패: {}", e)))?;

        read_json(response, "Google", "사용자 정보 조회").await
    }
}

#[async_trait]
impl IdentityProvider for GoogleIdentityProvider {
    fn provider(&self) -> AuthProvider {
        AuthProvider::Google
    }

    fn authorization_url(&self, state: &str) -> String {
        build_url(&self.settings.auth_uri, &[
            ("client_id", self.settings.client_id.as_str()),
            ("redirect_uri", self.settings.redirect_uri.as_str()),
            ("scope", "profile email"),
            ("response_type", "code"),
            ("state", state),
        ])
    }

    async fn resolve_identity(&self, code: &str) -> Result<ProviderIdentity, AppError> {
        let token = self.exchange_code_for_token(code).await?;
        let user_info = self.get_user_info(&token.access_token).await?;

        Ok(user_info.into())
    }
}

/// Facebook Login (Graph API)
pub struct FacebookIdentityProvider {
    settings: OAuthClientSettings,
    http: reqwest::Client,
}

impl FacebookIdentityProvider {
    pub fn new(settings: OAuthClientSettings) -> Self {
        Self { settings, http: reqwest::Client::new() }
    }

    async fn exchange_code_for_token(&self, code: &str) -> Result<FacebookTokenResponse, AppError> {
        let params = [
            ("client_id", self.settings.client_id.as_str()),
            ("client_secret", self.settings.client_secret.as_str()),
            ("redirect_uri", self.settings.redirect_uri.as_str()),
            ("code", code),
        ];

        let response = self.http
            .get(&self.settings.token_uri)
            .query(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Facebook 토큰 요청 실패: {}", e)))?;

        read_json(response, "Facebook", "토큰 교환").await
    }

    async fn get_user_info(&self, access_token: &str) -> Result<FacebookUserInfo, AppError> {
        let response = self.http
            .get(&self.settings.userinfo_uri)
            .query(&[("fields", "id,name,email"), ("access_token", access_token)])
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Facebook 사용자 정보 요청 실패: {}", e)))?;

        read_json(response, "Facebook", "사용자 정보 조회").await
    }
}

#[async_trait]
impl IdentityProvider for FacebookIdentityProvider {
    fn provider(&self) -> AuthProvider {
        AuthProvider::Facebook
    }

    fn authorization_url(&self, state: &str) -> String {
        build_url(&self.settings.auth_uri, &[
            ("client_id", self.settings.client_id.as_str()),
            ("redirect_uri", self.settings.redirect_uri.as_str()),
            ("response_type", "code"),
            ("state", state),
        ])
    }

    async fn resolve_identity(&self, code: &str) -> Result<ProviderIdentity, AppError> {
        let token = self.exchange_code_for_token(code).await?;
        let user_info = self.get_user_info(&token.access_token).await?;

        Ok(user_info.into())
    }
}

/// 등록된 프로바이더와 일회용 state를 관리하는 OAuth 플로우 서비스
pub struct OAuthService {
    providers: HashMap<AuthProvider, Arc<dyn IdentityProvider>>,
    store: Arc<dyn SessionStore>,
    state_ttl_seconds: u64,
}

impl OAuthService {
    pub fn new(store: Arc<dyn SessionStore>, state_ttl_seconds: u64) -> Self {
        Self {
            providers: HashMap::new(),
            store,
            state_ttl_seconds,
        }
    }

    /// 환경 설정에 자격 증명이 있는 프로바이더를 등록합니다.
    pub fn from_config(store: Arc<dyn SessionStore>) -> Self {
        let mut service = Self::new(store, OAuthConfig::state_ttl_seconds());

        match GoogleOAuthConfig::settings() {
            Some(settings) => service = service.with_provider(Arc::new(GoogleIdentityProvider::new(settings))),
            None => log::warn!("GOOGLE_CLIENT_ID/GOOGLE_CLIENT_SECRET 미설정: Google 로그인 비활성화"),
        }

        match FacebookOAuthConfig::settings() {
            Some(settings) => service = service.with_provider(Arc::new(FacebookIdentityProvider::new(settings))),
            None => log::warn!("FACEBOOK_CLIENT_ID/FACEBOOK_CLIENT_SECRET 미설정: Facebook 로그인 비활성화"),
        }

        service
    }

    pub fn with_provider(mut self, provider: Arc<dyn IdentityProvider>) -> Self {
        self.providers.insert(provider.provider(), provider);
        self
    }

    pub fn is_enabled(&self, provider: AuthProvider) -> bool {
        self.providers.contains_key(&provider)
    }

    /// 활성화된 프로바이더 목록 (google, facebook 순)
    pub fn enabled_providers(&self) -> Vec<AuthProvider> {
        [AuthProvider::Google, AuthProvider::Facebook]
            .into_iter()
            .filter(|p| self.is_enabled(*p))
            .collect()
    }

    fn provider(&self, provider: AuthProvider) -> Result<&Arc<dyn IdentityProvider>, AppError> {
        self.providers.get(&provider).ok_or_else(|| {
            AppError::NotFound(format!("{} 로그인이 설정되지 않았습니다", provider.as_str()))
        })
    }

    /// 새 state를 저장하고 프로바이더 인증 페이지 URL을 반환합니다.
    pub async fn begin(&self, provider: AuthProvider) -> Result<String, AppError> {
        let identity_provider = self.provider(provider)?;

        let state = Uuid::new_v4().simple().to_string();
        self.store
            .save_oauth_state(&state, provider, self.state_ttl_seconds)
            .await?;

        Ok(identity_provider.authorization_url(&state))
    }

    /// 콜백 파라미터를 검증하고 프로바이더가 확인한 신원을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 사용자가 거부했거나, code/state 누락,
    ///   state가 없거나 만료되었거나 다른 프로바이더용인 경우
    /// * `AppError::ExternalServiceError` - 토큰 교환 또는 사용자 정보 조회 실패
    pub async fn complete(
        &self,
        provider: AuthProvider,
        query: &OAuthCallbackQuery,
    ) -> Result<ProviderIdentity, AppError> {
        let identity_provider = self.provider(provider)?;

        if let Some(error) = &query.error {
            return Err(AppError::AuthenticationError(format!(
                "{} 인증 거부: {} {}",
                provider.as_str(),
                error,
                query.error_description.as_deref().unwrap_or_default()
            )));
        }

        let state = query.state.as_deref().ok_or_else(|| {
            AppError::AuthenticationError("OAuth state가 없습니다".to_string())
        })?;

        match self.store.take_oauth_state(state).await? {
            Some(issued_for) if issued_for == provider => {}
            _ => return Err(AppError::AuthenticationError("유효하지 않은 OAuth state".to_string())),
        }

        let code = query.code.as_deref().ok_or_else(|| {
            AppError::AuthenticationError("Authorization Code가 없습니다".to_string())
        })?;

        identity_provider.resolve_identity(code).await
    }
}
