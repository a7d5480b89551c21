//! Google OAuth 응답 모델

use serde::Deserialize;
use crate::config::AuthProvider;
use super::ProviderIdentity;

/// 토큰 엔드포인트 응답
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: Option<i64>,
    pub scope: Option<String>,
}

/// OpenID Connect `userinfo` 응답.
///
/// `sub`가 Google 계정의 안정적인 식별자입니다.
#[derive(Debug, Deserialize)]
pub struct GoogleUserInfo {
    pub sub: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub picture: Option<String>,
}

impl From<GoogleUserInfo> for ProviderIdentity {
    fn from(info: GoogleUserInfo) -> Self {
        Self {
            provider: AuthProvider::Google,
            provider_user_id: info.sub,
            display_name: info.name,
            email: info.email,
        }
    }
}
