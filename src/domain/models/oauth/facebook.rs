//! Facebook Graph API 응답 모델

use serde::Deserialize;
use crate::config::AuthProvider;
use super::ProviderIdentity;

#[derive(Debug, Deserialize)]
pub struct FacebookTokenResponse {
    pub access_token: String,
    pub token_type: Option<String>,
    pub expires_in: Option<i64>,
}

/// `GET /me?fields=id,name,email` 응답. 이메일 권한이 없으면 `email`은 빠집니다.
#[derive(Debug, Deserialize)]
pub struct FacebookUserInfo {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<FacebookUserInfo> for ProviderIdentity {
    fn from(info: FacebookUserInfo) -> Self {
        Self {
            provider: AuthProvider::Facebook,
            provider_user_id: info.id,
            display_name: info.name,
            email: info.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_userinfo_without_email() {
        let info: FacebookUserInfo = serde_json::from_str(r#"{"id":"10223","name":"Bob"}"#).unwrap();
        let identity = ProviderIdentity::from(info);

        assert_eq!(identity.provider, AuthProvider::Facebook);
        assert_eq!(identity.provider_user_id, "10223");
        assert!(identity.email.is_none());
    }
}
