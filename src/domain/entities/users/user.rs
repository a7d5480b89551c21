//! User Entity Implementation
//!
//! 사용자 레코드는 다음 중 하나 이상의 방식으로 인증할 수 있습니다.
//!
//! - 비밀번호 인증: `username` + `password_hash`
//! - 외부 프로바이더: `google_id` 또는 `facebook_id`
//!
//! `secret`은 사용자가 제출하기 전까지 존재하지 않으며(문서에서 필드 자체가 없음),
//! 제출할 때마다 덮어씁니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;
use crate::domain::models::oauth::ProviderIdentity;

/// 사용자 엔티티 (`users` 컬렉션)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 로컬 로그인 식별자 (사용자명 또는 이메일)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// 유니크 사용자명을 요구하는 전략에서만 `username`과 같은 값으로 채워집니다.
    /// 유니크 + sparse 인덱스가 걸려 있어 레거시 레코드의 중복은 허용하면서
    /// 동시 가입 경쟁은 저장소 수준에서 막습니다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_username: Option<String>,
    /// 비밀번호 해시. 프로바이더 전용 계정은 None
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_id: Option<String>,
    /// 프로바이더가 알려준 표시 이름
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// 사용자가 제출한 시크릿. 한 사용자당 하나, 마지막 제출이 유지됨
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 새 로컬 사용자 생성
    pub fn new_local(username: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username: Some(username),
            unique_username: None,
            password_hash: Some(password_hash),
            google_id: None,
            facebook_id: None,
            display_name: None,
            secret: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 프로바이더 신원으로 새 사용자 생성. 비밀번호는 없습니다.
    pub fn new_federated(identity: &ProviderIdentity) -> Self {
        let now = DateTime::now();

        let mut user = Self {
            id: None,
            username: None,
            unique_username: None,
            password_hash: None,
            google_id: None,
            facebook_id: None,
            display_name: identity.display_name.clone(),
            secret: None,
            created_at: now,
            updated_at: now,
        };
        user.set_provider_id(identity.provider, identity.provider_user_id.clone());
        user
    }

    /// 사용자명을 유니크 인덱스 대상으로 등록합니다.
    pub fn with_unique_username(mut self) -> Self {
        self.unique_username = self.username.clone();
        self
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 비밀번호 인증이 가능한 사용자인지 확인
    pub fn can_authenticate_with_password(&self) -> bool {
        self.password_hash.is_some()
    }

    /// 프로바이더별 외부 ID
    pub fn provider_id(&self, provider: AuthProvider) -> Option<&str> {
        match provider {
            AuthProvider::Local => None,
            AuthProvider::Google => self.google_id.as_deref(),
            AuthProvider::Facebook => self.facebook_id.as_deref(),
        }
    }

    fn set_provider_id(&mut self, provider: AuthProvider, provider_user_id: String) {
        match provider {
            AuthProvider::Local => {}
            AuthProvider::Google => self.google_id = Some(provider_user_id),
            AuthProvider::Facebook => self.facebook_id = Some(provider_user_id),
        }
    }
}
