//! # OAuth Domain Models Module
//!
//! 외부 프로바이더와의 OAuth 2.0 플로우에서 사용하는 모델입니다.
//!
//! ```text
//! oauth/
//! ├── mod.rs         ← ProviderIdentity, FindOrCreate
//! ├── google.rs      ← Google 토큰/사용자 정보 응답
//! └── facebook.rs    ← Facebook Graph API 응답
//! ```
//!
//! 프로바이더별 응답은 모두 [`ProviderIdentity`]로 정규화된 뒤
//! 인증 게이트웨이로 전달됩니다.

pub mod google;
pub mod facebook;

use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;
use crate::domain::entities::users::user::User;

/// OAuth 핸드셰이크가 끝난 뒤 프로바이더가 확인해 준 사용자 신원.
///
/// 이미 검증된 값으로 취급하며 게이트웨이에서 다시 검증하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderIdentity {
    pub provider: AuthProvider,
    /// 프로바이더가 발급한 안정적인 사용자 식별자
    pub provider_user_id: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

/// 프로바이더 ID 기반 find-or-create 결과
#[derive(Debug, Clone, PartialEq)]
pub enum FindOrCreate {
    /// 기존 레코드 재사용
    Found(User),
    /// 새 레코드 생성
    Created(User),
}

impl FindOrCreate {
    pub fn user(&self) -> &User {
        match self {
            FindOrCreate::Found(user) | FindOrCreate::Created(user) => user,
        }
    }

    pub fn was_created(&self) -> bool {
        matches!(self, FindOrCreate::Created(_))
    }
}
