//! 세션 모델과 세션 상태 머신
//!
//! ```text
//!              login / register / authenticate_with_provider
//!   Anonymous ───────────────────────────────────────────────► Authenticated(user_id)
//!       ▲                                                              │
//!       └──────────────────── logout / 만료 ───────────────────────────┘
//! ```
//!
//! 모든 요청은 `Anonymous`로 시작하며, 유효한 세션 토큰이 제시된 경우에만
//! `Authenticated`가 됩니다. 만료 정책은 세션 저장소의 TTL에 위임됩니다.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;
use super::authenticated_user::AuthenticatedUser;

/// 세션 저장소에 보관되는 세션 레코드
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// 세션 ID (무작위 UUID)
    pub id: String,
    /// 세션이 바인딩된 사용자 ID (ObjectId hex)
    pub user_id: String,
    /// 세션을 만든 인증 방식
    pub auth_provider: AuthProvider,
    /// 생성 시각 (unix seconds)
    pub created_at: i64,
    /// 만료 시각 (unix seconds)
    pub expires_at: i64,
}

impl Session {
    pub fn new(id: String, user_id: String, auth_provider: AuthProvider, ttl_seconds: u64) -> Self {
        let now = Utc::now().timestamp();

        Self {
            id,
            user_id,
            auth_provider,
            created_at: now,
            expires_at: now + ttl_seconds as i64,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now().timestamp()
    }
}

/// 요청 단위 세션 상태
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(AuthenticatedUser),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&AuthenticatedUser> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Anonymous => None,
        }
    }
}

/// 새로 발급된 세션과 쿠키에 실을 서명된 토큰
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub session: Session,
    pub token: String,
}

impl IssuedSession {
    pub fn user_id(&self) -> &str {
        &self.session.user_id
    }
}
