use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;
use crate::errors::errors::AppError;
use super::session::SessionState;

/// 세션에서 확인된 사용자 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: String,

    /// 현재 세션 ID
    pub session_id: String,

    /// 세션을 만든 인증 방식
    pub auth_provider: AuthProvider,
}

/// 요청마다 세션 미들웨어가 만들어 Request Extensions에 넣는 세션 컨텍스트.
///
/// 핸들러는 전역 상태 대신 이 값을 인자로 받습니다.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    pub state: SessionState,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user: AuthenticatedUser) -> Self {
        Self {
            state: SessionState::Authenticated(user),
        }
    }

    pub fn user(&self) -> Option<&AuthenticatedUser> {
        self.state.user()
    }
}

/// 세션 컨텍스트 추출자. 미들웨어가 실행되지 않은 경우 익명으로 간주합니다.
impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let ctx = req
            .extensions()
            .get::<SessionContext>()
            .cloned()
            .unwrap_or_default();
        ready(Ok(ctx))
    }
}

/// 인증된 사용자 추출자.
///
/// 익명 요청이면 `AppError::Unauthenticated`가 되어 `/login`으로 리디렉션됩니다.
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req
            .extensions()
            .get::<SessionContext>()
            .and_then(|ctx| ctx.user().cloned());

        match user {
            Some(user) => ready(Ok(user)),
            None => ready(Err(AppError::Unauthenticated)),
        }
    }
}
