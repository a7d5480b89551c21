//! 세션 발급과 해석
//!
//! 세션 쿠키에는 HS256으로 서명된 토큰이 실리고, 토큰의 `sid`는 세션 저장소의
//! 레코드를 가리킵니다. 서명이 유효해도 저장소에 레코드가 없으면 익명입니다.
//! 따라서 로그아웃은 저장소에서 레코드를 지우는 것만으로 토큰을 무효화합니다.

use std::sync::Arc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::{
    config::{AuthProvider, SessionConfig},
    domain::{
        entities::users::user::User,
        models::auth::{
            authenticated_user::AuthenticatedUser,
            session::{IssuedSession, Session, SessionState},
        },
    },
    errors::errors::{AppError, AppResult, ErrorContext},
    repositories::sessions::SessionStore,
};

/// 세션 쿠키 토큰 클레임
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// 세션 ID
    pub sid: String,
    /// 사용자 ID
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

pub struct SessionService {
    store: Arc<dyn SessionStore>,
    secret: String,
    ttl_seconds: u64,
}

impl SessionService {
    pub fn new(store: Arc<dyn SessionStore>, secret: String, ttl_seconds: u64) -> Self {
        Self { store, secret, ttl_seconds }
    }

    /// `SESSION_SECRET`, `SESSION_TTL_HOURS`로 생성
    pub fn from_config(store: Arc<dyn SessionStore>) -> Self {
        Self::new(store, SessionConfig::secret(), SessionConfig::ttl_seconds())
    }

    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// 사용자에게 새 세션을 발급합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 저장되지 않은 사용자(ID 없음) 또는 서명 실패
    /// * `AppError::SessionStoreError` - 세션 저장 실패
    pub async fn establish(&self, user: &User, provider: AuthProvider) -> Result<IssuedSession, AppError> {
        let user_id = user.id_string().ok_or_else(|| {
            AppError::InternalError("사용자 ID가 없습니다".to_string())
        })?;

        let session = Session::new(Uuid::new_v4().to_string(), user_id, provider, self.ttl_seconds);
        self.store.save(&session, self.ttl_seconds).await?;

        let token = self.sign(&session)?;

        log::info!("세션 발급: user={}, provider={}", session.user_id, provider.as_str());

        Ok(IssuedSession { session, token })
    }

    /// 쿠키 토큰을 세션 상태로 해석합니다.
    ///
    /// 실패 사유와 관계없이 결과는 `Anonymous`이며, 저장소 장애는 로그로만 남습니다.
    pub async fn resolve(&self, token: Option<&str>) -> SessionState {
        let Some(token) = token else {
            return SessionState::Anonymous;
        };

        let claims = match self.verify(token) {
            Ok(claims) => claims,
            Err(e) => {
                log::debug!("세션 토큰 거부: {}", e);
                return SessionState::Anonymous;
            }
        };

        match self.store.load(&claims.sid).await {
            Ok(Some(session)) if session.user_id == claims.sub => {
                SessionState::Authenticated(AuthenticatedUser {
                    user_id: session.user_id,
                    session_id: session.id,
                    auth_provider: session.auth_provider,
                })
            }
            Ok(Some(_)) => {
                log::warn!("세션 주체 불일치: sid={}", claims.sid);
                SessionState::Anonymous
            }
            Ok(None) => SessionState::Anonymous,
            Err(e) => {
                log::error!("세션 조회 실패, 익명으로 처리: {}", e);
                SessionState::Anonymous
            }
        }
    }

    /// 세션을 폐기합니다. 저장소 삭제가 실패해도 결과는 항상 `Anonymous`입니다.
    pub async fn invalidate(&self, state: &SessionState) -> SessionState {
        if let Some(user) = state.user() {
            match self.store.remove(&user.session_id).await {
                Ok(()) => log::info!("세션 종료: user={}", user.user_id),
                Err(e) => log::error!("세션 삭제 실패 (sid={}): {}", user.session_id, e),
            }
        }

        SessionState::Anonymous
    }

    fn sign(&self, session: &Session) -> AppResult<String> {
        let claims = SessionClaims {
            sid: session.id.clone(),
            sub: session.user_id.clone(),
            iat: session.created_at,
            exp: session.expires_at,
        };

        encode(&Header::default(), &claims, &EncodingKey::from_secret(self.secret.as_bytes()))
            .context("세션 토큰 생성 실패")
    }

    fn verify(&self, token: &str) -> Result<SessionClaims, AppError> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());

        decode::<SessionClaims>(token, &decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("세션이 만료되었습니다".to_string())
                }
                _ => AppError::AuthenticationError(format!("유효하지 않은 세션 토큰: {}", e)),
            })
    }

    #[cfg(test)]
    pub(crate) fn sign_claims(&self, claims: &SessionClaims) -> String {
        encode(&Header::default(), claims, &EncodingKey::from_secret(self.secret.as_bytes())).unwrap()
    }
}
