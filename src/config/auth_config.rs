//! 인증 관련 설정 모듈
//!
//! 인증 전략, 세션 쿠키/저장소, Google/Facebook OAuth 클라이언트 설정을 관리합니다.
//!
//! ## 인증 전략
//!
//! | `AUTH_STRATEGY` | 비밀번호 방식 | 로컬 로그인 | OAuth | 사용자명 중복 |
//! |-----------------|---------------|-------------|-------|---------------|
//! | `legacy` | 솔트 없는 다이제스트 | O | X | 허용 |
//! | `local` (기본값) | bcrypt | O | O | 거부 |
//! | `federated` | bcrypt | X | O | 거부 |

use std::env;
use serde::{Deserialize, Serialize};

/// 애플리케이션이 사용할 인증 전략
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStrategy {
    /// 솔트 없는 해시 비교만 사용하는 초기 방식.
    /// 호환성 검증용으로만 존재하며 기본값이 될 수 없습니다.
    LegacyDigest,
    /// bcrypt 로컬 계정 + 세션 + OAuth 연동
    LocalWithFederation,
    /// OAuth 전용
    FederatedOnly,
}

impl AuthStrategy {
    /// `AUTH_STRATEGY` 환경 변수에서 전략을 읽습니다.
    pub fn current() -> Self {
        match env::var("AUTH_STRATEGY") {
            Ok(value) => Self::from_str(&value),
            Err(_) => AuthStrategy::LocalWithFederation,
        }
    }

    /// 알 수 없는 값은 `LocalWithFederation`으로 처리합니다.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "legacy" | "v1" => AuthStrategy::LegacyDigest,
            "federated" | "oauth" | "v3" => AuthStrategy::FederatedOnly,
            "local" | "v2" => AuthStrategy::LocalWithFederation,
            other => {
                log::warn!("알 수 없는 AUTH_STRATEGY '{}', local 전략 사용", other);
                AuthStrategy::LocalWithFederation
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthStrategy::LegacyDigest => "legacy",
            AuthStrategy::LocalWithFederation => "local",
            AuthStrategy::FederatedOnly => "federated",
        }
    }

    /// 아이디/비밀번호 폼 제출(POST /login, POST /register)을 허용하는지 여부
    pub fn allows_local_credentials(&self) -> bool {
        !matches!(self, AuthStrategy::FederatedOnly)
    }

    /// OAuth 라우트를 노출하는지 여부
    pub fn allows_federation(&self) -> bool {
        !matches!(self, AuthStrategy::LegacyDigest)
    }

    /// 같은 사용자명으로 두 번째 가입을 거부하는지 여부
    pub fn enforces_unique_usernames(&self) -> bool {
        !matches!(self, AuthStrategy::LegacyDigest)
    }
}

impl Default for AuthStrategy {
    fn default() -> Self {
        AuthStrategy::LocalWithFederation
    }
}

/// 세션 저장소 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStoreKind {
    Redis,
    Memory,
}

/// 세션 쿠키 및 저장소 설정
pub struct SessionConfig;

impl SessionConfig {
    pub const COOKIE_NAME: &'static str = "secrets_session";

    /// 세션 토큰 서명에 사용할 비밀키.
    ///
    /// 설정되지 않은 경우 경고 로그를 남기고 개발용 기본값을 사용합니다.
    pub fn secret() -> String {
        env::var("SESSION_SECRET").unwrap_or_else(|_| {
            log::warn!("SESSION_SECRET not set, using default (not secure for production!)");
            "Our little secret.".to_string()
        })
    }

    /// 세션 유효 시간 상한 (1년)
    pub const MAX_TTL_HOURS: u64 = 24 * 365;

    /// 세션 유효 시간(시간 단위). 기본값: 24
    ///
    /// 1..=[`Self::MAX_TTL_HOURS`] 범위를 벗어나거나 숫자가 아니면 기본값을 사용합니다.
    pub fn ttl_hours() -> u64 {
        Self::ttl_hours_from(env::var("SESSION_TTL_HOURS").ok().as_deref())
    }

    pub fn ttl_hours_from(value: Option<&str>) -> u64 {
        match value.map(|v| v.trim().parse::<u64>()) {
            Some(Ok(hours)) if (1..=Self::MAX_TTL_HOURS).contains(&hours) => hours,
            Some(_) => {
                log::warn!("SESSION_TTL_HOURS 값이 올바르지 않습니다. 기본값 24 사용");
                24
            }
            None => 24,
        }
    }

    pub fn ttl_seconds() -> u64 {
        Self::ttl_hours().saturating_mul(3600)
    }

    /// `SESSION_STORE` (redis | memory). 기본값: redis
    pub fn store_kind() -> SessionStoreKind {
        match env::var("SESSION_STORE").map(|v| v.to_lowercase()) {
            Ok(v) if v == "memory" => SessionStoreKind::Memory,
            _ => SessionStoreKind::Redis,
        }
    }

    /// Redis 연결 URL. 기본값: "redis://127.0.0.1:6379"
    pub fn redis_url() -> String {
        env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string())
    }
}

/// OAuth 클라이언트 자격 증명과 엔드포인트
#[derive(Debug, Clone)]
pub struct OAuthClientSettings {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub auth_uri: String,
    pub token_uri: String,
    pub userinfo_uri: String,
}

/// 클라이언트 ID/Secret 쌍을 읽습니다. 둘 중 하나라도 비어 있으면 `None`.
fn read_client_credentials(id_var: &str, secret_var: &str) -> Option<(String, String)> {
    let client_id = env::var(id_var).ok().filter(|v| !v.trim().is_empty())?;
    let client_secret = env::var(secret_var).ok().filter(|v| !v.trim().is_empty())?;
    Some((client_id, client_secret))
}

/// Google OAuth 2.0 설정
///
/// Google Cloud Console 의 승인된 리디렉션 URI에
/// `http://localhost:3000/auth/google/secrets` 를 등록해야 합니다.
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    /// `GOOGLE_CLIENT_ID` / `GOOGLE_CLIENT_SECRET` 이 모두 설정된 경우에만 `Some`.
    pub fn settings() -> Option<OAuthClientSettings> {
        let (client_id, client_secret) =
            read_client_credentials("GOOGLE_CLIENT_ID", "GOOGLE_CLIENT_SECRET")?;

        Some(OAuthClientSettings {
            client_id,
            client_secret,
            redirect_uri: Self::redirect_uri(),
            auth_uri: env::var("GOOGLE_AUTH_URI")
                .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/auth".to_string()),
            token_uri: env::var("GOOGLE_TOKEN_URI")
                .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string()),
            userinfo_uri: env::var("GOOGLE_USERINFO_URI")
                .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v3/userinfo".to_string()),
        })
    }

    pub fn redirect_uri() -> String {
        env::var("GOOGLE_REDIRECT_URI")
            .unwrap_or_else(|_| "http://localhost:3000/auth/google/secrets".to_string())
    }
}

/// Facebook Login 설정
pub struct FacebookOAuthConfig;

impl FacebookOAuthConfig {
    /// `FACEBOOK_CLIENT_ID` / `FACEBOOK_CLIENT_SECRET` 이 모두 설정된 경우에만 `Some`.
    pub fn settings() -> Option<OAuthClientSettings> {
        let (client_id, client_secret) =
            read_client_credentials("FACEBOOK_CLIENT_ID", "FACEBOOK_CLIENT_SECRET")?;

        Some(OAuthClientSettings {
            client_id,
            client_secret,
            redirect_uri: Self::redirect_uri(),
            auth_uri: env::var("FACEBOOK_AUTH_URI")
                .unwrap_or_else(|_| "https://www.facebook.com/v19.0/dialog/oauth".to_string()),
            token_uri: env::var("FACEBOOK_TOKEN_URI")
                .unwrap_or_else(|_| "https://graph.facebook.com/v19.0/oauth/access_token".to_string()),
            userinfo_uri: env::var("FACEBOOK_USERINFO_URI")
                .unwrap_or_else(|_| "https://graph.facebook.com/me".to_string()),
        })
    }

    pub fn redirect_uri() -> String {
        env::var("FACEBOOK_REDIRECT_URI")
            .unwrap_or_else(|_| "http://localhost:3000/auth/facebook/secrets".to_string())
    }
}

/// OAuth 플로우 공통 설정
pub struct OAuthConfig;

impl OAuthConfig {
    /// OAuth state 값의 유효 시간(초). 기본값: 600
    pub fn state_ttl_seconds() -> u64 {
        env::var("OAUTH_STATE_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(600)
    }
}

/// 사용자 인증 프로바이더
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// 로컬 사용자명/비밀번호
    Local,
    /// Google OAuth 2.0
    Google,
    /// Facebook Login
    Facebook,
}

impl AuthProvider {
    /// 문자열에서 AuthProvider를 생성합니다 (대소문자 무관).
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "local" => Ok(AuthProvider::Local),
            "google" => Ok(AuthProvider::Google),
            "facebook" => Ok(AuthProvider::Facebook),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "local",
            AuthProvider::Google => "google",
            AuthProvider::Facebook => "facebook",
        }
    }

    /// 사용자 문서에서 프로바이더 ID를 저장하는 필드 이름.
    /// 로컬 프로바이더는 외부 ID가 없으므로 `None`.
    pub fn id_field(&self) -> Option<&'static str> {
        match self {
            AuthProvider::Local => None,
            AuthProvider::Google => Some("google_id"),
            AuthProvider::Facebook => Some("facebook_id"),
        }
    }
}
