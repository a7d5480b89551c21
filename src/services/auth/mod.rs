//! 인증 및 세션 서비스 모듈
//!
//! # Features
//!
//! - 전략별 비밀번호 해싱 ([`PasswordHasher`])
//! - 서명된 세션 토큰 + 서버측 세션 레코드 ([`SessionService`])
//! - 로컬/프로바이더 인증 게이트웨이 ([`AuthService`])
//! - OAuth 2.0 Authorization Code 플로우 ([`OAuthService`])
//!
//! # Security
//!
//! - 사용자별 솔트 bcrypt 해시 (기본값)
//! - HMAC-SHA256 세션 토큰 서명
//! - 일회용 OAuth state로 CSRF 방지
//! - 로그인 실패 사유를 구분하지 않는 응답

pub mod password_hasher;
pub mod session_service;
pub mod auth_service;
pub mod oauth_service;

pub use password_hasher::*;
pub use session_service::*;
pub use auth_service::*;
pub use oauth_service::*;
