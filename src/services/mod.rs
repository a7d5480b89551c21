//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 트레이트 객체를 생성자로 주입받으며,
//! 애플리케이션 시작 시 [`crate::core::AppContext`]에 묶여 핸들러로 전달됩니다.
//!
//! # Features
//!
//! - 로컬 가입/로그인과 비밀번호 해싱 전략
//! - 세션 발급, 해석, 폐기
//! - Google / Facebook OAuth 2.0 로그인
//! - 시크릿 제출과 목록 조회
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::AuthService;
//!
//! let issued = ctx.auth.login("alice", "pw").await?;
//! let secrets = ctx.secrets.list_secrets().await?;
//! ```

pub mod auth;
pub mod secrets;
