//! 시크릿 게이트웨이
//!
//! 사용자가 익명 비밀글을 올리고, 로그인한 사용자끼리 모든 비밀글을 열람하는
//! 웹 서비스입니다. 인증 전략은 실행 시 하나를 선택합니다.
//!
//! # Features
//!
//! - **레거시 전략**: SHA-256 다이제스트 비밀번호, 중복 사용자명 허용 (호환용)
//! - **로컬 전략**: bcrypt 비밀번호, 유니크 사용자명, Google/Facebook 로그인 병행
//! - **연동 전략**: Google/Facebook 로그인만 허용
//! - **세션**: 서명된 쿠키 + 저장소(Redis 또는 메모리) 검증
//! - **MongoDB**: 사용자 및 비밀글 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← 페이지 및 폼 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 폼 처리, 템플릿 렌더링, 리다이렉트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 인증 전략, 세션, 비밀글
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore / SessionStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use secrets_gateway::config::AuthStrategy;
//! use secrets_gateway::core::AppContext;
//!
//! let ctx = AppContext::from_config(AuthStrategy::current(), users, session_store);
//! let (outcome, session) = ctx.auth
//!     .authenticate_with_provider(&identity)
//!     .await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
pub mod views;

#[cfg(test)]
mod test_support;
