//! # Configuration Module
//!
//! 서비스 설정 관리를 담당하는 모듈입니다.
//! 모든 설정값은 환경 변수에서 읽으며, 개발 환경에서 바로 실행할 수 있도록
//! 로컬 개발 호스트 기준의 기본값을 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 데이터베이스, 레이트 리밋, 비밀번호 해싱 설정
//! - [`auth_config`] - 인증 전략, 세션, OAuth 프로바이더 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버
//! export HOST="127.0.0.1"
//! export PORT="3000"
//!
//! # 저장소
//! export MONGODB_URI="mongodb://127.0.0.1:27017"
//! export DATABASE_NAME="userDB"
//! export REDIS_URL="redis://127.0.0.1:6379"
//!
//! # 인증
//! export AUTH_STRATEGY="local"      # legacy | local | federated
//! export SESSION_SECRET="change-me"
//!
//! # OAuth (설정하지 않으면 해당 프로바이더 비활성화)
//! export GOOGLE_CLIENT_ID="..."
//! export GOOGLE_CLIENT_SECRET="..."
//! export FACEBOOK_CLIENT_ID="..."
//! export FACEBOOK_CLIENT_SECRET="..."
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
