//! # Core Module
//!
//! 애플리케이션 구성 요소를 조립하는 모듈입니다.
//!
//! 전역 레지스트리 없이 시작 시점에 저장소 구현체를 골라 서비스에 주입하고,
//! 그 결과인 [`AppContext`]를 `web::Data`로 모든 워커에 공유합니다.
//!
//! ```text
//! main
//!  ├─ Database / RedisClient 연결
//!  ├─ UserRepository, SessionStore 구현체 선택 (SESSION_STORE)
//!  └─ AppContext::from_config(strategy, users, sessions)
//!        ├─ SessionService
//!        ├─ AuthService (+ 전략별 PasswordHasher)
//!        ├─ SecretService
//!        └─ OAuthService (+ 설정된 IdentityProvider)
//! ```

pub mod context;

pub use context::*;
