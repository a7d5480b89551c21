//! Users Entity Module
//!
//! 로컬 계정(사용자명 + 비밀번호 해시)과 외부 프로바이더 계정(프로바이더 ID)을
//! 하나의 문서 구조로 표현하는 `User` 엔티티를 포함합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! let local = User::new_local("user@example.com".to_string(), password_hash);
//! let federated = User::new_federated(&identity);
//! ```

pub mod user;
