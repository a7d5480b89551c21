//! # Domain Module
//!
//! 도메인 계층 모듈입니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← MongoDB 문서와 매핑되는 사용자 엔티티
//! ├── models/       ← 세션 상태, 프로바이더 신원 등 도메인 모델
//! └── dto/          ← HTML 폼 / 쿼리 파라미터
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
