//! # Domain Models Module
//!
//! 영속화되지 않거나 세션 저장소에만 저장되는 도메인 모델입니다.
//!
//! - [`auth`] - 세션, 세션 상태 머신, 요청별 세션 컨텍스트
//! - [`oauth`] - 외부 프로바이더 신원과 find-or-create 결과, 프로바이더 응답 모델

pub mod auth;
pub mod oauth;

pub use auth::*;
pub use oauth::*;
