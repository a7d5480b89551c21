//! 시크릿 제출과 조회

pub mod secret_service;

pub use secret_service::*;
