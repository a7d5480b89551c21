//! 인증 상태 모델

pub mod authenticated_user;
pub mod session;

pub use authenticated_user::*;
pub use session::*;
