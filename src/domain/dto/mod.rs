//! # Data Transfer Objects
//!
//! HTML 폼(`application/x-www-form-urlencoded`)과 OAuth 콜백 쿼리 파라미터를
//! 매핑하는 구조체들입니다. `validator`로 입력값을 검증합니다.

pub mod forms;

pub use forms::*;
