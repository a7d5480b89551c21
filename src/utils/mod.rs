//! 공통 유틸리티 모듈
//!
//! - [`display_terminal`] - 서버 시작 시 터미널 배너 출력
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::display_terminal::print_startup_banner;
//!
//! print_startup_banner(&summary);
//! ```

pub mod display_terminal;
