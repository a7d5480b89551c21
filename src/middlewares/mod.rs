//! 미들웨어 모듈
//!
//! # 제공 미들웨어
//!
//! ### 세션 미들웨어 (SessionMiddleware)
//! - 세션 쿠키를 요청당 한 번 해석해 [`SessionContext`](crate::domain::SessionContext)로 저장
//! - 선택적/필수 모드 지원. 필수 모드의 익명 요청은 `/login`으로 리디렉션
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use crate::middlewares::SessionMiddleware;
//!
//! App::new()
//!     .app_data(web::Data::new(ctx))
//!     .wrap(SessionMiddleware::optional())   // 모든 페이지에서 로그인 여부 확인
//!     .service(secrets_page)                 // #[get("/secrets", wrap = "SessionMiddleware::required()")]
//! ```

pub mod session_middleware;
mod session_inner;

pub use session_middleware::{AuthMode, SessionMiddleware};
