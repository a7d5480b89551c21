//! # HTTP Request Handlers Module
//!
//! 브라우저 요청을 처리하고 HTML 페이지 또는 리디렉션으로 응답하는 핸들러입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Browser (폼 POST, 링크, 쿠키)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) + views                    ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services (AppContext)                         ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   UserStore / SessionStore                      ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 응답 규칙
//!
//! - 성공한 로그인/가입/프로바이더 콜백: 세션 쿠키 + `302 /secrets`
//! - 로그인이 필요한 페이지의 익명 요청: `302 /login`
//! - 사용자 입력 오류: 폼을 안내 메시지와 함께 다시 렌더링
//! - 저장소 장애: HTML 에러 페이지 (`AppError`의 `ResponseError` 구현)
//!
//! 서비스는 `web::Data<AppContext>`로, 세션은 [`SessionContext`](crate::domain::SessionContext)
//! 또는 [`AuthenticatedUser`](crate::domain::AuthenticatedUser) 추출자로 받습니다.

pub mod pages;
pub mod secrets;
pub mod oauth;
pub mod session_cookie;
