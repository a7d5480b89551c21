//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 에러를
//! 페이지 응답(HTML 에러 페이지 또는 리디렉션)으로 변환합니다.
//! 이 서비스는 JSON 에러 페이로드를 반환하지 않습니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | 응답 |
//! |----------|------|
//! | `Unauthenticated` | 302 → `/login` |
//! | `ValidationError` | 400 에러 페이지 |
//! | `AuthenticationError` | 401 에러 페이지 |
//! | `NotFound` | 404 에러 페이지 |
//! | `ConflictError` | 409 에러 페이지 |
//! | 그 외 | 500 에러 페이지 |
//!
//! 저장소 장애도 반드시 명시적인 500 응답으로 끝나며, 요청이 응답 없이
//! 방치되는 경우는 없습니다.

use actix_web::http::{header, StatusCode};
use actix_web::HttpResponse;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 사용자 저장소(MongoDB) 에러
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 세션 저장소(Redis 등) 에러
    #[error("Session store error: {0}")]
    SessionStoreError(String),

    /// 입력값 검증 에러
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// 중복 가입 등 충돌
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 자격 증명 불일치, OAuth 실패
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 세션이 필요한 경로에 익명 사용자가 접근함
    #[error("Authentication required")]
    Unauthenticated,

    /// 외부 서비스(OAuth 프로바이더) 에러
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Template error: {0}")]
    TemplateError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 사용자에게 노출해도 되는 메시지.
    ///
    /// 서버 내부 에러는 상세 내용을 숨기고 로그에만 남깁니다.
    pub fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg) => msg.clone(),
            AppError::Unauthenticated => "로그인이 필요합니다".to_string(),
            _ => "요청을 처리하는 중 오류가 발생했습니다".to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated => StatusCode::FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 에러를 HTML 페이지 또는 로그인 리디렉션으로 변환합니다.
    fn error_response(&self) -> HttpResponse {
        if let AppError::Unauthenticated = self {
            return HttpResponse::Found()
                .insert_header((header::LOCATION, "/login"))
                .finish();
        }

        let status = self.status_code();
        if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        let body = crate::views::render_error_page(status, &self.public_message());

        HttpResponse::build(status)
            .content_type(header::ContentType::html())
            .body(body)
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 문맥이 붙은 `InternalError`로 바꿉니다.
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::SessionStoreError(e.to_string())
    }
}

impl From<minijinja::Error> for AppError {
    fn from(e: minijinja::Error) -> Self {
        AppError::TemplateError(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::ValidationError(e.to_string())
    }
}
