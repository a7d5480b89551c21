//! 서버 사이드 페이지 렌더링
//!
//! `minijinja` 템플릿을 바이너리에 포함(`include_str!`)하여 렌더링합니다.
//! 템플릿 이름이 `.html`로 끝나므로 모든 값은 자동으로 HTML 이스케이프됩니다.

use actix_web::http::{header::ContentType, StatusCode};
use actix_web::HttpResponse;
use minijinja::{context, Environment, Value};
use once_cell::sync::Lazy;
use crate::errors::errors::AppError;

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../templates/layout.html")),
    ("home.html", include_str!("../../templates/home.html")),
    ("login.html", include_str!("../../templates/login.html")),
    ("register.html", include_str!("../../templates/register.html")),
    ("secrets.html", include_str!("../../templates/secrets.html")),
    ("submit.html", include_str!("../../templates/submit.html")),
    ("error.html", include_str!("../../templates/error.html")),
];

/// 템플릿 환경. 템플릿 구문 오류는 렌더링 시점에 `TemplateError`로 드러납니다.
static ENVIRONMENT: Lazy<Result<Environment<'static>, minijinja::Error>> = Lazy::new(|| {
    let mut env = Environment::new();
    for &(name, source) in TEMPLATES {
        env.add_template(name, source)?;
    }
    Ok(env)
});

/// 템플릿을 문자열로 렌더링합니다.
pub fn render(name: &str, ctx: Value) -> Result<String, AppError> {
    let env = ENVIRONMENT
        .as_ref()
        .map_err(|e| AppError::TemplateError(e.to_string()))?;

    Ok(env.get_template(name)?.render(ctx)?)
}

/// 템플릿을 렌더링하여 `200 OK` HTML 응답을 만듭니다.
pub fn page(name: &str, ctx: Value) -> Result<HttpResponse, AppError> {
    page_with_status(StatusCode::OK, name, ctx)
}

pub fn page_with_status(status: StatusCode, name: &str, ctx: Value) -> Result<HttpResponse, AppError> {
    let body = render(name, ctx)?;

    Ok(HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(body))
}

/// 에러 페이지 본문. 템플릿 렌더링 자체가 실패하면 일반 텍스트로 대체합니다.
pub fn render_error_page(status: StatusCode, message: &str) -> String {
    let ctx = context! {
        status => status.as_u16(),
        reason => status.canonical_reason().unwrap_or("Error"),
        message => message,
    };

    match render("error.html", ctx) {
        Ok(html) => html,
        Err(e) => {
            log::error!("에러 페이지 렌더링 실패: {}", e);
            format!("{} {}", status.as_u16(), status.canonical_reason().unwrap_or("Error"))
        }
    }
}
