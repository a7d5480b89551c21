//! 로그인 사용자 전용 시크릿 페이지

use actix_web::{get, post, web, HttpResponse};
use actix_web::http::StatusCode;
use minijinja::context;
use validator::Validate;
use crate::{
    core::AppContext,
    domain::{dto::forms::SecretForm, models::auth::authenticated_user::AuthenticatedUser},
    errors::errors::AppError,
    handlers::session_cookie::redirect,
    middlewares::SessionMiddleware,
    views,
};

/// 모든 사용자의 시크릿 (작성자 표시 없음)
#[get("/secrets", wrap = "SessionMiddleware::required()")]
pub async fn secrets_page(ctx: web::Data<AppContext>) -> Result<HttpResponse, AppError> {
    let secrets = ctx.secrets.list_secrets().await?;

    views::page("secrets.html", context! { secrets => secrets })
}

#[get("/submit", wrap = "SessionMiddleware::required()")]
pub async fn submit_page() -> Result<HttpResponse, AppError> {
    views::page("submit.html", context! {})
}

#[post("/submit", wrap = "SessionMiddleware::required()")]
pub async fn submit_secret(
    ctx: web::Data<AppContext>,
    user: AuthenticatedUser,
    form: web::Form<SecretForm>,
) -> Result<HttpResponse, AppError> {
    let result = match form.validate() {
        Ok(()) => ctx.secrets.submit_secret(&user, &form.secret).await,
        Err(e) => Err(AppError::from(e)),
    };

    match result {
        Ok(()) => Ok(redirect("/secrets")),
        Err(AppError::ValidationError(_)) => views::page_with_status(
            StatusCode::BAD_REQUEST,
            "submit.html",
            context! { error => "시크릿을 입력하세요" },
        ),
        Err(e) => Err(e),
    }
}
