//! 홈, 로그인, 회원가입, 로그아웃 페이지

use actix_web::{get, post, web, HttpResponse, ResponseError};
use actix_web::http::{header, StatusCode};
use minijinja::{context, Value};
use validator::Validate;
use crate::{
    config::{AuthProvider, AuthStrategy},
    core::AppContext,
    domain::{dto::forms::CredentialsForm, models::auth::authenticated_user::SessionContext},
    errors::errors::AppError,
    handlers::session_cookie::{redirect, removal_cookie, signed_in},
    views,
};

/// 로그인/회원가입 폼 공통 컨텍스트
fn credentials_page_context(ctx: &AppContext, error: Option<&str>, username: Option<&str>) -> Value {
    let federation = ctx.strategy.allows_federation();

    context! {
        local_enabled => ctx.strategy.allows_local_credentials(),
        google_enabled => federation && ctx.oauth.is_enabled(AuthProvider::Google),
        facebook_enabled => federation && ctx.oauth.is_enabled(AuthProvider::Facebook),
        error => error,
        username => username,
    }
}

#[get("/")]
pub async fn home() -> Result<HttpResponse, AppError> {
    views::page("home.html", context! {})
}

#[get("/login")]
pub async fn login_page(ctx: web::Data<AppContext>) -> Result<HttpResponse, AppError> {
    views::page("login.html", credentials_page_context(&ctx, None, None))
}

/// 로컬 로그인.
///
/// 실패 시 레거시 전략은 홈으로 돌려보내고, 그 외에는 같은 폼을 안내 메시지와 함께 다시 보여줍니다.
#[post("/login")]
pub async fn login(
    ctx: web::Data<AppContext>,
    form: web::Form<CredentialsForm>,
) -> Result<HttpResponse, AppError> {
    let username = form.normalized_username();

    let result = match form.validate() {
        Ok(()) => ctx.auth.login(&username, &form.password).await,
        Err(e) => Err(AppError::from(e)),
    };

    match result {
        Ok(issued) => Ok(signed_in(&issued, ctx.sessions.ttl_seconds())),
        Err(AppError::AuthenticationError(_) | AppError::ValidationError(_)) => {
            if ctx.strategy == AuthStrategy::LegacyDigest {
                return Ok(redirect("/"));
            }

            views::page_with_status(
                StatusCode::UNAUTHORIZED,
                "login.html",
                credentials_page_context(
                    &ctx,
                    Some(crate::services::auth::INVALID_CREDENTIALS),
                    Some(&username),
                ),
            )
        }
        Err(e) => Err(e),
    }
}

#[get("/register")]
pub async fn register_page(ctx: web::Data<AppContext>) -> Result<HttpResponse, AppError> {
    views::page("register.html", credentials_page_context(&ctx, None, None))
}

#[post("/register")]
pub async fn register(
    ctx: web::Data<AppContext>,
    form: web::Form<CredentialsForm>,
) -> Result<HttpResponse, AppError> {
    let username = form.normalized_username();

    let result = match form.validate() {
        Ok(()) => ctx.auth.register(&username, &form.password).await,
        Err(e) => Err(AppError::from(e)),
    };

    match result {
        Ok(issued) => Ok(signed_in(&issued, ctx.sessions.ttl_seconds())),
        Err(e @ (AppError::ConflictError(_) | AppError::ValidationError(_))) => views::page_with_status(
            e.status_code(),
            "register.html",
            credentials_page_context(&ctx, Some(&e.public_message()), Some(&username)),
        ),
        Err(e) => Err(e),
    }
}

/// 세션을 폐기하고 쿠키를 지웁니다. 저장소 오류가 있어도 항상 홈으로 리디렉션됩니다.
#[get("/logout")]
pub async fn logout(ctx: web::Data<AppContext>, session: SessionContext) -> HttpResponse {
    ctx.auth.logout(&session.state).await;

    HttpResponse::Found()
        .cookie(removal_cookie())
        .insert_header((header::LOCATION, "/"))
        .finish()
}
