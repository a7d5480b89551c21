//! Google / Facebook 로그인 리디렉션과 콜백
//!
//! 콜백 URL은 `/auth/{provider}/secrets`이며 프로바이더 콘솔에 같은 주소로 등록되어 있어야 합니다.

use actix_web::{get, web, HttpResponse};
use crate::{
    config::AuthProvider,
    core::AppContext,
    domain::dto::forms::OAuthCallbackQuery,
    errors::errors::AppError,
    handlers::session_cookie::{redirect, signed_in},
};

/// 경로의 프로바이더 이름을 해석합니다. 로컬이거나 설정되지 않았으면 `None`.
fn enabled_provider(ctx: &AppContext, name: &str) -> Option<AuthProvider> {
    match AuthProvider::from_str(name) {
        Ok(AuthProvider::Local) | Err(_) => None,
        Ok(provider) if ctx.oauth.is_enabled(provider) => Some(provider),
        Ok(provider) => {
            log::warn!("설정되지 않은 프로바이더로 로그인 시도: {}", provider.as_str());
            None
        }
    }
}

#[get("/auth/{provider}")]
pub async fn oauth_begin(
    ctx: web::Data<AppContext>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let Some(provider) = enabled_provider(&ctx, &path) else {
        return Ok(redirect("/login"));
    };

    let authorization_url = ctx.oauth.begin(provider).await?;

    Ok(redirect(&authorization_url))
}

/// 프로바이더 콜백.
///
/// 핸드셰이크 실패는 `/login`으로, 저장소 장애는 에러 페이지로 끝납니다.
#[get("/auth/{provider}/secrets")]
pub async fn oauth_callback(
    ctx: web::Data<AppContext>,
    path: web::Path<String>,
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    let Some(provider) = enabled_provider(&ctx, &path) else {
        return Ok(redirect("/login"));
    };

    let identity = match ctx.oauth.complete(provider, &query).await {
        Ok(identity) => identity,
        Err(e @ (AppError::AuthenticationError(_) | AppError::ExternalServiceError(_))) => {
            log::warn!("{} 로그인 실패: {}", provider.as_str(), e);
            return Ok(redirect("/login"));
        }
        Err(e) => return Err(e),
    };

    let (outcome, issued) = ctx.auth.authenticate_with_provider(&identity).await?;

    log::info!(
        "{} 로그인: user={} ({})",
        provider.as_str(),
        issued.user_id(),
        if outcome.was_created() { "신규" } else { "기존" }
    );

    Ok(signed_in(&issued, ctx.sessions.ttl_seconds()))
}
