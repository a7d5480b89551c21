//! 라우트 설정 모듈
//!
//! 인증 전략에 따라 마운트되는 라우트가 달라집니다.
//!
//! | 라우트 | `legacy` | `local` | `federated` |
//! |--------|:--------:|:-------:|:-----------:|
//! | `GET /`, `GET /login`, `GET /register`, `GET /logout` | ✓ | ✓ | ✓ |
//! | `POST /login`, `POST /register` | ✓ | ✓ | |
//! | `GET /secrets`, `GET|POST /submit` (로그인 필요) | ✓ | ✓ | ✓ |
//! | `GET /auth/{provider}`, `GET /auth/{provider}/secrets` | | ✓ | ✓ |
//! | `GET /health` | ✓ | ✓ | ✓ |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let strategy = AuthStrategy::current();
//! let app = App::new().configure(|cfg| configure_routes(cfg, strategy));
//! ```

use crate::config::AuthStrategy;
use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 전략에 맞는 모든 라우트를 등록합니다.
pub fn configure_routes(cfg: &mut web::ServiceConfig, strategy: AuthStrategy) {
    cfg.service(health_check);

    configure_page_routes(cfg, strategy);
    configure_secret_routes(cfg);

    if strategy.allows_federation() {
        configure_oauth_routes(cfg);
    }
}

fn configure_page_routes(cfg: &mut web::ServiceConfig, strategy: AuthStrategy) {
    cfg.service(handlers::pages::home)
        .service(handlers::pages::login_page)
        .service(handlers::pages::register_page)
        .service(handlers::pages::logout);

    if strategy.allows_local_credentials() {
        cfg.service(handlers::pages::login)
            .service(handlers::pages::register);
    }
}

/// 세 라우트 모두 핸들러 수준에서 `SessionMiddleware::required()`가 적용되어 있습니다.
fn configure_secret_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::secrets::secrets_page)
        .service(handlers::secrets::submit_page)
        .service(handlers::secrets::submit_secret);
}

/// 콜백 경로가 더 구체적이므로 먼저 등록합니다.
fn configure_oauth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::oauth::oauth_callback)
        .service(handlers::oauth::oauth_begin);
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:3000/health
/// ```
#[actix_web::get("/health")]
async fn health_check(ctx: web::Data<crate::core::AppContext>) -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "secrets_gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "auth_strategy": ctx.strategy.as_str(),
    }))
}
