use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::session_inner::SessionMiddlewareService;

/// 익명 요청 처리 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// 익명이면 `/login`으로 리디렉션
    Required,
    /// 익명이어도 통과
    Optional,
}

/// 세션 쿠키 해석 미들웨어
pub struct SessionMiddleware {
    mode: AuthMode,
}

impl SessionMiddleware {
    pub fn new(mode: AuthMode) -> Self {
        Self { mode }
    }

    /// 로그인이 필요한 라우트용
    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    pub fn optional() -> Self {
        Self::new(AuthMode::Optional)
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = SessionMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service: Rc::new(service),
            mode: self.mode,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{cookie::Cookie, http::{header, StatusCode}, test, web, App, HttpResponse};
    use crate::config::{AuthStrategy, SessionConfig};
    use crate::domain::models::auth::authenticated_user::SessionContext;
    use crate::test_support::TestHarness;

    async fn whoami(ctx: SessionContext) -> HttpResponse {
        match ctx.user() {
            Some(user) => HttpResponse::Ok().body(user.user_id.clone()),
            None => HttpResponse::Ok().body("anonymous"),
        }
    }

    #[actix_web::test]
    async fn test_required_mode_redirects_anonymous_to_login() {
        let h = TestHarness::new(AuthStrategy::LocalWithFederation);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(h.ctx.clone()))
                .service(web::resource("/private").wrap(SessionMiddleware::required()).to(whoami)),
        ).await;

        let req = test::TestRequest::get().uri("/private").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login");
    }

    #[actix_web::test]
    async fn test_valid_cookie_is_resolved_into_context() {
        let h = TestHarness::new(AuthStrategy::LocalWithFederation);
        let issued = h.ctx.auth.register("alice", "pw").await.unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(h.ctx.clone()))
                .wrap(SessionMiddleware::optional())
                .service(web::resource("/private").wrap(SessionMiddleware::required()).to(whoami)),
        ).await;

        let req = test::TestRequest::get()
            .uri("/private")
            .cookie(Cookie::new(SessionConfig::COOKIE_NAME, issued.token.clone()))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, issued.user_id().as_bytes());
    }

    #[actix_web::test]
    async fn test_optional_mode_passes_anonymous_through() {
        let h = TestHarness::new(AuthStrategy::LocalWithFederation);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(h.ctx.clone()))
                .wrap(SessionMiddleware::optional())
                .route("/", web::get().to(whoami)),
        ).await;

        let req = test::TestRequest::get()
            .uri("/")
            .cookie(Cookie::new(SessionConfig::COOKIE_NAME, "tampered"))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, "anonymous".as_bytes());
    }
}
