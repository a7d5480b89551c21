use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::config::SessionConfig;
use crate::core::AppContext;
use crate::domain::models::auth::authenticated_user::SessionContext;
use crate::middlewares::session_middleware::AuthMode;

pub struct SessionMiddlewareService<S> {
    pub service: Rc<S>,
    pub mode: AuthMode,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let mode = self.mode;

        Box::pin(async move {
            // 바깥 미들웨어가 이미 해석했으면 재사용
            let existing = req.extensions().get::<SessionContext>().cloned();
            let session = match existing {
                Some(session) => session,
                None => {
                    let session = resolve_session(&req).await;
                    req.extensions_mut().insert(session.clone());
                    session
                }
            };

            if mode == AuthMode::Required && session.user().is_none() {
                log::debug!("로그인 필요: {} → /login", req.path());
                let response = HttpResponse::Found()
                    .insert_header((header::LOCATION, "/login"))
                    .finish();
                let (req, _) = req.into_parts();
                return Ok(ServiceResponse::new(req, response).map_into_right_body());
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

async fn resolve_session(req: &ServiceRequest) -> SessionContext {
    let Some(ctx) = req.app_data::<web::Data<AppContext>>() else {
        log::error!("AppContext가 등록되지 않아 세션을 해석할 수 없습니다");
        return SessionContext::anonymous();
    };

    let token = req
        .cookie(SessionConfig::COOKIE_NAME)
        .map(|cookie| cookie.value().to_string());

    SessionContext {
        state: ctx.sessions.resolve(token.as_deref()).await,
    }
}
