//! 세션 쿠키와 리디렉션 응답

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::http::header;
use actix_web::HttpResponse;
use crate::config::{Environment, SessionConfig};
use crate::domain::models::auth::session::IssuedSession;

/// 세션 토큰을 담는 쿠키. 운영 환경에서는 HTTPS 전용입니다.
pub fn session_cookie(issued: &IssuedSession, ttl_seconds: u64) -> Cookie<'static> {
    Cookie::build(SessionConfig::COOKIE_NAME, issued.token.clone())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(Environment::current() == Environment::Production)
        .max_age(Duration::seconds(ttl_seconds as i64))
        .finish()
}

/// 브라우저의 세션 쿠키를 지우는 쿠키
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SessionConfig::COOKIE_NAME, "")
        .path("/")
        .http_only(true)
        .finish();
    cookie.make_removal();
    cookie
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// 로그인 성공: 쿠키를 심고 `/secrets`로 보냅니다.
pub fn signed_in(issued: &IssuedSession, ttl_seconds: u64) -> HttpResponse {
    HttpResponse::Found()
        .cookie(session_cookie(issued, ttl_seconds))
        .insert_header((header::LOCATION, "/secrets"))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthProvider;
    use crate::domain::models::auth::session::Session;

    fn issued() -> IssuedSession {
        IssuedSession {
            session: Session::new("sid".to_string(), "uid".to_string(), AuthProvider::Local, 60),
            token: "signed.token.value".to_string(),
        }
    }

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie(&issued(), 3600);

        assert_eq!(cookie.name(), SessionConfig::COOKIE_NAME);
        assert_eq!(cookie.value(), "signed.token.value");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(3600)));
    }

    #[test]
    fn test_signed_in_redirects_to_secrets_with_cookie() {
        let response = signed_in(&issued(), 60);

        assert_eq!(response.status(), actix_web::http::StatusCode::FOUND);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/secrets");
        assert!(response.cookies().any(|c| c.name() == SessionConfig::COOKIE_NAME));
    }

    #[test]
    fn test_removal_cookie_expires_immediately() {
        let cookie = removal_cookie();

        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }
}
