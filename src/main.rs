//! 시크릿 게이트웨이 메인 애플리케이션
//!
//! 저장소 연결과 인증 전략에 맞는 서비스 구성을 마친 뒤 Actix-web 서버를 구동합니다.

use std::io;
use std::sync::Arc;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use secrets_gateway::caching::redis::RedisClient;
use secrets_gateway::config::{AuthStrategy, RateLimitConfig, ServerConfig, SessionConfig, SessionStoreKind};
use secrets_gateway::core::AppContext;
use secrets_gateway::db::Database;
use secrets_gateway::errors::AppError;
use secrets_gateway::middlewares::SessionMiddleware;
use secrets_gateway::repositories::sessions::{MemorySessionStore, RedisSessionStore, SessionStore};
use secrets_gateway::repositories::users::UserRepository;
use secrets_gateway::routes::configure_routes;
use secrets_gateway::utils::display_terminal::{print_startup_banner, StartupSummary};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    let strategy = AuthStrategy::current();
    info!("🚀 시크릿 게이트웨이 시작중... (전략: {})", strategy.as_str());

    let ctx = initialize_context(strategy).await.map_err(|e| {
        error!("❌ 서비스 초기화 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(ctx).await
}

/// 저장소에 연결하고 전략에 맞는 [`AppContext`]를 만듭니다.
///
/// 세션 저장소는 `SESSION_STORE`에 따라 Redis 또는 프로세스 메모리를 사용합니다.
/// 사용자 인덱스 생성 실패는 기록만 하고 계속 진행합니다.
async fn initialize_context(strategy: AuthStrategy) -> Result<AppContext, AppError> {
    info!("📡 데이터베이스 연결 중...");

    let database = Arc::new(Database::new().await?);
    let users = UserRepository::new(database);

    if let Err(e) = users.create_indexes().await {
        error!("users 인덱스 생성 실패: {}", e);
    }

    let session_store: Arc<dyn SessionStore> = match SessionConfig::store_kind() {
        SessionStoreKind::Redis => {
            let redis = RedisClient::new().await?;
            Arc::new(RedisSessionStore::new(redis))
        }
        SessionStoreKind::Memory => {
            warn!("⚠️ 메모리 세션 저장소 사용: 재시작 시 모든 세션이 사라집니다");
            Arc::new(MemorySessionStore::new())
        }
    };

    Ok(AppContext::from_config(strategy, Arc::new(users), session_store))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 레이트 리밋, 로깅, 경로 정규화, 세션 해석 미들웨어를 적용합니다.
/// 라우트는 선택된 인증 전략이 허용하는 것만 등록됩니다.
///
/// # Errors
///
/// * `std::io::Error` - 레이트 리밋 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(ctx: AppContext) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();
    let workers = ServerConfig::workers();
    let strategy = ctx.strategy;

    print_startup_banner(&StartupSummary {
        bind_address: bind_address.clone(),
        strategy,
        session_store: SessionConfig::store_kind(),
        providers: ctx.oauth.enabled_providers(),
        workers,
    });

    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "Rate Limiting 설정값이 올바르지 않습니다")
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let app_context = web::Data::new(ctx);

    HttpServer::new(move || {
        App::new()
            .app_data(app_context.clone())
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            // 모든 요청에 세션 컨텍스트 부착 (가드 없음)
            .wrap(SessionMiddleware::optional())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(move |cfg| configure_routes(cfg, strategy))
    })
        .bind(bind_address)?
        .workers(workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}
