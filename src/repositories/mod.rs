//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소는 트레이트 뒤에 숨겨져 있으며 애플리케이션 시작 시 구현체를 주입합니다.
//!
//! - [`users::UserStore`] - 사용자 레코드 (MongoDB)
//! - [`sessions::SessionStore`] - 세션과 OAuth state (Redis 또는 프로세스 메모리)
//!
//! # Examples
//!
//! ```rust,ignore
//! let users: Arc<dyn UserStore> = Arc::new(UserRepository::new(database));
//! let sessions: Arc<dyn SessionStore> = Arc::new(RedisSessionStore::new(redis));
//! ```

pub mod users;
pub mod sessions;
