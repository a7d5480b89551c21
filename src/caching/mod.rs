//! 캐싱 계층 모듈
//!
//! Redis 연결과 JSON 기반 값 직렬화를 제공합니다.
//! 세션 저장소([`crate::repositories::sessions`])가 이 클라이언트를 사용합니다.
//!
//! ```bash
//! REDIS_URL=redis://127.0.0.1:6379  # 기본값
//! ```

pub mod redis;
