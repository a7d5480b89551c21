//! # Redis 클라이언트
//!
//! 세션과 OAuth state 값을 저장하는 Redis 클라이언트입니다.
//! 값은 JSON으로 직렬화하여 TTL과 함께 저장합니다.
//!
//! 연결은 `ConnectionManager`를 사용해 하나의 멀티플렉싱 연결을 공유하며,
//! 연결이 끊기면 자동으로 재연결합니다.

use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use serde::{de::DeserializeOwned, Serialize};
use crate::config::SessionConfig;

#[derive(Clone)]
pub struct RedisClient {
    manager: ConnectionManager,
}

impl RedisClient {
    /// `REDIS_URL`로 연결하고 `PING`으로 서버 가용성을 확인합니다.
    pub async fn new() -> Result<Self, redis::RedisError> {
        Self::connect(&SessionConfig::redis_url()).await
    }

    pub async fn connect(redis_url: &str) -> Result<Self, redis::RedisError> {
        let client = Client::open(redis_url)?;
        let mut manager = ConnectionManager::new(client).await?;

        redis::cmd("PING").query_async::<()>(&mut manager).await?;

        log::info!("✅ Redis 연결 성공");

        Ok(Self { manager })
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.manager.clone();
        let value: Option<String> = conn.get(key).await?;

        value.map(|json| deserialize(&json)).transpose()
    }

    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: u64) -> Result<(), redis::RedisError> {
        let mut conn = self.manager.clone();
        let json = serde_json::to_string(value)
            .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string())))?;
        conn.set_ex(key, json, seconds).await
    }

    /// 값을 읽고 즉시 삭제합니다 (`GETDEL`). 일회용 값에 사용합니다.
    pub async fn take<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.manager.clone();
        let value: Option<String> = conn.get_del(key).await?;

        value.map(|json| deserialize(&json)).transpose()
    }

    pub async fn del(&self, key: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.manager.clone();
        conn.del(key).await
    }
}

fn deserialize<T: DeserializeOwned>(json: &str) -> Result<T, redis::RedisError> {
    serde_json::from_str(json)
        .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Deserialization failed", e.to_string())))
}
