//! Database Connection Management Module
//!
//! 사용자 레코드를 저장하는 MongoDB 연결을 관리합니다.
//!
//! # 환경 변수 설정
//!
//! ```bash
//! export MONGODB_URI="mongodb://127.0.0.1:27017"
//! export DATABASE_NAME="userDB"
//! ```

use mongodb::{bson::doc, options::ClientOptions, Client};
use log::info;
use crate::config::DatabaseConfig;
use crate::errors::errors::AppError;

/// MongoDB 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 환경 설정으로 MongoDB에 연결하고 `ping`으로 연결 상태를 확인합니다.
    pub async fn new() -> Result<Self, AppError> {
        Self::connect(&DatabaseConfig::uri(), &DatabaseConfig::database_name()).await
    }

    pub async fn connect(uri: &str, database_name: &str) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(uri).await?;
        client_options.app_name = Some("secrets_gateway".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(database_name)
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    /// 리포지토리에서 컬렉션에 접근할 때 사용하는 `mongodb::Database`
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }
}
