//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 MongoDB 구현체입니다.
//!
//! ## 인덱스
//!
//! - `username` - 조회용 일반 인덱스. 레거시 전략은 중복 가입을 허용하므로 유니크가 아닙니다.
//! - `unique_username` - 유니크 + sparse. 유니크 사용자명 전략으로 만든 레코드에만 존재하므로
//!   동시 가입 경쟁에서도 같은 이름은 하나만 남습니다.
//! - `google_id`, `facebook_id` - 유니크 + sparse. 동시에 같은 프로바이더 ID로 생성이
//!   시도되어도 레코드는 하나만 남습니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::{
    config::AuthProvider,
    db::Database,
    domain::entities::users::user::User,
    errors::errors::AppError,
};
use super::UserStore;

const COLLECTION_NAME: &str = "users";
const DUPLICATE_KEY_CODE: i32 = 11000;

pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(COLLECTION_NAME)
    }

    fn parse_id(id: &str) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .name("username_lookup".to_string())
                .build())
            .build();

        let unique_username_index = IndexModel::builder()
            .keys(doc! { "unique_username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .sparse(true)
                .name("unique_username_unique".to_string())
                .build())
            .build();

        let google_index = IndexModel::builder()
            .keys(doc! { "google_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .sparse(true)
                .name("google_id_unique".to_string())
                .build())
            .build();

        let facebook_index = IndexModel::builder()
            .keys(doc! { "facebook_id": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .sparse(true)
                .name("facebook_id_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([username_index, unique_username_index, google_index, facebook_index])
            .await?;

        log::info!("✅ users 컬렉션 인덱스 준비 완료");
        Ok(())
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self.collection()
            .find_one(doc! { "username": username })
            .await?)
    }

    async fn find_by_provider_id(
        &self,
        provider: AuthProvider,
        provider_user_id: &str,
    ) -> Result<Option<User>, AppError> {
        let field = provider.id_field().ok_or_else(|| {
            AppError::ValidationError("로컬 계정은 프로바이더 ID가 없습니다".to_string())
        })?;

        Ok(self.collection()
            .find_one(doc! { field: provider_user_id })
            .await?)
    }

    async fn insert(&self, mut user: User) -> Result<User, AppError> {
        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError("이미 등록된 계정입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        let inserted_id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("삽입된 문서의 ID가 ObjectId가 아닙니다".to_string())
        })?;
        user.id = Some(inserted_id);

        Ok(user)
    }

    async fn update_secret(&self, id: &str, secret: &str) -> Result<bool, AppError> {
        let object_id = Self::parse_id(id)?;

        let result = self.collection()
            .update_one(
                doc! { "_id": object_id },
                doc! { "$set": { "secret": secret, "updated_at": DateTime::now() } },
            )
            .await?;

        Ok(result.matched_count > 0)
    }

    async fn find_secrets(&self) -> Result<Vec<String>, AppError> {
        let documents: Vec<Document> = self.db
            .get_database()
            .collection::<Document>(COLLECTION_NAME)
            .find(doc! { "secret": { "$exists": true, "$ne": null } })
            .projection(doc! { "secret": 1, "_id": 0 })
            .await?
            .try_collect()
            .await?;

        Ok(documents
            .iter()
            .filter_map(|document| document.get_str("secret").ok())
            .map(str::to_string)
            .collect())
    }
}
