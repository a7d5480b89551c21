//! # 비밀번호 해싱
//!
//! 자격 증명 저장 방식은 [`PasswordHasher`] 트레이트 뒤에 있으며,
//! 인증 전략에 따라 구현체가 주입됩니다.
//!
//! | 구현체 | 전략 | 솔트 | 저장 형식 |
//! |--------|------|------|-----------|
//! | [`BcryptHasher`] | `local`, `federated` | 사용자별 무작위 | `$2b$<cost>$...` |
//! | [`LegacyDigestHasher`] | `legacy` | 없음 | SHA-256 hex |
//!
//! `LegacyDigestHasher`는 같은 비밀번호가 항상 같은 값으로 저장되므로
//! 기존 레거시 데이터와의 호환 목적 외에는 사용하지 않습니다.

use sha2::{Digest, Sha256};
use crate::config::{AuthStrategy, PasswordConfig};
use crate::errors::errors::{AppError, AppResult, ErrorContext};

pub trait PasswordHasher: Send + Sync {
    /// 로그에 남기는 스킴 이름
    fn scheme(&self) -> &'static str;

    fn hash(&self, plain: &str) -> Result<String, AppError>;

    /// 저장된 값이 손상된 경우에도 에러 대신 `false`를 반환합니다.
    fn verify(&self, plain: &str, stored: &str) -> bool;
}

/// 전략에 맞는 해셔 생성
pub fn hasher_for(strategy: AuthStrategy) -> Box<dyn PasswordHasher> {
    match strategy {
        AuthStrategy::LegacyDigest => Box::new(LegacyDigestHasher),
        AuthStrategy::LocalWithFederation | AuthStrategy::FederatedOnly => {
            Box::new(BcryptHasher::new(PasswordConfig::bcrypt_cost()))
        }
    }
}

/// 솔트 없는 단방향 다이제스트
pub struct LegacyDigestHasher;

impl PasswordHasher for LegacyDigestHasher {
    fn scheme(&self) -> &'static str {
        "legacy-sha256"
    }

    fn hash(&self, plain: &str) -> Result<String, AppError> {
        Ok(format!("{:x}", Sha256::digest(plain.as_bytes())))
    }

    fn verify(&self, plain: &str, stored: &str) -> bool {
        match self.hash(plain) {
            Ok(digest) => digest == stored,
            Err(_) => false,
        }
    }
}

/// bcrypt 솔트 해시
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl PasswordHasher for BcryptHasher {
    fn scheme(&self) -> &'static str {
        "bcrypt"
    }

    fn hash(&self, plain: &str) -> AppResult<String> {
        bcrypt::hash(plain, self.cost).context("비밀번호 해싱 실패")
    }

    fn verify(&self, plain: &str, stored: &str) -> bool {
        match bcrypt::verify(plain, stored) {
            Ok(valid) => valid,
            Err(e) => {
                log::warn!("저장된 비밀번호 해시를 검증할 수 없습니다: {}", e);
                false
            }
        }
    }
}
