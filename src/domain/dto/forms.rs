//! 폼 / 쿼리 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 로그인 및 회원가입 폼
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CredentialsForm {
    #[validate(length(min = 1, max = 254, message = "사용자명을 입력해주세요"))]
    pub username: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

impl CredentialsForm {
    /// 앞뒤 공백을 제거한 사용자명
    pub fn normalized_username(&self) -> String {
        self.username.trim().to_string()
    }
}

/// 시크릿 제출 폼
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SecretForm {
    #[validate(length(min = 1, message = "시크릿을 입력해주세요"))]
    pub secret: String,
}

/// OAuth 콜백 쿼리 파라미터.
///
/// 사용자가 동의를 거부하면 `code` 대신 `error`가 전달되므로 모두 선택 값입니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}
