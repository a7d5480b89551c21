//! 서버 시작 배너

use crate::config::{AuthProvider, AuthStrategy, SessionStoreKind};

/// 배너에 표시할 구동 설정
#[derive(Debug, Clone)]
pub struct StartupSummary {
    pub bind_address: String,
    pub strategy: AuthStrategy,
    pub session_store: SessionStoreKind,
    pub providers: Vec<AuthProvider>,
    pub workers: usize,
}

pub fn boxed_title(title: &str) -> String {
    // 박스 내부 50칸 고정
    let border = "═".repeat(50);
    format!("╔{}╗\n║{:^50}║\n╚{}╝", border, title, border)
}

pub fn startup_banner(summary: &StartupSummary) -> String {
    let providers = if summary.providers.is_empty() {
        "(없음)".to_string()
    } else {
        summary.providers
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let store = match summary.session_store {
        SessionStoreKind::Redis => "redis",
        SessionStoreKind::Memory => "memory",
    };

    let lines = [
        boxed_title("🔐 SECRETS GATEWAY"),
        format!("   ├─ 주소: http://{}", summary.bind_address),
        format!("   ├─ 인증 전략: {}", summary.strategy.as_str()),
        format!("   ├─ 세션 저장소: {}", store),
        format!("   ├─ 외부 로그인: {}", providers),
        format!("   └─ 워커: {}", summary.workers),
    ];

    lines.join("\n")
}

pub fn print_startup_banner(summary: &StartupSummary) {
    println!();
    println!("{}", startup_banner(summary));
    println!();
}
