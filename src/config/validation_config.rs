//! 입력 검증 규칙 설정
//!
//! 사용자명 허용 패턴은 배포 환경마다 달라질 수 있으므로 환경 변수로 노출합니다.

use std::env;

/// 기본 사용자명 패턴: ASCII 영문/숫자로만 구성된 식별자
pub const DEFAULT_NAME_PATTERN: &str = "^[A-Za-z0-9]+$";

/// 검증 규칙 설정
pub struct ValidationConfig;

impl ValidationConfig {
    /// 사용자명 정규식 패턴을 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `USER_NAME_PATTERN`: 커스텀 패턴 (기본값: [`DEFAULT_NAME_PATTERN`])
    pub fn name_pattern() -> String {
        env::var("USER_NAME_PATTERN")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_NAME_PATTERN.to_string())
    }
}
