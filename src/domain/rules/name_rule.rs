//! # 사용자명 검증 규칙
//!
//! 사용자명이 설정된 정규식과 완전히 일치하는지 확인합니다.
//! 순수 함수이며 부수 효과가 없습니다.
//!
//! ```rust,ignore
//! let rule = NameRule::default();
//! rule.check("alice")?;          // Ok(())
//! rule.check("alice!")?;         // Err(ValidationError { field_name: "name", field_value: "alice!" })
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use crate::config::DEFAULT_NAME_PATTERN;
use crate::core::errors::{AppError, AppResult};

/// 검증 실패 시 보고되는 필드 이름
pub const NAME_FIELD: &str = "name";

static DEFAULT_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(DEFAULT_NAME_PATTERN).expect("기본 사용자명 패턴은 유효한 정규식이어야 합니다")
});

/// 사용자명 검증 규칙
#[derive(Debug, Clone)]
pub struct NameRule {
    pattern: Regex,
}

impl NameRule {
    /// 주어진 패턴으로 규칙을 생성합니다.
    ///
    /// 패턴이 `^...$`로 고정되어 있지 않아도 전체 일치로 검사합니다.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let anchored = format!("^(?:{})$", pattern);
        Ok(Self {
            pattern: Regex::new(&anchored)?,
        })
    }

    /// 사용자명을 검사합니다.
    ///
    /// 패턴과 일치하지 않으면 필드명 `name`과 원래 값을 담은 검증 에러를 반환합니다.
    pub fn check(&self, name: &str) -> AppResult<()> {
        if self.pattern.is_match(name) {
            Ok(())
        } else {
            Err(AppError::invalid_field(NAME_FIELD, name))
        }
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for NameRule {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_NAME_REGEX.clone(),
        }
    }
}
