//! CLI 설정

use std::env;

use dbs_sql::Dialect;

/// CLI 설정
///
/// 환경변수(`.env` 포함)에서 읽고, 명령행 옵션이 있으면 덮어씁니다.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// 기본 SQL 방언
    pub dialect: Dialect,

    /// CREATE TABLE에 IF NOT EXISTS 사용
    pub if_not_exists: bool,
}

impl Config {
    /// 환경변수에서 설정 로드
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            dialect: env::var("DBS_DIALECT")
                .unwrap_or_else(|_| "postgres".to_string())
                .parse()?,

            if_not_exists: env::var("DBS_IF_NOT_EXISTS")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
        })
    }

    /// 명령행 옵션 적용
    pub fn with_overrides(mut self, dialect: Option<Dialect>, if_not_exists: bool) -> Self {
        if let Some(dialect) = dialect {
            self.dialect = dialect;
        }
        self.if_not_exists |= if_not_exists;
        self
    }
}
