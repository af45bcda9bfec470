//! 대상 DB 엔진

use std::fmt;
use std::str::FromStr;

use sea_query::{
    ForeignKeyCreateStatement, MysqlQueryBuilder, PostgresQueryBuilder, SqliteQueryBuilder,
    TableCreateStatement,
};

use crate::error::Error;

/// SQL 방언
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    #[default]
    Postgres,
    Mysql,
    Sqlite,
}

impl Dialect {
    /// CREATE TABLE 문 렌더링
    pub fn render_table(&self, stmt: &TableCreateStatement) -> String {
        match self {
            Dialect::Postgres => stmt.to_string(PostgresQueryBuilder),
            Dialect::Mysql => stmt.to_string(MysqlQueryBuilder),
            Dialect::Sqlite => stmt.to_string(SqliteQueryBuilder),
        }
    }

    /// ALTER TABLE ... ADD FOREIGN KEY 렌더링
    ///
    /// SQLite는 기존 테이블에 외래키를 추가할 수 없어 `None`입니다.
    pub fn render_foreign_key(&self, stmt: &ForeignKeyCreateStatement) -> Option<String> {
        match self {
            Dialect::Postgres => Some(stmt.to_string(PostgresQueryBuilder)),
            Dialect::Mysql => Some(stmt.to_string(MysqlQueryBuilder)),
            Dialect::Sqlite => None,
        }
    }

    /// 외래키를 CREATE TABLE 안에 넣어야 하는지
    pub fn inline_foreign_keys(&self) -> bool {
        matches!(self, Dialect::Sqlite)
    }

    /// 식별자 인용
    pub fn quote(&self, ident: &str) -> String {
        let q = match self {
            Dialect::Mysql => '`',
            Dialect::Postgres | Dialect::Sqlite => '"',
        };
        let escaped = ident.replace(q, &format!("{q}{q}"));
        format!("{q}{escaped}{q}")
    }

    /// GRANT 지원 여부 (SQLite는 권한 개념이 없음)
    pub fn supports_grants(&self) -> bool {
        !matches!(self, Dialect::Sqlite)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::Mysql => "mysql",
            Dialect::Sqlite => "sqlite",
        }
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Dialect::Postgres),
            "mysql" | "mariadb" => Ok(Dialect::Mysql),
            "sqlite" | "sqlite3" => Ok(Dialect::Sqlite),
            _ => Err(Error::UnknownDialect {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
