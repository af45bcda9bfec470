//! 컬럼 타입 매핑
//!
//! 문서의 추상 타입 토큰(`int`, `varchar`, ...)을 DB 엔진 컬럼 타입으로 변환합니다.
//! 엔진 쪽 표현은 SeaQuery의 `ColumnDef`를 사용합니다.

use sea_query::{ColumnDef, Iden};
use serde::Serialize;

use crate::error::{Error, Result};

/// 동적 테이블/컬럼 식별자
#[derive(Debug, Clone)]
pub struct DynIden(pub String);

impl Iden for DynIden {
    fn unquoted(&self, s: &mut dyn std::fmt::Write) {
        let _ = write!(s, "{}", self.0);
    }
}

/// 지원되는 컬럼 타입
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColumnType {
    /// 정수 (length 무시)
    Int,

    /// 길이 제한 문자열 (length 0 = 엔진 기본 길이)
    Varchar { length: u32 },
}

impl ColumnType {
    /// 타입 토큰과 length로부터 결정
    ///
    /// 알려진 토큰 외에는 추측하지 않고 `UnsupportedType`을 반환합니다.
    pub fn from_token(token: &str, length: u32) -> Result<Self> {
        match token {
            "int" => Ok(ColumnType::Int),
            "varchar" => Ok(ColumnType::Varchar { length }),
            _ => Err(Error::UnsupportedType {
                type_name: token.to_string(),
            }),
        }
    }

    /// 문서에서 사용하는 토큰
    pub fn token(&self) -> &'static str {
        match self {
            ColumnType::Int => "int",
            ColumnType::Varchar { .. } => "varchar",
        }
    }

    /// `ColumnDef`에 타입 적용
    pub fn apply(&self, col_def: &mut ColumnDef) {
        match self {
            ColumnType::Int => {
                col_def.integer();
            }
            ColumnType::Varchar { length: 0 } => {
                col_def.string();
            }
            ColumnType::Varchar { length } => {
                col_def.string_len(*length);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_query::{PostgresQueryBuilder, Table};

    fn render(column_type: ColumnType) -> String {
        let mut col_def = ColumnDef::new(DynIden("c".to_string()));
        column_type.apply(&mut col_def);
        Table::create()
            .table(DynIden("t".to_string()))
            .col(&mut col_def)
            .to_string(PostgresQueryBuilder)
    }

    #[test]
    fn test_token_mapping() {
        assert_eq!(ColumnType::from_token("int", 11).unwrap(), ColumnType::Int);
        assert_eq!(
            ColumnType::from_token("varchar", 64).unwrap(),
            ColumnType::Varchar { length: 64 }
        );
        assert_eq!(ColumnType::Varchar { length: 1 }.token(), "varchar");
    }

    #[test]
    fn test_unknown_tokens_are_unsupported() {
        for token in ["text", "INT", "bigint", ""] {
            let err = ColumnType::from_token(token, 0).unwrap_err();
            assert!(matches!(err, Error::UnsupportedType { ref type_name } if type_name == token));
        }
    }

    #[test]
    fn test_postgres_rendering() {
        assert!(render(ColumnType::Int).contains("\"c\" integer"));
        assert!(render(ColumnType::Varchar { length: 64 }).contains("\"c\" varchar(64)"));
        assert!(render(ColumnType::Varchar { length: 0 }).contains("\"c\" varchar"));
    }
}
