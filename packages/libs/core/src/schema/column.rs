//! 컬럼 정의
//!
//! `<column>` 엘리먼트 하나에 해당하는 메타데이터입니다.

use sea_query::ColumnDef;
use serde::Serialize;

use super::types::{ColumnType, DynIden};
use crate::document::SchemaNode;
use crate::error::{Error, Result};

const TAG: &str = "column";

/// 컬럼 정의
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    name: String,
    #[serde(rename = "type")]
    type_name: String,
    length: u32,
    nullable: bool,
    is_primary_key: bool,
    is_foreign_key: bool,
    autoincrement: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    foreign_key: Option<ForeignKeyRef>,
}

/// 외래키 참조 정보
///
/// 문서에 적힌 값을 그대로 보관하며, 대상 테이블/컬럼의 존재 여부는 검사하지 않습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ForeignKeyRef {
    /// 참조 대상 테이블 (`<fkey_table>`)
    pub table: Option<String>,

    /// 참조 대상 컬럼 (`<fkey_column>`)
    pub column: Option<String>,

    /// 제약 조건 이름 (`<fkey_constraint>`)
    pub constraint: Option<String>,
}

/// `key` 속성 값
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyKind {
    Primary,
    Foreign,
    None,
}

impl KeyKind {
    fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("primary") => KeyKind::Primary,
            Some("foreign") => KeyKind::Foreign,
            _ => KeyKind::None,
        }
    }
}

impl Column {
    /// `<column>` 노드에서 생성
    pub fn build<N: SchemaNode>(node: N) -> Result<Self> {
        let name = node.required_attribute("name")?.to_string();
        let type_name = node.required_attribute("type")?.to_string();
        let length = Self::parse_length(&node)?;
        let key = KeyKind::from_attribute(node.attribute("key"));

        let foreign_key = match key {
            KeyKind::Foreign => Some(ForeignKeyRef::build(&node)),
            _ => None,
        };

        Ok(Self {
            name,
            type_name,
            length,
            nullable: true,
            is_primary_key: key == KeyKind::Primary,
            is_foreign_key: key == KeyKind::Foreign,
            autoincrement: node.attribute("autoincrement") == Some("true"),
            foreign_key,
        })
    }

    fn parse_length<N: SchemaNode>(node: &N) -> Result<u32> {
        let Some(raw) = node.attribute("length") else {
            return Ok(0);
        };

        raw.trim().parse().map_err(|_| Error::MalformedAttribute {
            element: TAG.to_string(),
            attribute: "length".to_string(),
            value: raw.to_string(),
        })
    }

    /// 컬럼 이름
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 문서에 적힌 추상 타입 토큰
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// 길이 (0 = 지정되지 않음)
    pub fn length(&self) -> u32 {
        self.length
    }

    /// NULL 허용 여부
    ///
    /// 문서에서 지정할 방법이 없어 항상 `true`입니다.
    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn is_primary_key(&self) -> bool {
        self.is_primary_key
    }

    pub fn is_foreign_key(&self) -> bool {
        self.is_foreign_key
    }

    pub fn autoincrement(&self) -> bool {
        self.autoincrement
    }

    /// 외래키 참조 (`key="foreign"`일 때만 존재)
    pub fn foreign_key(&self) -> Option<&ForeignKeyRef> {
        self.foreign_key.as_ref()
    }

    /// 지원되는 컬럼 타입으로 해석
    pub fn column_type(&self) -> Result<ColumnType> {
        ColumnType::from_token(&self.type_name, self.length)
    }

    /// DB 엔진 컬럼 정의로 변환
    ///
    /// 지원하지 않는 타입이면 `UnsupportedType`을 반환합니다.
    pub fn to_column_def(&self) -> Result<ColumnDef> {
        let column_type = self.column_type()?;

        let mut col_def = ColumnDef::new(DynIden(self.name.clone()));
        column_type.apply(&mut col_def);

        if !self.nullable {
            col_def.not_null();
        }
        if self.is_primary_key {
            col_def.primary_key();
        }
        if self.autoincrement {
            col_def.auto_increment();
        }

        Ok(col_def)
    }
}

impl ForeignKeyRef {
    fn build<N: SchemaNode>(node: &N) -> Self {
        let mut reference = Self::default();

        for child in node.children() {
            let slot = match child.tag() {
                "fkey_table" => &mut reference.table,
                "fkey_column" => &mut reference.column,
                "fkey_constraint" => &mut reference.constraint,
                _ => continue,
            };
            *slot = child.text().map(str::to_string);
        }

        reference
    }

    /// 대상 (테이블, 컬럼)
    ///
    /// 둘 중 하나라도 빠져 있으면 `None`입니다.
    pub fn target(&self) -> Option<(&str, &str)> {
        Some((self.table.as_deref()?, self.column.as_deref()?))
    }
}
