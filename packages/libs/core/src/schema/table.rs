//! 테이블 정의

use std::collections::BTreeSet;

use serde::Serialize;

use super::column::Column;
use super::permission::Permission;
use crate::document::SchemaNode;
use crate::error::Result;

/// 테이블 정의
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    name: String,
    columns: Vec<Column>,
    permissions: Vec<Permission>,
}

impl Table {
    /// `<table>` 노드에서 생성
    ///
    /// `<column>`과 `<permissions>` 자식만 읽고, 나머지 태그는 무시합니다.
    pub fn build<N: SchemaNode>(node: N) -> Result<Self> {
        let name = node.required_attribute("name")?.to_string();

        let columns = node
            .children_tagged("column")
            .into_iter()
            .map(Column::build)
            .collect::<Result<Vec<_>>>()?;

        let permissions = node
            .children_tagged("permissions")
            .into_iter()
            .map(Permission::build)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name,
            columns,
            permissions,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 컬럼 목록 (문서 순서)
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// 권한 목록 (문서 순서)
    pub fn permissions(&self) -> &[Permission] {
        &self.permissions
    }

    /// 컬럼 조회
    ///
    /// 같은 이름이 여러 개면 마지막 컬럼을 반환합니다.
    pub fn find_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().rev().find(|c| c.name() == name)
    }

    /// PK 컬럼들
    pub fn primary_key_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.is_primary_key())
    }

    /// FK 컬럼들
    pub fn foreign_key_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.is_foreign_key())
    }

    /// 특정 사용자의 권한 블록들
    pub fn permissions_for<'a>(&'a self, user: &'a str) -> impl Iterator<Item = &'a Permission> {
        self.permissions.iter().filter(move |p| p.user() == user)
    }

    /// 특정 사용자에게 허용된 action 전체 (블록이 반복되면 합집합)
    pub fn grants_for(&self, user: &str) -> BTreeSet<&str> {
        self.permissions
            .iter()
            .filter(|p| p.user() == user)
            .flat_map(|p| p.actions().iter().map(String::as_str))
            .collect()
    }
}
