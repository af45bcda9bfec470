//! DDL 생성기
//!
//! 모델의 테이블마다 CREATE TABLE 문을 만듭니다.
//! 컬럼 타입 매핑은 dbs-core의 `Column::to_column_def()`를 사용합니다.

use dbs_core::schema::{Column, DynIden, Table};
use dbs_core::Database;
use sea_query::{ForeignKey, ForeignKeyCreateStatement, Table as TableQuery, TableCreateStatement};

use crate::dialect::Dialect;
use crate::error::{Error, Result};

/// CREATE TABLE 생성기
#[derive(Debug, Clone, Copy, Default)]
pub struct DdlGenerator {
    dialect: Dialect,
    if_not_exists: bool,
}

impl DdlGenerator {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            if_not_exists: false,
        }
    }

    /// `IF NOT EXISTS` 사용 여부
    pub fn if_not_exists(mut self, enabled: bool) -> Self {
        self.if_not_exists = enabled;
        self
    }

    /// 전체 스키마의 DDL
    ///
    /// CREATE TABLE 문을 문서 순서대로 모두 낸 뒤, 외래키를 `ALTER TABLE` 문으로 덧붙입니다.
    /// 뒤에 정의된 테이블을 참조해도 순서대로 실행할 수 있습니다.
    /// SQLite는 외래키를 CREATE TABLE 안에 넣습니다 (생성 시 대상 테이블을 확인하지 않음).
    ///
    /// 지원하지 않는 컬럼 타입이 하나라도 있으면 실패합니다.
    pub fn generate(&self, database: &Database) -> Result<Vec<String>> {
        let mut sqls = database
            .tables()
            .iter()
            .map(|table| {
                let stmt = self.create_table(table)?;
                Ok(self.dialect.render_table(&stmt))
            })
            .collect::<Result<Vec<_>>>()?;

        if !self.dialect.inline_foreign_keys() {
            for table in database.tables() {
                sqls.extend(
                    Self::foreign_keys(table)
                        .iter()
                        .filter_map(|fk| self.dialect.render_foreign_key(fk)),
                );
            }
        }

        Ok(sqls)
    }

    /// 테이블 하나의 CREATE TABLE 문
    ///
    /// 외래키는 SQLite에서만 포함됩니다. 나머지는 [`DdlGenerator::foreign_keys`]를 사용합니다.
    pub fn create_table(&self, table: &Table) -> Result<TableCreateStatement> {
        let mut stmt = TableQuery::create();
        stmt.table(DynIden(table.name().to_string()));
        if self.if_not_exists {
            stmt.if_not_exists();
        }

        for column in table.columns() {
            let mut col_def = column.to_column_def().map_err(|source| Error::Column {
                table: table.name().to_string(),
                source,
            })?;
            stmt.col(&mut col_def);
        }

        if self.dialect.inline_foreign_keys() {
            for mut fk in Self::foreign_keys(table) {
                stmt.foreign_key(&mut fk);
            }
        }

        Ok(stmt)
    }

    /// 테이블의 외래키 제약 조건들
    ///
    /// `fkey_table`/`fkey_column`이 빠진 참조는 건너뜁니다.
    pub fn foreign_keys(table: &Table) -> Vec<ForeignKeyCreateStatement> {
        table
            .foreign_key_columns()
            .filter_map(|column| Self::foreign_key(table, column))
            .collect()
    }

    fn foreign_key(table: &Table, column: &Column) -> Option<ForeignKeyCreateStatement> {
        let reference = column.foreign_key()?;
        let Some((ref_table, ref_column)) = reference.target() else {
            tracing::warn!(
                table = table.name(),
                column = column.name(),
                "skipping foreign key without fkey_table/fkey_column"
            );
            return None;
        };

        let mut fk = ForeignKey::create();
        if let Some(constraint) = &reference.constraint {
            fk.name(constraint.as_str());
        }
        fk.from(
            DynIden(table.name().to_string()),
            DynIden(column.name().to_string()),
        )
        .to(DynIden(ref_table.to_string()), DynIden(ref_column.to_string()));

        Some(fk)
    }
}
