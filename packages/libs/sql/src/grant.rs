//! GRANT 문 생성기
//!
//! `<permissions>` 블록 하나당 GRANT 문 하나를 만듭니다.

use dbs_core::schema::{Permission, Table};
use dbs_core::Database;

use crate::dialect::Dialect;

/// GRANT 문 생성기
#[derive(Debug, Clone, Copy, Default)]
pub struct GrantGenerator {
    dialect: Dialect,
}

impl GrantGenerator {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// 전체 스키마의 GRANT 문 (문서 순서)
    pub fn generate(&self, database: &Database) -> Vec<String> {
        database
            .tables()
            .iter()
            .flat_map(|table| self.grants(table))
            .collect()
    }

    /// 테이블 하나의 GRANT 문
    pub fn grants(&self, table: &Table) -> Vec<String> {
        if !self.dialect.supports_grants() {
            tracing::debug!(dialect = %self.dialect, table = table.name(), "grants not supported");
            return Vec::new();
        }

        table
            .permissions()
            .iter()
            .filter_map(|permission| self.grant(table, permission))
            .collect()
    }

    fn grant(&self, table: &Table, permission: &Permission) -> Option<String> {
        let mut actions: Vec<&str> = Vec::new();
        for action in permission.actions() {
            let action = action.trim();
            if !is_action_keyword(action) {
                tracing::warn!(
                    table = table.name(),
                    user = permission.user(),
                    action,
                    "skipping invalid permission"
                );
                continue;
            }
            if !actions.contains(&action) {
                actions.push(action);
            }
        }

        if actions.is_empty() {
            return None;
        }

        Some(format!(
            "GRANT {} ON {} TO {}",
            actions.join(", "),
            self.dialect.quote(table.name()),
            self.grantee(permission.user())
        ))
    }

    fn grantee(&self, user: &str) -> String {
        match self.dialect {
            Dialect::Mysql => format!("'{}'", user.replace('\\', "\\\\").replace('\'', "''")),
            _ => self.dialect.quote(user),
        }
    }
}

/// SQL 권한 키워드 형태인지 (`SELECT`, `ALL PRIVILEGES`, ...)
fn is_action_keyword(action: &str) -> bool {
    !action.is_empty() && action.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}
