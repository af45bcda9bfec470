//! CLI 명령어 구현

pub mod check;
pub mod ddl;
pub mod inspect;

use std::path::Path;

use anyhow::Context;
use dbs_core::Database;

/// 스키마 문서 파일 로드
pub fn load(path: &Path) -> anyhow::Result<Database> {
    let xml = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let database = Database::from_xml(&xml)
        .with_context(|| format!("failed to load schema from {}", path.display()))?;

    tracing::info!(path = %path.display(), tables = database.len(), "schema loaded");
    Ok(database)
}
