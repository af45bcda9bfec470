//! 스키마 요약 출력

use std::fmt::Write;
use std::path::Path;

use dbs_core::schema::{Column, Table};

use crate::OutputFormat;

pub fn run(path: &Path, table: Option<&str>, format: OutputFormat) -> anyhow::Result<()> {
    let database = super::load(path)?;

    let tables: Vec<&Table> = match table {
        Some(name) => {
            let found = database
                .find_table(name)
                .ok_or_else(|| anyhow::anyhow!("table not found: {}", name))?;
            vec![found]
        }
        None => database.tables().iter().collect(),
    };

    match format {
        OutputFormat::Json => match table {
            Some(_) => println!("{}", serde_json::to_string_pretty(&tables[0])?),
            None => println!("{}", database.to_json_pretty()?),
        },
        OutputFormat::Text => {
            for table in tables {
                print!("{}", format_table(table));
            }
        }
    }

    Ok(())
}

/// 테이블 요약 텍스트
pub fn format_table(table: &Table) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({} columns, {} grants)",
        table.name(),
        table.columns().len(),
        table.permissions().len()
    );

    for column in table.columns() {
        let _ = writeln!(out, "  - {}", format_column(column));
    }

    for permission in table.permissions() {
        let _ = writeln!(
            out,
            "  * {}: {}",
            permission.user(),
            permission.actions().join(", ")
        );
    }

    out
}

fn format_column(column: &Column) -> String {
    let mut line = format!("{} {}", column.name(), column.type_name());
    if column.length() > 0 {
        let _ = write!(line, "({})", column.length());
    }
    if column.is_primary_key() {
        line.push_str(" PK");
    }
    if column.autoincrement() {
        line.push_str(" AUTO");
    }
    if let Some(reference) = column.foreign_key() {
        let _ = write!(
            line,
            " FK -> {}.{}",
            reference.table.as_deref().unwrap_or("?"),
            reference.column.as_deref().unwrap_or("?")
        );
        if let Some(constraint) = &reference.constraint {
            let _ = write!(line, " [{}]", constraint);
        }
    }
    line
}
