//! 데이터베이스 모델
//!
//! 문서 하나로부터 한 번만 만들어지며, 이후에는 읽기 전용입니다.
//! 하위 코드는 이 타입을 통해서만 테이블/컬럼을 조회합니다.

use serde::Serialize;
use thiserror::Error;

use super::table::Table;
use crate::document::SchemaNode;
use crate::error::Result;

/// 데이터베이스 모델
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Database {
    tables: Vec<Table>,
}

impl Database {
    /// 루트 노드에서 생성
    ///
    /// 루트 직속 `<table>` 자식만 문서 순서대로 읽습니다. 다른 태그는 무시합니다.
    /// 하나라도 실패하면 전체 로딩이 실패합니다.
    pub fn build<N: SchemaNode>(root: N) -> Result<Self> {
        let mut tables = Vec::new();

        for child in root.children() {
            if child.tag() != "table" {
                tracing::trace!(tag = child.tag(), "ignoring element");
                continue;
            }
            tables.push(Table::build(child)?);
        }

        tracing::debug!(
            tables = tables.len(),
            columns = tables.iter().map(|t| t.columns().len()).sum::<usize>(),
            "schema model built"
        );

        Ok(Self { tables })
    }

    /// XML 문자열을 파싱하여 생성
    pub fn from_xml(xml: &str) -> Result<Self> {
        let doc = roxmltree::Document::parse(xml)?;
        Self::build(doc.root_element())
    }

    /// 테이블 조회
    ///
    /// 같은 이름이 여러 개면 마지막 테이블을 반환합니다.
    pub fn find_table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().rev().find(|t| t.name() == name)
    }

    /// 테이블 목록 (문서 순서)
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// 모든 테이블 이름 (문서 순서, 중복 포함)
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|t| t.name())
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// 외래키 참조 검증
    ///
    /// 로딩 시에는 검증하지 않으므로, 필요한 쪽에서 명시적으로 호출합니다.
    pub fn dangling_references(&self) -> Vec<ReferenceError> {
        let mut errors = Vec::new();

        for table in &self.tables {
            for column in table.foreign_key_columns() {
                let Some(reference) = column.foreign_key() else {
                    continue;
                };

                let Some((ref_table, ref_column)) = reference.target() else {
                    errors.push(ReferenceError::Incomplete {
                        from_table: table.name().to_string(),
                        from_column: column.name().to_string(),
                    });
                    continue;
                };

                match self.find_table(ref_table) {
                    None => errors.push(ReferenceError::TableNotFound {
                        from_table: table.name().to_string(),
                        from_column: column.name().to_string(),
                        ref_table: ref_table.to_string(),
                    }),
                    Some(target) if target.find_column(ref_column).is_none() => {
                        errors.push(ReferenceError::ColumnNotFound {
                            from_table: table.name().to_string(),
                            from_column: column.name().to_string(),
                            ref_table: ref_table.to_string(),
                            ref_column: ref_column.to_string(),
                        })
                    }
                    Some(_) => {}
                }
            }
        }

        errors
    }

    /// JSON으로 직렬화
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// 참조 검증 에러
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("{from_table}.{from_column}: foreign key is missing fkey_table or fkey_column")]
    Incomplete {
        from_table: String,
        from_column: String,
    },

    #[error("{from_table}.{from_column}: references unknown table '{ref_table}'")]
    TableNotFound {
        from_table: String,
        from_column: String,
        ref_table: String,
    },

    #[error("{from_table}.{from_column}: references unknown column '{ref_table}.{ref_column}'")]
    ColumnNotFound {
        from_table: String,
        from_column: String,
        ref_table: String,
        ref_column: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Element;
    use crate::error::Error;

    fn table(name: &str) -> Element {
        Element::new("table").with_attribute("name", name)
    }

    #[test]
    fn test_model_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Database>();
    }

    #[test]
    fn test_empty_document() {
        let db = Database::from_xml("<database/>").unwrap();
        assert!(db.is_empty());
        assert_eq!(db.len(), 0);
        assert!(db.find_table("anything").is_none());
        assert!(db.find_table("").is_none());
    }

    #[test]
    fn test_unknown_root_children_ignored() {
        let root = Element::new("database")
            .with_child(table("a"))
            .with_child(Element::new("view").with_attribute("name", "v"))
            .with_child(table("b"));

        let db = Database::build(&root).unwrap();
        let names: Vec<&str> = db.table_names().collect();
        assert_eq!(names, vec!["a", "b"]);
        assert!(db.find_table("v").is_none());
    }

    #[test]
    fn test_find_table_last_wins() {
        let root = Element::new("database")
            .with_child(table("dup").with_child(
                Element::new("column")
                    .with_attribute("name", "first")
                    .with_attribute("type", "int"),
            ))
            .with_child(table("dup"));

        let db = Database::build(&root).unwrap();
        assert_eq!(db.len(), 2);
        assert!(db.find_table("dup").unwrap().columns().is_empty());
    }

    #[test]
    fn test_failure_aborts_load() {
        let root = Element::new("database")
            .with_child(table("ok"))
            .with_child(Element::new("table"));

        let err = Database::build(&root).unwrap_err();
        assert!(matches!(err, Error::MissingAttribute { ref element, .. } if element == "table"));
    }

    #[test]
    fn test_nested_tables_are_not_top_level() {
        let root = Element::new("database")
            .with_child(Element::new("group").with_child(table("hidden")));

        let db = Database::build(&root).unwrap();
        assert!(db.is_empty());
    }

    #[test]
    fn test_from_xml_malformed() {
        let err = Database::from_xml("<database><table name='a'></database>").unwrap_err();
        assert!(matches!(err, Error::DocumentParse(_)));
    }

    #[test]
    fn test_dangling_references() {
        let db = Database::from_xml(
            r#"<database>
                <table name="U">
                    <column name="id" type="int" key="primary"/>
                </table>
                <table name="T">
                    <column name="ok" type="int" key="foreign">
                        <fkey_table>U</fkey_table>
                        <fkey_column>id</fkey_column>
                    </column>
                    <column name="no_table" type="int" key="foreign">
                        <fkey_table>Missing</fkey_table>
                        <fkey_column>id</fkey_column>
                    </column>
                    <column name="no_column" type="int" key="foreign">
                        <fkey_table>U</fkey_table>
                        <fkey_column>uuid</fkey_column>
                    </column>
                    <column name="partial" type="int" key="foreign">
                        <fkey_constraint>FK_partial</fkey_constraint>
                    </column>
                </table>
            </database>"#,
        )
        .unwrap();

        let errors = db.dangling_references();
        assert_eq!(errors.len(), 3);
        assert!(matches!(&errors[0], ReferenceError::TableNotFound { ref_table, .. } if ref_table == "Missing"));
        assert!(matches!(&errors[1], ReferenceError::ColumnNotFound { ref_column, .. } if ref_column == "uuid"));
        assert!(matches!(&errors[2], ReferenceError::Incomplete { from_column, .. } if from_column == "partial"));
        assert_eq!(
            errors[0].to_string(),
            "T.no_table: references unknown table 'Missing'"
        );
    }

    #[test]
    fn test_json_export() {
        let db = Database::from_xml(
            r#"<database><table name="T"><column name="id" type="int" key="primary"/></table></database>"#,
        )
        .unwrap();

        let json: serde_json::Value = serde_json::from_str(&db.to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["tables"][0]["name"], "T");
        assert_eq!(json["tables"][0]["columns"][0]["type"], "int");
        assert_eq!(json["tables"][0]["columns"][0]["is_primary_key"], true);
        assert!(json["tables"][0]["columns"][0].get("foreign_key").is_none());
    }
}
