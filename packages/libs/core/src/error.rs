//! 공통 에러 타입
//!
//! 스키마 문서 로딩과 타입 매핑에서 발생하는 에러를 정의합니다.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// dbs-core 공통 에러
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────────────────────
    // Document Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("XML parse error: {0}")]
    DocumentParse(#[from] roxmltree::Error),

    // ─────────────────────────────────────────────────────────────────────────────
    // Schema Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("<{element}> is missing required attribute '{attribute}'")]
    MissingAttribute { element: String, attribute: String },

    #[error("<{element}> attribute '{attribute}' has malformed value '{value}'")]
    MalformedAttribute {
        element: String,
        attribute: String,
        value: String,
    },

    // ─────────────────────────────────────────────────────────────────────────────
    // Type Mapping Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("unsupported column type: {type_name}")]
    UnsupportedType { type_name: String },

    // ─────────────────────────────────────────────────────────────────────────────
    // Serialization Errors
    // ─────────────────────────────────────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn missing(element: &str, attribute: &str) -> Self {
        Error::MissingAttribute {
            element: element.to_string(),
            attribute: attribute.to_string(),
        }
    }

    /// 에러 코드 (CLI/로그용)
    pub fn code(&self) -> &'static str {
        match self {
            Error::DocumentParse(_) => "DOCUMENT_PARSE_ERROR",
            Error::MissingAttribute { .. } => "MISSING_ATTRIBUTE",
            Error::MalformedAttribute { .. } => "MALFORMED_ATTRIBUTE",
            Error::UnsupportedType { .. } => "UNSUPPORTED_TYPE",
            Error::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}
