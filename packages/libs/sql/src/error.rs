//! SQL 생성 에러

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("table '{table}': {source}")]
    Column {
        table: String,
        #[source]
        source: dbs_core::Error,
    },

    #[error("unknown dialect: {name}")]
    UnknownDialect { name: String },
}

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::Column { source, .. } => source.code(),
            Error::UnknownDialect { .. } => "UNKNOWN_DIALECT",
        }
    }
}
