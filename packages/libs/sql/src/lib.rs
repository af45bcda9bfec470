//! dbs-sql: 스키마 모델 기반 SQL 생성 라이브러리
//!
//! dbs-core 모델에서 DDL과 GRANT 문을 생성합니다.
//! 컬럼 타입은 `Column::to_column_def()`를 그대로 사용하며, SQL 렌더링은 SeaQuery가 담당합니다.
//!
//! # 모듈 구조
//!
//! - `dialect`: 대상 DB 엔진
//! - `ddl`: CREATE TABLE 생성기
//! - `grant`: GRANT 문 생성기
//! - `error`: 에러 타입

pub mod ddl;
pub mod dialect;
pub mod error;
pub mod grant;

pub use ddl::DdlGenerator;
pub use dialect::Dialect;
pub use error::{Error, Result};
pub use grant::GrantGenerator;
