//! 선언 스키마(XML) 모델
//!
//! # 개요
//!
//! 스키마 문서는 `<table>`, `<column>`, `<permissions>` 엘리먼트로 구성됩니다.
//! 이 모듈은 문서 트리를 읽어 조회 가능한 모델로 변환합니다.
//!
//! # 모듈 구조
//!
//! - `database`: 테이블 집합 (진입점)
//! - `table`: 테이블 정의
//! - `column`: 컬럼 정의 및 외래키 참조
//! - `permission`: 사용자별 권한
//! - `types`: 추상 타입 토큰 → DB 엔진 컬럼 타입 매핑

mod column;
mod database;
mod permission;
mod table;
mod types;

pub use column::{Column, ForeignKeyRef};
pub use database::{Database, ReferenceError};
pub use permission::Permission;
pub use table::Table;
pub use types::{ColumnType, DynIden};
