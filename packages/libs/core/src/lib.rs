//! dbs-core: 스키마 문서 핵심 라이브러리
//!
//! XML로 선언된 테이블/컬럼/외래키/권한을 읽어 메모리 모델을 만들고,
//! 컬럼을 DB 엔진의 컬럼 정의로 변환합니다.
//!
//! # 모듈 구조
//!
//! - `document`: 문서 트리 추상화 (`SchemaNode`)
//! - `schema`: Database / Table / Column / Permission 모델
//! - `error`: 공통 에러 타입
//!
//! 파일 I/O는 이 크레이트의 책임이 아닙니다. 호출 측이 문서 문자열이나
//! 파싱된 노드를 넘겨줍니다.

pub mod document;
pub mod error;
pub mod schema;

pub use document::{Element, SchemaNode};
pub use error::{Error, Result};
pub use schema::Database;
