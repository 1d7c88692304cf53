//! Parameter inference and multi-statement distribution core of a SQL
//! query tool.
//!
//! The UI layer feeds edited SQL text through [`db::session::QuerySession`],
//! which keeps the displayed parameter list in sync with the `?` markers in
//! the text (inferring names and types from lexical context plus live
//! schema metadata), and on execute partitions the flat parameter list
//! across the buffer's semicolon-separated statements in order.

pub mod db;

pub use db::metadata::{EngineKind, MetadataError, MetadataProvider};
pub use db::query::{DistributionCursor, StatementBatch};
pub use db::session::{ExecutionPlan, PlannedStatement, QuerySession};
pub use db::types::{ParamType, Parameter};
