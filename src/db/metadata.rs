use serde::{Deserialize, Serialize};
use thiserror::Error;

/// SQL engine a stored connection profile points at. Used only to pick the
/// metadata dialect; connection-string building lives with the driver layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineKind {
    Db2,
    SqlServer,
    Oracle,
    Postgres,
    MySql,
    Sqlite,
}

impl EngineKind {
    pub fn display(&self) -> &'static str {
        match self {
            EngineKind::Db2 => "DB2",
            EngineKind::SqlServer => "SQL Server",
            EngineKind::Oracle => "Oracle",
            EngineKind::Postgres => "PostgreSQL",
            EngineKind::MySql => "MySQL",
            EngineKind::Sqlite => "SQLite",
        }
    }

    /// Zero-row, schema-only projection used to discover a column's native
    /// type without fetching data. Each engine gets its own template here so
    /// no caller ever branches on engine identity.
    pub fn schema_probe_sql(&self, column: &str, table: &str) -> String {
        match self {
            EngineKind::Oracle => {
                format!(
                    "SELECT {} FROM {} WHERE 1 = 0 FETCH FIRST 0 ROWS ONLY",
                    column, table
                )
            }
            EngineKind::Db2 => {
                format!(
                    "SELECT {} FROM {} WHERE 1 = 0 FETCH FIRST 0 ROWS ONLY",
                    column, table
                )
            }
            EngineKind::SqlServer => {
                format!("SELECT TOP 0 {} FROM {}", column, table)
            }
            EngineKind::Postgres | EngineKind::MySql | EngineKind::Sqlite => {
                format!("SELECT {} FROM {} WHERE 1 = 0 LIMIT 0", column, table)
            }
        }
    }
}

/// Failure modes of a live metadata lookup. These never reach the UI: the
/// classifier logs them and defaults the parameter type to VARCHAR.
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("unknown object: {name}")]
    UnknownObject { name: String },

    #[error("metadata lookup failed: {message}")]
    LookupFailed { message: String },

    #[error("metadata lookup timed out after {millis} ms")]
    Timeout { millis: u64 },
}

/// Live schema access for one open connection. Implementations run the
/// engine's schema probe against the database; the call may block on
/// network I/O and must honour its own timeout.
pub trait MetadataProvider {
    fn engine(&self) -> EngineKind;

    /// Native type name of `column` within `table`, as the engine's own
    /// catalog reports it (e.g. "VARCHAR2", "INT64", "TIMESTAMP").
    fn column_native_type(&self, column: &str, table: &str) -> Result<String, MetadataError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_probe_fetches_no_rows() {
        let probes = [
            EngineKind::Db2.schema_probe_sql("ID", "EMP"),
            EngineKind::SqlServer.schema_probe_sql("ID", "EMP"),
            EngineKind::Oracle.schema_probe_sql("ID", "EMP"),
            EngineKind::Postgres.schema_probe_sql("ID", "EMP"),
        ];
        for probe in &probes {
            assert!(probe.contains("ID"), "probe lost the column: {probe}");
            assert!(probe.contains("EMP"), "probe lost the table: {probe}");
            assert!(
                probe.contains("WHERE 1 = 0") || probe.contains("TOP 0"),
                "probe would fetch rows: {probe}"
            );
        }
    }

    #[test]
    fn test_sqlserver_probe_uses_top() {
        let probe = EngineKind::SqlServer.schema_probe_sql("NAME", "DEPT");
        assert_eq!(probe, "SELECT TOP 0 NAME FROM DEPT");
    }
}
