use serde::{Deserialize, Serialize};

/// Engine-neutral parameter type tag. Each stored connection's driver maps
/// these onto its own native parameter enumeration at bind time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamType {
    Bit,
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    Real,
    Double,
    Numeric,
    Char,
    VarChar,
    VarBinary,
    DateTime,
    Time,
}

impl ParamType {
    /// Map an uppercased native type name, as reported by a schema lookup,
    /// onto a parameter type tag. Returns `None` on an unknown name; callers
    /// fall back to `ParamType::VarChar`.
    ///
    /// Unsigned integer natives coerce to the next wider signed tag. GUIDs
    /// become fixed CHAR because several supported engines have no native
    /// uniqueidentifier type.
    pub fn from_native(name: &str) -> Option<ParamType> {
        let tag = match name {
            "BOOL" | "BOOLEAN" | "BIT" => ParamType::Bit,
            "BYTE" | "TINYINT" => ParamType::TinyInt,
            "SHORT" | "INT16" | "SMALLINT" => ParamType::SmallInt,
            "INT" | "INT32" | "INTEGER" | "MEDIUMINT" => ParamType::Int,
            "LONG" | "INT64" | "BIGINT" => ParamType::BigInt,
            "USHORT" | "UINT16" => ParamType::Int,
            "UINT" | "UINT32" => ParamType::BigInt,
            "ULONG" | "UINT64" => ParamType::BigInt,
            "FLOAT" | "SINGLE" | "REAL" => ParamType::Real,
            "DOUBLE" | "DOUBLE PRECISION" | "BINARY_DOUBLE" => ParamType::Double,
            "DECIMAL" | "NUMERIC" | "NUMBER" | "MONEY" => ParamType::Numeric,
            "CHAR" | "NCHAR" | "CHARACTER" | "BPCHAR" => ParamType::Char,
            "STRING" | "VARCHAR" | "NVARCHAR" | "VARCHAR2" | "NVARCHAR2" | "TEXT" | "CLOB" => {
                ParamType::VarChar
            }
            "BYTE[]" | "BINARY" | "VARBINARY" | "BLOB" | "BYTEA" | "RAW" => ParamType::VarBinary,
            "DATE" | "DATETIME" | "DATETIME2" | "TIMESTAMP" | "SMALLDATETIME" => {
                ParamType::DateTime
            }
            "TIME" | "TIMESPAN" | "INTERVAL" => ParamType::Time,
            "GUID" | "UUID" | "UNIQUEIDENTIFIER" => ParamType::Char,
            _ => return None,
        };
        Some(tag)
    }

    pub fn display(&self) -> &'static str {
        match self {
            ParamType::Bit => "BIT",
            ParamType::TinyInt => "TINYINT",
            ParamType::SmallInt => "SMALLINT",
            ParamType::Int => "INT",
            ParamType::BigInt => "BIGINT",
            ParamType::Real => "REAL",
            ParamType::Double => "DOUBLE",
            ParamType::Numeric => "NUMERIC",
            ParamType::Char => "CHAR",
            ParamType::VarChar => "VARCHAR",
            ParamType::VarBinary => "VARBINARY",
            ParamType::DateTime => "DATETIME",
            ParamType::Time => "TIME",
        }
    }
}

impl Default for ParamType {
    fn default() -> Self {
        ParamType::VarChar
    }
}

/// One inferred or manually edited query placeholder.
///
/// The UI keeps an ordered list of these whose length always equals the
/// number of `?` markers in the SQL text, in left-to-right order. The list
/// is rebuilt on every relevant edit; values survive positionally (index i
/// keeps its value if index i existed before), not by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub param_type: ParamType,
    /// User-entered value; the empty string binds as SQL NULL downstream.
    pub value: String,
}

impl Parameter {
    pub fn new(name: &str, param_type: ParamType, value: &str) -> Self {
        Self {
            name: name.to_string(),
            param_type,
            value: value.to_string(),
        }
    }
}
