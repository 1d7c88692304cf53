use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::db::metadata::MetadataProvider;
use crate::db::types::ParamType;

/// How far back from a placeholder the classifier looks for its field name.
const CONTEXT_WINDOW: usize = 60;

/// Field name used when no identifier precedes the placeholder.
const FALLBACK_FIELD: &str = "param";

static FROM_TABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bFROM\s+([^\s,;]+)").expect("invalid FROM regex"));

/// Name and type inferred for one placeholder from its lexical context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferredParam {
    pub name: String,
    pub param_type: ParamType,
}

/// Infer a parameter name and type for the placeholder at byte `offset`.
///
/// The name comes from the token preceding the marker (the field of a
/// comparison, or the field before BETWEEN for range placeholders, suffixed
/// `_FROM`/`_TO`). The type comes from a live schema probe through
/// `provider` when one is available; every lookup failure degrades silently
/// to VARCHAR so the editor stays usable against unreachable databases.
pub fn classify(
    text: &str,
    offset: usize,
    provider: Option<&dyn MetadataProvider>,
) -> InferredParam {
    let window = context_window(text, offset);
    let tokens: Vec<&str> = window
        .split(|c: char| c.is_whitespace() || matches!(c, '=' | '<' | '>'))
        .filter(|t| !t.is_empty())
        .collect();

    let mut field = FALLBACK_FIELD.to_string();
    if let Some(&last) = tokens.last() {
        let mut candidate = last;
        if last == "AND" || last == "BETWEEN" {
            // Range pattern: field BETWEEN ? AND ?
            if let Some(idx) = tokens.iter().rposition(|t| *t == "BETWEEN") {
                if idx > 0 {
                    candidate = tokens[idx - 1];
                }
            }
        }
        // Drop a table/alias qualifier; keep only the trailing identifier.
        if let Some(unqualified) = candidate.rsplit('.').next() {
            candidate = unqualified;
        }
        let stripped: String = candidate
            .chars()
            .filter(|c| !matches!(c, '[' | ']' | '"'))
            .collect();
        if !stripped.is_empty() {
            field = stripped;
        }
    }

    let param_type = resolve_type(&field, text, provider);

    let trimmed = window.trim_end();
    let suffix = if trimmed.ends_with("BETWEEN") {
        "_FROM"
    } else if trimmed.ends_with("AND") && window.contains("BETWEEN") {
        "_TO"
    } else {
        ""
    };

    InferredParam {
        name: format!("@{}{}", field, suffix),
        param_type,
    }
}

/// Uppercased text window of at most `CONTEXT_WINDOW` characters ending at
/// the placeholder.
fn context_window(text: &str, offset: usize) -> String {
    let before = &text[..offset.min(text.len())];
    let skip = before.chars().count().saturating_sub(CONTEXT_WINDOW);
    before.chars().skip(skip).collect::<String>().to_uppercase()
}

/// Best-effort type discovery: locate a source table via the first FROM
/// clause, probe the provider for the column's native type, map it through
/// the engine-neutral table. Any miss along the way defaults to VARCHAR.
fn resolve_type(field: &str, text: &str, provider: Option<&dyn MetadataProvider>) -> ParamType {
    let Some(provider) = provider else {
        return ParamType::VarChar;
    };
    let Some(table) = FROM_TABLE_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
    else {
        debug!("no FROM clause found; defaulting {field} to VARCHAR");
        return ParamType::VarChar;
    };

    match provider.column_native_type(field, table) {
        Ok(native) => {
            let native = native.to_uppercase();
            match ParamType::from_native(&native) {
                Some(tag) => tag,
                None => {
                    debug!("native type {native} of {table}.{field} is unmapped; using VARCHAR");
                    ParamType::VarChar
                }
            }
        }
        Err(err) => {
            warn!("metadata lookup for {table}.{field} failed: {err}");
            ParamType::VarChar
        }
    }
}
