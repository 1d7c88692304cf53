use log::debug;

use crate::db::query::scanner;
use crate::db::types::Parameter;

/// Position of the next unconsumed parameter in the flat list.
///
/// One cursor lives for exactly one pass over one statement batch; it only
/// moves forward. Concurrent executions must each allocate their own cursor
/// over their own snapshot of the flat list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DistributionCursor(usize);

impl DistributionCursor {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn position(&self) -> usize {
        self.0
    }
}

/// The contiguous run of parameters the next statement consumes.
///
/// Parameters are handed out strictly left to right across statement
/// boundaries: each call takes as many as `statement_text` has placeholders
/// and advances the cursor past them, so no statement can reach back for an
/// earlier statement's parameters.
///
/// A statement with no placeholders gets an empty slice. So does any call
/// that cannot be satisfied in full — cursor exhausted, or fewer parameters
/// left than the statement needs. A partial slice is never returned and the
/// cursor never moves on a miss; the bind step downstream reports the
/// missing parameters as that statement's execution failure.
pub fn next_slice<'a>(
    statement_text: &str,
    flat: &'a [Parameter],
    cursor: &mut DistributionCursor,
) -> &'a [Parameter] {
    let needed = scanner::count(statement_text);
    if needed == 0 {
        return &[];
    }
    if flat.is_empty() || cursor.0 >= flat.len() {
        return &[];
    }
    let end = cursor.0 + needed;
    if end > flat.len() {
        debug!(
            "statement needs {} parameter(s) at offset {}, only {} left; binding none",
            needed,
            cursor.0,
            flat.len() - cursor.0
        );
        return &[];
    }
    let slice = &flat[cursor.0..end];
    cursor.0 = end;
    slice
}
