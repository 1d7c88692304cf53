use log::debug;

use crate::db::metadata::MetadataProvider;
use crate::db::query::distribution::{self, DistributionCursor};
use crate::db::query::script::StatementBatch;
use crate::db::query::sync;
use crate::db::types::Parameter;

/// One statement of an execution plan paired with the parameters it binds.
/// An under-supplied statement carries an empty list; its bind step fails
/// downstream and is reported as that statement's execution result.
#[derive(Debug, Clone)]
pub struct PlannedStatement {
    pub text: String,
    pub params: Vec<Parameter>,
}

/// The `(statement, parameter slice)` pairs for one execute action, in
/// batch order. Built over a private snapshot of the flat parameter list
/// and a private cursor, so two plans never interfere.
#[derive(Debug, Clone)]
pub struct ExecutionPlan {
    pub statements: Vec<PlannedStatement>,
}

impl ExecutionPlan {
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// Editing and execution state for one query buffer against one connection.
///
/// The UI layer owns exactly one session per buffer and funnels every edit
/// and execute action through it; the session replaces what used to be
/// process-wide "current connection" and "current parameters" state. The
/// caller guarantees at most one sync is in flight at a time (the tool
/// disables its controls while a query runs).
#[derive(Default)]
pub struct QuerySession {
    provider: Option<Box<dyn MetadataProvider>>,
    params: Vec<Parameter>,
}

impl QuerySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_provider(provider: Box<dyn MetadataProvider>) -> Self {
        Self {
            provider: Some(provider),
            params: Vec::new(),
        }
    }

    /// Attach or replace the metadata provider for the current connection.
    pub fn set_provider(&mut self, provider: Box<dyn MetadataProvider>) {
        self.provider = Some(provider);
    }

    /// Drop the provider, e.g. on disconnect. Type inference degrades to
    /// VARCHAR until a new one is attached.
    pub fn clear_provider(&mut self) {
        self.provider = None;
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.params
    }

    /// Rebuild the parameter list from the edited text. Returns the new
    /// list for the UI to display; values carry over positionally.
    pub fn sync_text(&mut self, text: &str) -> &[Parameter] {
        self.params = sync::sync(text, &self.params, self.provider.as_deref());
        &self.params
    }

    /// Record a value the user typed into the parameter grid. Ignored when
    /// the index no longer exists (the grid refreshed underneath the edit).
    pub fn set_value(&mut self, index: usize, value: &str) {
        if let Some(param) = self.params.get_mut(index) {
            param.value = value.to_string();
        } else {
            debug!("dropping value edit for stale parameter index {index}");
        }
    }

    /// Distribute the current parameters across the buffer's statements.
    ///
    /// Snapshots the flat list and walks the batch with a fresh cursor:
    /// each statement takes as many parameters as it has placeholders,
    /// strictly left to right. A statement the remaining parameters cannot
    /// satisfy in full gets an empty list and leaves the cursor in place;
    /// the remaining statements are still planned.
    pub fn plan(&self, text: &str) -> ExecutionPlan {
        let flat = self.params.clone();
        let batch = StatementBatch::parse(text);
        let mut cursor = DistributionCursor::new();

        let statements = batch
            .statements
            .into_iter()
            .map(|stmt| {
                let params = distribution::next_slice(&stmt.text, &flat, &mut cursor).to_vec();
                PlannedStatement {
                    text: stmt.text,
                    params,
                }
            })
            .collect();

        ExecutionPlan { statements }
    }
}
