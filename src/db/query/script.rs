use crate::db::query::scanner;

/// One statement of a batch, annotated with how many placeholders it binds.
#[derive(Debug, Clone)]
pub struct BatchStatement {
    pub text: String,
    pub placeholder_count: usize,
}

/// An execution request's worth of statements, created fresh per execute
/// action and never persisted.
#[derive(Debug, Clone)]
pub struct StatementBatch {
    pub statements: Vec<BatchStatement>,
}

/// Split a buffer into individual statements on the `;` separator, trimming
/// each and discarding empty fragments. Separators inside string literals or
/// comments are not recognized (known limitation, matched by the scanner).
pub fn split(text: &str) -> Vec<String> {
    text.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl StatementBatch {
    pub fn parse(text: &str) -> Self {
        let statements = split(text)
            .into_iter()
            .map(|text| {
                let placeholder_count = scanner::count(&text);
                BatchStatement {
                    text,
                    placeholder_count,
                }
            })
            .collect();
        Self { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Total placeholders across the whole batch.
    pub fn placeholder_count(&self) -> usize {
        self.statements.iter().map(|s| s.placeholder_count).sum()
    }
}
