use log::debug;

use crate::db::metadata::MetadataProvider;
use crate::db::query::{context, scanner};
use crate::db::types::Parameter;

/// Rebuild the ordered parameter list after a text edit.
///
/// One entry per placeholder, in order of occurrence. Values are carried
/// over positionally: index i keeps its previous value if index i existed
/// before, otherwise starts empty. Reconciliation is positional only — no
/// identity is tracked across edits, so inserting or removing a placeholder
/// in the middle of the text shifts every later value by one slot. That is
/// the inherited behavior the surrounding tool expects.
pub fn sync(
    text: &str,
    previous: &[Parameter],
    provider: Option<&dyn MetadataProvider>,
) -> Vec<Parameter> {
    let offsets = scanner::scan(text);
    let mut params: Vec<Parameter> = Vec::with_capacity(offsets.len());

    for (i, offset) in offsets.iter().enumerate() {
        let value = previous
            .get(i)
            .map(|p| p.value.clone())
            .unwrap_or_default();

        let inferred = context::classify(text, *offset, provider);
        let name = dedupe_name(inferred.name, &params);

        params.push(Parameter {
            name,
            param_type: inferred.param_type,
            value,
        });
    }

    debug!(
        "parameter sync: {} placeholder(s), {} value(s) carried over",
        params.len(),
        previous.len().min(params.len())
    );
    params
}

/// Append a numeric suffix when two placeholders infer the same name, so a
/// query like `WHERE ID = ? OR ID = ?` shows `@ID` and `@ID1` in the grid.
fn dedupe_name(base: String, taken: &[Parameter]) -> String {
    let collides = |candidate: &str| {
        taken
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(candidate))
    };
    if !collides(&base) {
        return base;
    }
    let mut n = 1;
    loop {
        let candidate = format!("{}{}", base, n);
        if !collides(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
