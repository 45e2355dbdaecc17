use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::SnippetId;
use crate::store::DataStore;

/// Fetches snippets by id, in the order given. Missing ids become warnings.
pub fn run<S: DataStore>(store: &S, ids: &[SnippetId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        match store.get(id)? {
            Some(snippet) => result.listed_snippets.push(snippet),
            None => result.add_message(CmdMessage::warning(format!("No snippet #{}", id))),
        }
    }

    Ok(result)
}
