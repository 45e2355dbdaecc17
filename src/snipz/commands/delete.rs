use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::SnippetId;
use crate::store::DataStore;

/// Deletes snippets by id. Ids that do not exist produce a warning, not an error.
pub fn run<S: DataStore>(store: &mut S, ids: &[SnippetId]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for &id in ids {
        let Some(snippet) = store.get(id)? else {
            result.add_message(CmdMessage::warning(format!("No snippet #{}", id)));
            continue;
        };

        if store.delete(id)? {
            tracing::info!(id = id.0, "snippet deleted");
            result.add_message(CmdMessage::success(format!(
                "Snippet deleted (#{}): {}",
                id, snippet.title
            )));
            result.affected_snippets.push(snippet);
        } else {
            // Removed by someone else between the lookup and the delete.
            result.add_message(CmdMessage::warning(format!("No snippet #{}", id)));
        }
    }

    Ok(result)
}
