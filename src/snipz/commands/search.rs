use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::SnippetQuery;
use crate::store::DataStore;

/// Lists snippets matching `query`, most recent first.
pub fn run<S: DataStore>(store: &S, query: SnippetQuery) -> Result<CmdResult> {
    let snippets = store.search(&query)?;
    let mut result = CmdResult::default();

    if snippets.is_empty() && !query.is_empty() {
        result.add_message(CmdMessage::info("No snippets match."));
    }

    Ok(result.with_listed_snippets(snippets))
}
