use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::highlight::guess_language;
use crate::language::Language;
use crate::model::{NewSnippet, SnippetDraft};
use crate::store::DataStore;

/// Validates and stores a new snippet.
///
/// When the draft names no language, `default_language` applies; if that is
/// plain text the language is guessed from the content's first line.
/// Validation failures leave the store untouched.
pub fn run<S: DataStore>(
    store: &mut S,
    draft: SnippetDraft,
    default_language: Language,
) -> Result<CmdResult> {
    let fallback = if default_language.is_plain_text() {
        guess_language(&draft.content)
    } else {
        default_language
    };

    let new = NewSnippet::validate(draft, fallback)?;
    let snippet = store.insert(new)?;
    tracing::info!(id = snippet.id.0, language = %snippet.language, "snippet added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Snippet added (#{}): {}",
        snippet.id, snippet.title
    )));
    Ok(result.with_affected_snippets(vec![snippet]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::search;
    use crate::model::SnippetQuery;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_and_reports_the_stored_snippet() {
        let mut store = InMemoryStore::new();
        let draft = SnippetDraft::new("Quicksort", "def qs(...): ...")
            .with_language("python")
            .with_tags(["sorting", "python"]);

        let result = run(&mut store, draft, Language::PlainText).unwrap();
        assert_eq!(result.affected_snippets.len(), 1);
        let snippet = &result.affected_snippets[0];
        assert_eq!(snippet.title, "Quicksort");
        assert_eq!(snippet.language, Language::Python);
        assert!(snippet.has_tag("sorting"));
        assert!(result.messages[0].content.contains("Quicksort"));

        let found = search::run(&store, SnippetQuery::all().text(Some("Quicksort".into()))).unwrap();
        assert_eq!(found.listed_snippets[0].id, snippet.id);
    }

    #[test]
    fn rejected_input_changes_nothing() {
        let mut store = InMemoryStore::new();
        run(&mut store, SnippetDraft::new("keep", "me"), Language::PlainText).unwrap();

        let err = run(&mut store, SnippetDraft::new("", "body"), Language::PlainText).unwrap_err();
        assert!(err.is_validation());
        let err = run(&mut store, SnippetDraft::new("title", ""), Language::PlainText).unwrap_err();
        assert!(err.is_validation());

        let all = search::run(&store, SnippetQuery::all()).unwrap();
        assert_eq!(all.listed_snippets.len(), 1);
    }

    #[test]
    fn default_language_applies_when_none_given() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, SnippetDraft::new("t", "x = 1"), Language::Ruby).unwrap();
        assert_eq!(result.affected_snippets[0].language, Language::Ruby);
    }

    #[test]
    fn plain_text_default_guesses_from_shebang() {
        let mut store = InMemoryStore::new();
        let draft = SnippetDraft::new("script", "#!/usr/bin/env python\nprint('hi')\n");
        let result = run(&mut store, draft, Language::PlainText).unwrap();
        assert_eq!(result.affected_snippets[0].language, Language::Python);
    }

    #[test]
    fn explicit_language_beats_guess() {
        let mut store = InMemoryStore::new();
        let draft = SnippetDraft::new("script", "#!/usr/bin/env python\n").with_language("text");
        let result = run(&mut store, draft, Language::PlainText).unwrap();
        assert_eq!(result.affected_snippets[0].language, Language::PlainText);
    }
}
