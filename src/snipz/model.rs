use crate::error::{Result, SnipzError};
use crate::language::Language;
use crate::tags::parse_tags;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Store-assigned identifier. Never reused once handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnippetId(pub i64);

impl fmt::Display for SnippetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SnippetId {
    fn from(value: i64) -> Self {
        SnippetId(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: SnippetId,
    pub title: String,
    pub content: String,
    pub language: Language,
    pub description: String,
    pub tags: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
}

impl Snippet {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// Raw, unvalidated input for a new snippet, as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct SnippetDraft {
    pub title: String,
    pub content: String,
    pub language: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

impl SnippetDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// A validated snippet that has not been stored yet.
///
/// Only [`NewSnippet::validate`] builds one, so a store never sees an empty
/// title or content, or a malformed tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSnippet {
    title: String,
    content: String,
    language: Language,
    description: String,
    tags: BTreeSet<String>,
}

impl NewSnippet {
    /// Validates a draft. `fallback` is used when the draft names no language.
    pub fn validate(draft: SnippetDraft, fallback: Language) -> Result<Self> {
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            return Err(SnipzError::validation("title cannot be empty"));
        }
        if draft.content.trim().is_empty() {
            return Err(SnipzError::validation("content cannot be empty"));
        }

        let language = match draft.language.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name
                .parse::<Language>()
                .map_err(|e| SnipzError::validation(e.to_string()))?,
            _ => fallback,
        };

        let tags = parse_tags(&draft.tags).map_err(|e| SnipzError::validation(e.to_string()))?;

        Ok(Self {
            title,
            content: draft.content,
            language,
            description: draft.description.unwrap_or_default().trim().to_string(),
            tags,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Finalizes the record with its assigned id and creation time.
    pub fn into_snippet(self, id: SnippetId, created_at: DateTime<Utc>) -> Snippet {
        Snippet {
            id,
            title: self.title,
            content: self.content,
            language: self.language,
            description: self.description,
            tags: self.tags,
            created_at,
        }
    }
}

/// Creation timestamp at the precision the stores persist.
pub fn creation_time() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Filter for searching snippets. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetQuery {
    text: Option<String>,
    tag: Option<String>,
}

impl SnippetQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(text: Option<String>, tag: Option<String>) -> Self {
        Self::default().text(text).tag(tag)
    }

    /// Substring to look for. Whitespace is significant; only an empty
    /// string counts as no filter.
    pub fn text(mut self, text: Option<String>) -> Self {
        self.text = text.map(|t| t.to_lowercase()).filter(|t| !t.is_empty());
        self
    }

    pub fn tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty());
        self
    }

    /// Lowercased search text, if any.
    pub fn text_term(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Normalized tag filter, if any.
    pub fn tag_term(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.tag.is_none()
    }

    /// Case-insensitive substring match on title or content.
    pub fn matches_text(&self, snippet: &Snippet) -> bool {
        match &self.text {
            None => true,
            Some(term) => {
                snippet.title.to_lowercase().contains(term)
                    || snippet.content.to_lowercase().contains(term)
            }
        }
    }

    pub fn matches_tag(&self, snippet: &Snippet) -> bool {
        match &self.tag {
            None => true,
            Some(tag) => snippet.has_tag(tag),
        }
    }

    pub fn matches(&self, snippet: &Snippet) -> bool {
        self.matches_tag(snippet) && self.matches_text(snippet)
    }
}

/// Most recent first, ties broken by the higher id.
pub fn sort_newest_first(snippets: &mut [Snippet]) {
    snippets.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(draft: SnippetDraft, id: i64) -> Snippet {
        NewSnippet::validate(draft, Language::PlainText)
            .unwrap()
            .into_snippet(SnippetId(id), creation_time())
    }

    #[test]
    fn validate_trims_title_and_keeps_content_verbatim() {
        let draft = SnippetDraft::new("  Quicksort ", "  def qs(): ...\n");
        let new = NewSnippet::validate(draft, Language::PlainText).unwrap();
        assert_eq!(new.title(), "Quicksort");
        assert_eq!(new.content(), "  def qs(): ...\n");
        assert_eq!(new.language(), Language::PlainText);
        assert!(new.tags().is_empty());
    }

    #[test]
    fn validate_rejects_empty_title_or_content() {
        let err = NewSnippet::validate(SnippetDraft::new("", "x"), Language::PlainText).unwrap_err();
        assert!(err.is_validation());
        let err =
            NewSnippet::validate(SnippetDraft::new("t", " \n\t"), Language::PlainText).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn validate_resolves_language_and_fallback() {
        let new = NewSnippet::validate(
            SnippetDraft::new("t", "c").with_language("py"),
            Language::Rust,
        )
        .unwrap();
        assert_eq!(new.language(), Language::Python);

        let new = NewSnippet::validate(SnippetDraft::new("t", "c").with_language("  "), Language::Rust)
            .unwrap();
        assert_eq!(new.language(), Language::Rust);

        let err = NewSnippet::validate(
            SnippetDraft::new("t", "c").with_language("klingon"),
            Language::Rust,
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn validate_normalizes_tags() {
        let new = NewSnippet::validate(
            SnippetDraft::new("t", "c").with_tags(["Sorting,python", "PYTHON"]),
            Language::PlainText,
        )
        .unwrap();
        assert_eq!(new.tags().len(), 2);
        assert!(new.tags().contains("sorting"));

        let err = NewSnippet::validate(
            SnippetDraft::new("t", "c").with_tags(["no spaces"]),
            Language::PlainText,
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn query_matches_title_or_content_case_insensitively() {
        let snippet = stored(SnippetDraft::new("Quicksort", "def qs(xs): pass"), 1);
        assert!(SnippetQuery::all().text(Some("QUICK".into())).matches(&snippet));
        assert!(SnippetQuery::all().text(Some("QS(".into())).matches(&snippet));
        assert!(!SnippetQuery::all().text(Some("merge".into())).matches(&snippet));
    }

    #[test]
    fn query_text_keeps_surrounding_whitespace() {
        let spaced = stored(SnippetDraft::new("a", "def qs( xs ): pass"), 1);
        let tight = stored(SnippetDraft::new("b", "def qs(xs): pass"), 2);
        let query = SnippetQuery::all().text(Some("qs( ".into()));

        assert_eq!(query.text_term(), Some("qs( "));
        assert!(query.matches(&spaced));
        assert!(!query.matches(&tight));
    }

    #[test]
    fn query_tag_and_text_intersect() {
        let snippet = stored(
            SnippetDraft::new("Quicksort", "def qs").with_tags(["sorting"]),
            1,
        );
        let query = SnippetQuery::new(Some("quick".into()), Some("Sorting".into()));
        assert!(query.matches(&snippet));
        let query = SnippetQuery::new(Some("quick".into()), Some("graphs".into()));
        assert!(!query.matches(&snippet));
    }

    #[test]
    fn blank_query_fields_match_everything() {
        let query = SnippetQuery::new(Some(String::new()), Some("  ".into()));
        assert!(query.is_empty());
    }

    #[test]
    fn sort_orders_newest_first_then_by_id() {
        let mut a = stored(SnippetDraft::new("a", "a"), 1);
        let mut b = stored(SnippetDraft::new("b", "b"), 2);
        let mut c = stored(SnippetDraft::new("c", "c"), 3);
        let now = creation_time();
        a.created_at = now - chrono::Duration::seconds(10);
        b.created_at = now;
        c.created_at = now;

        let mut all = vec![a, b, c];
        sort_newest_first(&mut all);
        let ids: Vec<i64> = all.iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}
