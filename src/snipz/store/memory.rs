use super::DataStore;
use crate::error::Result;
use crate::model::{creation_time, sort_newest_first, NewSnippet, Snippet, SnippetId, SnippetQuery};
use std::collections::{BTreeMap, BTreeSet};

/// In-memory storage for testing. Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    snippets: BTreeMap<SnippetId, Snippet>,
    last_id: i64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn insert(&mut self, snippet: NewSnippet) -> Result<Snippet> {
        self.last_id += 1;
        let stored = snippet.into_snippet(SnippetId(self.last_id), creation_time());
        self.snippets.insert(stored.id, stored.clone());
        Ok(stored)
    }

    fn get(&self, id: SnippetId) -> Result<Option<Snippet>> {
        Ok(self.snippets.get(&id).cloned())
    }

    fn delete(&mut self, id: SnippetId) -> Result<bool> {
        Ok(self.snippets.remove(&id).is_some())
    }

    fn search(&self, query: &SnippetQuery) -> Result<Vec<Snippet>> {
        let mut found: Vec<Snippet> = self
            .snippets
            .values()
            .filter(|s| query.matches(s))
            .cloned()
            .collect();
        sort_newest_first(&mut found);
        Ok(found)
    }

    fn list_tags(&self) -> Result<BTreeSet<String>> {
        Ok(self
            .snippets
            .values()
            .flat_map(|s| s.tags.iter().cloned())
            .collect())
    }
}

// --- Test Fixtures ---

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use crate::language::Language;
    use crate::model::SnippetDraft;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_snippet(mut self, title: &str, content: &str, tags: &[&str]) -> Self {
            let draft = SnippetDraft::new(title, content).with_tags(tags.iter().copied());
            let new = NewSnippet::validate(draft, Language::PlainText).unwrap();
            self.store.insert(new).unwrap();
            self
        }

        pub fn with_snippets(mut self, count: usize) -> Self {
            for i in 0..count {
                let title = format!("Snippet {}", i + 1);
                let content = format!("content of snippet {}", i + 1);
                self = self.with_snippet(&title, &content, &[]);
            }
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn ids_keep_growing_after_delete() {
        let mut store = StoreFixture::new().with_snippets(2).store;
        assert!(store.delete(SnippetId(2)).unwrap());

        let all = store.search(&SnippetQuery::all()).unwrap();
        assert_eq!(all.len(), 1);

        let fixture = StoreFixture { store }.with_snippet("next", "body", &[]);
        let ids: Vec<i64> = fixture
            .store
            .search(&SnippetQuery::all())
            .unwrap()
            .iter()
            .map(|s| s.id.0)
            .collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn tags_are_the_union() {
        let fixture = StoreFixture::new()
            .with_snippet("a", "a", &["x", "y"])
            .with_snippet("b", "b", &["y", "z"]);
        let tags: Vec<_> = fixture.store.list_tags().unwrap().into_iter().collect();
        assert_eq!(tags, vec!["x", "y", "z"]);
    }
}
