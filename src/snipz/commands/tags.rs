use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

/// Every tag in use, sorted.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let tags = store.list_tags()?.into_iter().collect();
    Ok(CmdResult::default().with_tags(tags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::delete;
    use crate::model::SnippetId;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn follows_the_stored_snippets() {
        let mut store = StoreFixture::new()
            .with_snippet("a", "a", &["python", "sorting"])
            .with_snippet("b", "b", &["rust", "sorting"])
            .store;
        assert_eq!(run(&store).unwrap().tags, vec!["python", "rust", "sorting"]);

        delete::run(&mut store, &[SnippetId(1)]).unwrap();
        assert_eq!(run(&store).unwrap().tags, vec!["rust", "sorting"]);
    }
}
