pub const MIGRATIONS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS snippets (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL CHECK (length(title) > 0),
        content TEXT NOT NULL CHECK (length(content) > 0),
        language TEXT NOT NULL DEFAULT 'text',
        description TEXT NOT NULL DEFAULT '',
        created_at TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS snippet_tags (
        snippet_id INTEGER NOT NULL,
        tag TEXT NOT NULL,
        PRIMARY KEY (snippet_id, tag),
        FOREIGN KEY(snippet_id) REFERENCES snippets(id) ON DELETE CASCADE
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_snippet_tags_tag ON snippet_tags(tag)
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_snippets_created_at ON snippets(created_at, id)
    "#,
];
