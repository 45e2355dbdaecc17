//! Languages a snippet can be declared as.
//!
//! The set is closed on purpose: it lists what the bundled highlighter can
//! color. Anything else is stored as [`Language::PlainText`], whose canonical
//! name is `text`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    #[default]
    PlainText,
    Bash,
    C,
    Cpp,
    CSharp,
    Css,
    Diff,
    Go,
    Haskell,
    Html,
    Java,
    JavaScript,
    Json,
    Latex,
    Lua,
    Makefile,
    Markdown,
    Perl,
    Php,
    Python,
    Ruby,
    Rust,
    Scala,
    Sql,
    Xml,
    Yaml,
}

impl Language {
    pub const ALL: &'static [Language] = &[
        Language::PlainText,
        Language::Bash,
        Language::C,
        Language::Cpp,
        Language::CSharp,
        Language::Css,
        Language::Diff,
        Language::Go,
        Language::Haskell,
        Language::Html,
        Language::Java,
        Language::JavaScript,
        Language::Json,
        Language::Latex,
        Language::Lua,
        Language::Makefile,
        Language::Markdown,
        Language::Perl,
        Language::Php,
        Language::Python,
        Language::Ruby,
        Language::Rust,
        Language::Scala,
        Language::Sql,
        Language::Xml,
        Language::Yaml,
    ];

    /// Canonical lowercase name, as stored and displayed.
    pub fn name(&self) -> &'static str {
        match self {
            Language::PlainText => "text",
            Language::Bash => "bash",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::CSharp => "csharp",
            Language::Css => "css",
            Language::Diff => "diff",
            Language::Go => "go",
            Language::Haskell => "haskell",
            Language::Html => "html",
            Language::Java => "java",
            Language::JavaScript => "javascript",
            Language::Json => "json",
            Language::Latex => "latex",
            Language::Lua => "lua",
            Language::Makefile => "makefile",
            Language::Markdown => "markdown",
            Language::Perl => "perl",
            Language::Php => "php",
            Language::Python => "python",
            Language::Ruby => "ruby",
            Language::Rust => "rust",
            Language::Scala => "scala",
            Language::Sql => "sql",
            Language::Xml => "xml",
            Language::Yaml => "yaml",
        }
    }

    /// Accepted spellings besides the canonical name.
    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Language::PlainText => &["plain", "plaintext", "txt", "none"],
            Language::Bash => &["sh", "shell", "zsh"],
            Language::C => &["h"],
            Language::Cpp => &["c++", "cc", "cxx", "hpp"],
            Language::CSharp => &["c#", "cs"],
            Language::Css => &[],
            Language::Diff => &["patch"],
            Language::Go => &["golang"],
            Language::Haskell => &["hs"],
            Language::Html => &["htm"],
            Language::Java => &[],
            Language::JavaScript => &["js", "node"],
            Language::Json => &[],
            Language::Latex => &["tex"],
            Language::Lua => &[],
            Language::Makefile => &["make", "mk"],
            Language::Markdown => &["md"],
            Language::Perl => &["pl"],
            Language::Php => &[],
            Language::Python => &["py", "python3"],
            Language::Ruby => &["rb"],
            Language::Rust => &["rs"],
            Language::Scala => &[],
            Language::Sql => &[],
            Language::Xml => &[],
            Language::Yaml => &["yml"],
        }
    }

    /// Token the highlighter resolves to a syntax definition (an extension).
    pub fn syntax_token(&self) -> &'static str {
        match self {
            Language::PlainText => "txt",
            Language::Bash => "sh",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::CSharp => "cs",
            Language::Css => "css",
            Language::Diff => "diff",
            Language::Go => "go",
            Language::Haskell => "hs",
            Language::Html => "html",
            Language::Java => "java",
            Language::JavaScript => "js",
            Language::Json => "json",
            Language::Latex => "tex",
            Language::Lua => "lua",
            Language::Makefile => "makefile",
            Language::Markdown => "md",
            Language::Perl => "pl",
            Language::Php => "php",
            Language::Python => "py",
            Language::Ruby => "rb",
            Language::Rust => "rs",
            Language::Scala => "scala",
            Language::Sql => "sql",
            Language::Xml => "xml",
            Language::Yaml => "yaml",
        }
    }

    pub fn is_plain_text(&self) -> bool {
        matches!(self, Language::PlainText)
    }

    /// Parses a stored value, mapping anything unrecognised to plain text.
    pub fn from_stored(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown language '{}' (run `snipz languages` for the supported list)",
            self.0
        )
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(Language::PlainText);
        }
        Language::ALL
            .iter()
            .find(|lang| lang.name() == needle || lang.aliases().contains(&needle.as_str()))
            .copied()
            .ok_or_else(|| UnknownLanguage(s.trim().to_string()))
    }
}

impl TryFrom<String> for Language {
    type Error = UnknownLanguage;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.name().to_string()
    }
}
