//! Syntax highlighting, delegated to syntect.
//!
//! Highlighting never fails from the caller's point of view: a language the
//! bundled syntaxes do not cover renders as plain text, and an unknown theme
//! falls back to [`DEFAULT_THEME`].

use crate::language::Language;
use minijinja::HtmlEscape;
use once_cell::sync::Lazy;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::{as_24_bit_terminal_escaped, LinesWithEndings};

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

pub const DEFAULT_THEME: &str = "base16-ocean.dark";

const ANSI_RESET: &str = "\x1b[0m";

pub fn is_known_theme(name: &str) -> bool {
    THEME_SET.themes.contains_key(name)
}

pub fn theme_names() -> Vec<&'static str> {
    THEME_SET.themes.keys().map(String::as_str).collect()
}

fn syntax_for(language: Language) -> &'static SyntaxReference {
    SYNTAX_SET
        .find_syntax_by_token(language.syntax_token())
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text())
}

/// Guesses a language from the first line of `content` (shebangs, XML
/// declarations and the like). Returns plain text when nothing matches.
pub fn guess_language(content: &str) -> Language {
    let first_line = content.lines().next().unwrap_or_default();
    let Some(syntax) = SYNTAX_SET.find_syntax_by_first_line(first_line) else {
        return Language::PlainText;
    };

    Language::ALL
        .iter()
        .copied()
        .filter(|lang| !lang.is_plain_text())
        .find(|lang| syntax_for(*lang).name == syntax.name)
        .unwrap_or_default()
}

#[derive(Debug, Clone)]
pub struct Highlighter {
    theme_name: String,
}

impl Highlighter {
    pub fn new(theme_name: &str) -> Self {
        let theme_name = if is_known_theme(theme_name) {
            theme_name.to_string()
        } else {
            tracing::debug!(theme = theme_name, "unknown theme, using default");
            DEFAULT_THEME.to_string()
        };
        Self { theme_name }
    }

    pub fn theme_name(&self) -> &str {
        &self.theme_name
    }

    fn theme(&self) -> &'static Theme {
        THEME_SET
            .themes
            .get(&self.theme_name)
            .unwrap_or_else(|| &THEME_SET.themes[DEFAULT_THEME])
    }

    /// Renders `content` as an inline-styled `<pre>` block.
    pub fn to_html(&self, content: &str, language: Language) -> String {
        highlighted_html_for_string(content, &SYNTAX_SET, syntax_for(language), self.theme())
            .unwrap_or_else(|_| format!("<pre>{}</pre>", HtmlEscape(content)))
    }

    /// Renders `content` with 24-bit ANSI colors for the terminal.
    pub fn to_terminal(&self, content: &str, language: Language) -> String {
        let mut highlighter = HighlightLines::new(syntax_for(language), self.theme());
        let mut output = String::with_capacity(content.len() * 2);

        for line in LinesWithEndings::from(content) {
            match highlighter.highlight_line(line, &SYNTAX_SET) {
                Ok(ranges) => output.push_str(&as_24_bit_terminal_escaped(&ranges[..], false)),
                Err(_) => output.push_str(line),
            }
        }
        output.push_str(ANSI_RESET);
        output
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(DEFAULT_THEME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_resolves_to_a_syntax() {
        for lang in Language::ALL {
            assert!(
                SYNTAX_SET.find_syntax_by_token(lang.syntax_token()).is_some(),
                "no syntax for {}",
                lang
            );
        }
    }

    #[test]
    fn html_for_python_has_spans() {
        let html = Highlighter::default().to_html("def qs(xs):\n    return xs\n", Language::Python);
        assert!(html.starts_with("<pre"));
        assert!(html.contains("<span"));
        assert!(html.contains("qs"));
    }

    #[test]
    fn html_escapes_markup_in_plain_text() {
        let html = Highlighter::default().to_html("<script>alert(1)</script>\n", Language::PlainText);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn terminal_output_keeps_text_and_resets() {
        let out = Highlighter::default().to_terminal("fn main() {}\n", Language::Rust);
        assert!(out.contains("main"));
        assert!(out.contains("\x1b["));
        assert!(out.ends_with(ANSI_RESET));
    }

    #[test]
    fn unknown_theme_falls_back() {
        let h = Highlighter::new("not-a-theme");
        assert_eq!(h.theme_name(), DEFAULT_THEME);
        assert!(theme_names().contains(&"InspiredGitHub"));
    }

    #[test]
    fn guesses_from_shebang() {
        assert_eq!(guess_language("#!/usr/bin/env python\nprint(1)\n"), Language::Python);
        assert_eq!(guess_language("just some words"), Language::PlainText);
        assert_eq!(guess_language(""), Language::PlainText);
    }
}
