use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style names usable from templates via `{{ value | style("name") }}`.
pub mod names {
    pub const ID: &str = "id";
    pub const LANGUAGE: &str = "language";
    pub const TITLE: &str = "title";
    pub const TAGS: &str = "tags";
    pub const TIME: &str = "time";
    pub const RULE: &str = "rule";
    pub const KEY: &str = "key";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

pub static SNIPZ_STYLES: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    HashMap::from([
        (names::ID, Style::new().yellow()),
        (names::LANGUAGE, Style::new().cyan()),
        (names::TITLE, Style::new().bold()),
        (names::TAGS, Style::new().magenta()),
        (names::TIME, Style::new().color256(246).italic()),
        (names::RULE, Style::new().color256(240)),
        (names::KEY, Style::new().bold()),
        (names::INFO, Style::new().dim()),
        (names::SUCCESS, Style::new().green()),
        (names::WARNING, Style::new().yellow()),
        (names::ERROR, Style::new().red()),
    ])
});

/// Applies the named style, or returns the text untouched when color is off
/// or the name is unknown.
pub fn apply(name: &str, text: &str, use_color: bool) -> String {
    match SNIPZ_STYLES.get(name) {
        Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_when_color_is_off() {
        assert_eq!(apply(names::TITLE, "Hello", false), "Hello");
    }

    #[test]
    fn ansi_when_color_is_on() {
        let styled = apply(names::SUCCESS, "ok", true);
        assert!(styled.contains("\x1b["));
        assert!(styled.contains("ok"));
    }

    #[test]
    fn unknown_style_is_plain() {
        assert_eq!(apply("nope", "x", true), "x");
    }
}
