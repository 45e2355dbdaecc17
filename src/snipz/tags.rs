//! Tag normalization and validation.
//!
//! Tags are stored lowercase. A valid tag:
//! - contains only ASCII letters, digits, `_` and `-`
//! - starts with a letter
//! - has no consecutive hyphens and does not end with one

use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagError {
    Empty,
    InvalidStart(String, char),
    EndsWithHyphen(String),
    ConsecutiveHyphens(String),
    InvalidCharacter(String, char),
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagError::Empty => write!(f, "tag cannot be empty"),
            TagError::InvalidStart(tag, ch) => {
                write!(f, "tag '{}' must start with a letter, found '{}'", tag, ch)
            }
            TagError::EndsWithHyphen(tag) => write!(f, "tag '{}' cannot end with a hyphen", tag),
            TagError::ConsecutiveHyphens(tag) => {
                write!(f, "tag '{}' cannot contain consecutive hyphens", tag)
            }
            TagError::InvalidCharacter(tag, ch) => write!(
                f,
                "tag '{}' contains invalid character '{}' (letters, digits, '_' and '-' only)",
                tag, ch
            ),
        }
    }
}

impl std::error::Error for TagError {}

/// Trims, lowercases and validates a single tag.
pub fn normalize_tag(raw: &str) -> Result<String, TagError> {
    let tag = raw.trim().to_lowercase();

    let Some(first) = tag.chars().next() else {
        return Err(TagError::Empty);
    };
    if !first.is_ascii_alphabetic() {
        return Err(TagError::InvalidStart(tag, first));
    }
    if tag.ends_with('-') {
        return Err(TagError::EndsWithHyphen(tag));
    }
    if let Some(ch) = tag
        .chars()
        .find(|&ch| !(ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'))
    {
        return Err(TagError::InvalidCharacter(tag, ch));
    }
    if tag.contains("--") {
        return Err(TagError::ConsecutiveHyphens(tag));
    }

    Ok(tag)
}

/// Normalizes a list of raw tag arguments into a set.
///
/// Each argument may hold several comma-separated tags. Blank pieces between
/// commas are skipped, duplicates collapse.
pub fn parse_tags<I, S>(raw: I) -> Result<BTreeSet<String>, TagError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tags = BTreeSet::new();
    for arg in raw {
        for piece in arg.as_ref().split(',') {
            if piece.trim().is_empty() {
                continue;
            }
            tags.insert(normalize_tag(piece)?);
        }
    }
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(normalize_tag("  Sorting ").unwrap(), "sorting");
        assert_eq!(normalize_tag("web_dev").unwrap(), "web_dev");
        assert_eq!(normalize_tag("f7-bar8").unwrap(), "f7-bar8");
    }

    #[test]
    fn rejects_invalid_tags() {
        assert_eq!(normalize_tag("   "), Err(TagError::Empty));
        assert!(matches!(
            normalize_tag("7up"),
            Err(TagError::InvalidStart(_, '7'))
        ));
        assert!(matches!(
            normalize_tag("foo-"),
            Err(TagError::EndsWithHyphen(_))
        ));
        assert!(matches!(
            normalize_tag("foo--bar"),
            Err(TagError::ConsecutiveHyphens(_))
        ));
        assert!(matches!(
            normalize_tag("foo bar"),
            Err(TagError::InvalidCharacter(_, ' '))
        ));
        assert!(matches!(
            normalize_tag("c++"),
            Err(TagError::InvalidCharacter(_, '+'))
        ));
    }

    #[test]
    fn parses_comma_separated_and_repeated_arguments() {
        let tags = parse_tags(["sorting, Python", "python", "algo,,"]).unwrap();
        let expected: Vec<&str> = vec!["algo", "python", "sorting"];
        assert_eq!(tags.iter().map(String::as_str).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn parse_reports_first_invalid_tag() {
        let err = parse_tags(["ok", "bad tag"]).unwrap_err();
        assert!(err.to_string().contains("bad tag"));
    }
}
