//! # Rendering Module
//!
//! Styled terminal output from minijinja templates. A `style` filter maps
//! semantic names (see [`super::styles::names`]) to console styles, or to
//! plain text when color is off.
//!
//! Layout math (column widths, truncation, padding) stays in Rust because it
//! needs Unicode-aware widths. Templates only arrange and style.

use super::styles::{self, names};
use super::templates::{
    CONFIG_TEMPLATE, DETAIL_TEMPLATE, LIST_TEMPLATE, MESSAGES_TEMPLATE, TEXT_LIST_TEMPLATE,
};
use chrono::{DateTime, Utc};
use minijinja::{Environment, Value};
use serde::Serialize;
use snipz::api::{CmdMessage, MessageLevel};
use snipz::error::Result;
use snipz::highlight::Highlighter;
use snipz::model::Snippet;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
pub const TIME_WIDTH: usize = 14;
const MIN_TITLE_WIDTH: usize = 12;
const RULE: &str = "────────────────────────────────────────";

#[derive(Serialize)]
struct ListLine {
    id: String,
    language: String,
    title: String,
    tags: String,
    padding: String,
    time_ago: String,
}

#[derive(Serialize)]
struct ListData {
    snippets: Vec<ListLine>,
}

#[derive(Serialize)]
struct DetailEntry {
    id: String,
    title: String,
    language: &'static str,
    tags: String,
    created: String,
    description: String,
    body: String,
}

#[derive(Serialize)]
struct DetailData {
    snippets: Vec<DetailEntry>,
    rule: &'static str,
}

#[derive(Serialize)]
struct TextListData<'a> {
    lines: &'a [String],
    line_style: &'static str,
    empty_message: &'a str,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: &'static str,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

#[derive(Serialize)]
struct MessageData<'a> {
    content: &'a str,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData<'a> {
    messages: Vec<MessageData<'a>>,
}

/// Holds the compiled templates and the color decision for one run.
pub struct Renderer {
    env: Environment<'static>,
    use_color: bool,
}

impl Renderer {
    pub fn new(use_color: bool) -> Result<Self> {
        let mut env = Environment::new();
        env.add_filter("style", move |value: Value, name: String| -> String {
            styles::apply(&name, &value.to_string(), use_color)
        });
        env.add_template("list", LIST_TEMPLATE)?;
        env.add_template("detail", DETAIL_TEMPLATE)?;
        env.add_template("text_list", TEXT_LIST_TEMPLATE)?;
        env.add_template("config", CONFIG_TEMPLATE)?;
        env.add_template("messages", MESSAGES_TEMPLATE)?;
        Ok(Self { env, use_color })
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        Ok(self.env.get_template(name)?.render(data)?)
    }

    /// One line per snippet: id, language, title, tags and age.
    pub fn render_list(&self, snippets: &[Snippet]) -> Result<String> {
        let now = Utc::now();
        let id_width = snippets
            .iter()
            .map(|s| id_label(s).width())
            .max()
            .unwrap_or(0);
        let lang_width = snippets
            .iter()
            .map(|s| s.language.name().width())
            .max()
            .unwrap_or(0);
        let available = LINE_WIDTH.saturating_sub(id_width + lang_width + 2 + 2 + TIME_WIDTH);

        let lines = snippets
            .iter()
            .map(|s| {
                let tags = tag_label(s);
                let tags_width = if tags.is_empty() { 0 } else { tags.width() + 1 };
                let title_budget = available.saturating_sub(tags_width).max(MIN_TITLE_WIDTH);
                let title = truncate_to_width(&s.title, title_budget);
                let used = title.width() + tags_width;

                ListLine {
                    id: format!("{:>width$}", id_label(s), width = id_width),
                    language: format!("{:<width$}", s.language.name(), width = lang_width),
                    title,
                    tags,
                    padding: " ".repeat(available.saturating_sub(used)),
                    time_ago: format_time_ago(s.created_at, now),
                }
            })
            .collect();

        self.render("list", &ListData { snippets: lines })
    }

    /// Full snippets; content is highlighted when color is on.
    pub fn render_detail(&self, snippets: &[Snippet], highlighter: &Highlighter) -> Result<String> {
        let entries = snippets
            .iter()
            .map(|s| {
                let content = s.content.trim_end_matches('\n');
                let body = if self.use_color {
                    highlighter.to_terminal(content, s.language)
                } else {
                    content.to_string()
                };
                DetailEntry {
                    id: id_label(s),
                    title: s.title.clone(),
                    language: s.language.name(),
                    tags: tag_label(s),
                    created: s.created_at.format("%Y-%m-%d %H:%M").to_string(),
                    description: s.description.clone(),
                    body,
                }
            })
            .collect();

        self.render(
            "detail",
            &DetailData {
                snippets: entries,
                rule: RULE,
            },
        )
    }

    pub fn render_text_list(&self, lines: &[String], empty_message: &str) -> Result<String> {
        self.render(
            "text_list",
            &TextListData {
                lines,
                line_style: names::TAGS,
                empty_message,
            },
        )
    }

    pub fn render_config(&self, entries: Vec<(&'static str, String)>) -> Result<String> {
        let entries = entries
            .into_iter()
            .map(|(key, value)| ConfigEntry { key, value })
            .collect();
        self.render("config", &ConfigData { entries })
    }

    pub fn render_messages(&self, messages: &[CmdMessage]) -> Result<String> {
        let messages = messages
            .iter()
            .map(|m| MessageData {
                content: &m.content,
                style: match m.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect();
        self.render("messages", &MessagesData { messages })
    }
}

fn id_label(snippet: &Snippet) -> String {
    format!("#{}", snippet.id)
}

fn tag_label(snippet: &Snippet) -> String {
    snippet
        .tags
        .iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let limit = max_width.saturating_sub(1);
    let mut result = String::new();
    let mut current = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if current + w > limit {
            break;
        }
        result.push(c);
        current += w;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp).to_std().unwrap_or_default();
    let text = timeago::Formatter::new().convert(elapsed);
    format!("{:>width$}", text, width = TIME_WIDTH)
}
