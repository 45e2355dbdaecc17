//! Web view: a self-contained HTML page listing snippets.
//!
//! Each snippet is shown with its metadata and highlighted code. Copy
//! buttons hand the raw content to the browser clipboard; a filter box
//! narrows the list client-side by text or tag.

use crate::error::Result;
use crate::highlight::Highlighter;
use crate::model::Snippet;
use chrono::{DateTime, Utc};
use minijinja::Environment;
use serde::Serialize;

const PAGE_NAME: &str = "page.html";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{ heading }}</title>
<style>
  body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 60rem; color: #222; }
  header p { color: #777; }
  .tags a { margin-right: .5rem; color: #2b6cb0; cursor: pointer; }
  article { border: 1px solid #ddd; border-radius: 6px; margin: 1.5rem 0; padding: 0 1rem 1rem; }
  article h2 { font-size: 1.1rem; margin-bottom: .2rem; }
  .meta { color: #777; font-size: .85rem; }
  .lang { text-transform: uppercase; font-weight: bold; margin-right: .5rem; }
  pre { padding: .8rem; border-radius: 4px; overflow-x: auto; }
  textarea.raw { display: none; }
  input[type=search] { width: 100%; padding: .4rem; font-size: 1rem; }
</style>
</head>
<body>
<header>
  <h1>{{ heading }}</h1>
  <p>{{ count }} snippet{% if count != 1 %}s{% endif %} &middot; generated {{ generated_at }}</p>
  <input type="search" id="filter" placeholder="Filter by text or tag">
  {% if tags %}<p class="tags">{% for tag in tags %}<a data-tag="{{ tag }}">#{{ tag }}</a>{% endfor %}</p>{% endif %}
</header>
<main>
{% for s in snippets %}
<article data-search="{{ s.search_text }}" data-tags="{{ s.tags | join(' ') }}">
  <h2>#{{ s.id }} {{ s.title }}</h2>
  <div class="meta">
    <span class="lang">{{ s.language }}</span>
    {% for tag in s.tags %}<span>#{{ tag }}</span> {% endfor %}
    <span>{{ s.created_at }}</span>
    <button type="button" data-copy="raw-{{ s.id }}">Copy</button>
  </div>
  {% if s.description %}<p>{{ s.description }}</p>{% endif %}
  {{ s.html | safe }}
  <textarea class="raw" id="raw-{{ s.id }}" readonly>{{ s.content }}</textarea>
</article>
{% else %}
<p>No snippets found.</p>
{% endfor %}
</main>
<script>
  document.querySelectorAll("button[data-copy]").forEach(function (button) {
    button.addEventListener("click", function () {
      var raw = document.getElementById(button.dataset.copy).value;
      navigator.clipboard.writeText(raw).then(function () {
        button.textContent = "Copied";
        setTimeout(function () { button.textContent = "Copy"; }, 1500);
      });
    });
  });
  var filter = document.getElementById("filter");
  function applyFilter() {
    var term = filter.value.trim().toLowerCase();
    document.querySelectorAll("article").forEach(function (article) {
      var tags = article.dataset.tags.split(" ");
      var hit = term === "" || article.dataset.search.indexOf(term) >= 0 || tags.indexOf(term.replace(/^#/, "")) >= 0;
      article.style.display = hit ? "" : "none";
    });
  }
  filter.addEventListener("input", applyFilter);
  document.querySelectorAll(".tags a").forEach(function (link) {
    link.addEventListener("click", function () { filter.value = link.dataset.tag; applyFilter(); });
  });
</script>
</body>
</html>
"#;

#[derive(Serialize)]
struct PageData<'a> {
    heading: &'a str,
    generated_at: String,
    count: usize,
    tags: &'a [String],
    snippets: Vec<PageSnippet<'a>>,
}

#[derive(Serialize)]
struct PageSnippet<'a> {
    id: i64,
    title: &'a str,
    language: &'static str,
    description: &'a str,
    tags: Vec<&'a str>,
    created_at: String,
    content: &'a str,
    search_text: String,
    html: String,
}

fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Renders the page for `snippets`. `tags` feeds the tag filter links.
pub fn render_page(
    heading: &str,
    snippets: &[Snippet],
    tags: &[String],
    highlighter: &Highlighter,
) -> Result<String> {
    let entries = snippets
        .iter()
        .map(|s| PageSnippet {
            id: s.id.0,
            title: &s.title,
            language: s.language.name(),
            description: &s.description,
            tags: s.tags.iter().map(String::as_str).collect(),
            created_at: format_date(&s.created_at),
            content: &s.content,
            search_text: format!("{}\n{}", s.title, s.content).to_lowercase(),
            html: highlighter.to_html(&s.content, s.language),
        })
        .collect();

    let data = PageData {
        heading,
        generated_at: format_date(&Utc::now()),
        count: snippets.len(),
        tags,
        snippets: entries,
    };

    let mut env = Environment::new();
    env.add_template(PAGE_NAME, PAGE_TEMPLATE)?;
    let output = env.get_template(PAGE_NAME)?.render(&data)?;
    Ok(output)
}
