//! Terminal templates. Each loop body ends in a newline, so rendered output
//! is newline-terminated (minijinja drops the source's final newline).

pub const LIST_TEMPLATE: &str = r#"{% for s in snippets %}{{ s.id | style("id") }} {{ s.language | style("language") }} {{ s.title | style("title") }}{% if s.tags %} {{ s.tags | style("tags") }}{% endif %}{{ s.padding }}  {{ s.time_ago | style("time") }}
{% else %}{{ "No snippets found." | style("info") }}
{% endfor %}
"#;

pub const DETAIL_TEMPLATE: &str = r#"{% for s in snippets %}{% if not loop.first %}
{% endif %}{{ s.id | style("id") }} {{ s.title | style("title") }}
{{ s.language | style("language") }}{% if s.tags %}  {{ s.tags | style("tags") }}{% endif %}  {{ s.created | style("time") }}
{% if s.description %}{{ s.description }}
{% endif %}{{ rule | style("rule") }}
{{ s.body }}
{% endfor %}
"#;

pub const TEXT_LIST_TEMPLATE: &str = r#"{% for line in lines %}{{ line | style(line_style) }}
{% else %}{{ empty_message | style("info") }}
{% endfor %}
"#;

pub const CONFIG_TEMPLATE: &str = r#"{% for e in entries %}{{ e.key | style("key") }} = {{ e.value }}
{% endfor %}
"#;

pub const MESSAGES_TEMPLATE: &str = r#"{% for m in messages %}{{ m.content | style(m.style) }}
{% endfor %}
"#;
