//! # CLI Layer
//!
//! One UI client for snipz. This is the only place that:
//! - Parses arguments
//! - Reads stdin and prompts for confirmation
//! - Writes to stdout/stderr and files
//! - Talks to the OS clipboard
//!
//! Handlers call `SnipzApi` and hand the resulting `CmdResult` to the
//! [`Renderer`]. Business rules stay in the library's command layer.

use super::render::Renderer;
use super::setup::{Cli, Commands};
use clap::Parser;
use snipz::api::{CmdMessage, ConfigAction, SnipzApi};
use snipz::clipboard::copy_to_clipboard;
use snipz::error::{Result, SnipzError};
use snipz::highlight::Highlighter;
use snipz::init::{initialize, resolve_paths};
use snipz::model::{SnippetDraft, SnippetQuery};
use snipz::page::render_page;
use snipz::store::sqlite::SqliteStore;
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Log filter, e.g. `SNIPZ_LOG=snipz=trace`.
const LOG_ENV: &str = "SNIPZ_LOG";

struct AppContext {
    api: SnipzApi<SqliteStore>,
    renderer: Renderer,
    highlighter: Highlighter,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    let outcome = match cli.command {
        Some(Commands::Add {
            title,
            content,
            language,
            tags,
            description,
        }) => handle_add(&mut ctx, title, content, language, tags, description),
        Some(Commands::List { tag }) => handle_list(&ctx, tag),
        None => handle_list(&ctx, None),
        Some(Commands::Search { terms, tag }) => handle_search(&ctx, terms, tag),
        Some(Commands::View { ids }) => handle_view(&ctx, ids),
        Some(Commands::Delete { ids, yes }) => handle_delete(&mut ctx, ids, yes),
        Some(Commands::Copy { id }) => handle_copy(&ctx, id),
        Some(Commands::Tags) => handle_tags(&ctx),
        Some(Commands::Languages) => handle_languages(&ctx),
        Some(Commands::Html { output, terms, tag }) => handle_html(&ctx, output, terms, tag),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    };
    outcome?;

    // Closing explicitly surfaces checkpoint and unlock failures.
    ctx.api.into_store().close()
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let paths = resolve_paths(cli.db.as_deref())?;
    let ctx = initialize(paths)?;
    let use_color = !cli.no_color && console::colors_enabled();

    Ok(AppContext {
        highlighter: Highlighter::new(&ctx.config.theme),
        renderer: Renderer::new(use_color)?,
        api: ctx.api,
    })
}

fn print_messages(ctx: &AppContext, messages: &[CmdMessage]) -> Result<()> {
    print!("{}", ctx.renderer.render_messages(messages)?);
    Ok(())
}

fn read_piped_stdin() -> Result<Option<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    Ok(Some(buffer))
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    content: Option<String>,
    language: Option<String>,
    tags: Vec<String>,
    description: Option<String>,
) -> Result<()> {
    let content = match content {
        Some(content) => content,
        None => read_piped_stdin()?.ok_or_else(|| {
            SnipzError::validation("content is required (pass it as an argument or pipe it in)")
        })?,
    };

    let mut draft = SnippetDraft::new(title, content).with_tags(tags);
    if let Some(language) = language {
        draft = draft.with_language(language);
    }
    if let Some(description) = description {
        draft = draft.with_description(description);
    }

    let result = ctx.api.add_snippet(draft)?;
    print_messages(ctx, &result.messages)
}

fn handle_list(ctx: &AppContext, tag: Option<String>) -> Result<()> {
    let result = ctx.api.search_snippets(SnippetQuery::all().tag(tag))?;
    print!("{}", ctx.renderer.render_list(&result.listed_snippets)?);
    Ok(())
}

fn handle_search(ctx: &AppContext, terms: Vec<String>, tag: Option<String>) -> Result<()> {
    let query = SnippetQuery::new(Some(terms.join(" ")), tag);
    let result = ctx.api.search_snippets(query)?;
    if !result.listed_snippets.is_empty() {
        print!("{}", ctx.renderer.render_list(&result.listed_snippets)?);
    }
    print_messages(ctx, &result.messages)
}

fn handle_view(ctx: &AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.view_snippets(&ids)?;
    print!(
        "{}",
        ctx.renderer
            .render_detail(&result.listed_snippets, &ctx.highlighter)?
    );
    print_messages(ctx, &result.messages)
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn handle_delete(ctx: &mut AppContext, ids: Vec<String>, yes: bool) -> Result<()> {
    if !yes && io::stdin().is_terminal() {
        let preview = ctx.api.view_snippets(&ids)?;
        if preview.listed_snippets.is_empty() {
            return print_messages(ctx, &preview.messages);
        }
        let titles: Vec<String> = preview
            .listed_snippets
            .iter()
            .map(|s| format!("#{} {}", s.id, s.title))
            .collect();
        if !confirm(&format!("Delete {}?", titles.join(", ")))? {
            println!("Aborted.");
            return Ok(());
        }
    }

    let result = ctx.api.delete_snippets(&ids)?;
    print_messages(ctx, &result.messages)
}

fn handle_copy(ctx: &AppContext, id: String) -> Result<()> {
    let result = ctx.api.view_snippets(&[id])?;
    let Some(snippet) = result.listed_snippets.first() else {
        return print_messages(ctx, &result.messages);
    };

    copy_to_clipboard(&snippet.content)?;
    print_messages(
        ctx,
        &[CmdMessage::success(format!(
            "Copied #{} to clipboard: {}",
            snippet.id, snippet.title
        ))],
    )
}

fn handle_tags(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_tags()?;
    print!(
        "{}",
        ctx.renderer.render_text_list(&result.tags, "No tags yet.")?
    );
    Ok(())
}

fn handle_languages(ctx: &AppContext) -> Result<()> {
    let names: Vec<String> = ctx
        .api
        .languages()
        .iter()
        .map(|l| l.name().to_string())
        .collect();
    print!("{}", ctx.renderer.render_text_list(&names, "")?);
    Ok(())
}

fn handle_html(
    ctx: &AppContext,
    output: Option<PathBuf>,
    terms: Vec<String>,
    tag: Option<String>,
) -> Result<()> {
    let text = (!terms.is_empty()).then(|| terms.join(" "));
    let query = SnippetQuery::new(text, tag);
    let heading = match (query.text_term(), query.tag_term()) {
        (None, None) => "Snippets".to_string(),
        (Some(text), None) => format!("Snippets matching \"{}\"", text),
        (None, Some(tag)) => format!("Snippets tagged #{}", tag),
        (Some(text), Some(tag)) => format!("Snippets matching \"{}\" tagged #{}", text, tag),
    };

    let snippets = ctx.api.search_snippets(query)?.listed_snippets;
    let tags = ctx.api.list_tags()?.tags;
    let page = render_page(&heading, &snippets, &tags, &ctx.highlighter)?;

    match output {
        Some(path) => {
            std::fs::write(&path, page)?;
            print_messages(
                ctx,
                &[CmdMessage::success(format!(
                    "Wrote {} snippet(s) to {}",
                    snippets.len(),
                    path.display()
                ))],
            )
        }
        None => {
            io::stdout().write_all(page.as_bytes())?;
            Ok(())
        }
    }
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print!("{}", ctx.renderer.render_config(config.entries())?);
        }
    }
    print_messages(ctx, &result.messages)
}
