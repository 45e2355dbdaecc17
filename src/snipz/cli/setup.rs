use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "snipz", bin_name = "snipz", version)]
#[command(
    about = "Local code snippet manager with tags, search and syntax highlighting",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Database file to use instead of the default
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub db: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Disable colors and highlighting
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a snippet (content from the argument or piped stdin)
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Snippet title
        title: String,

        /// Snippet content (read from stdin when omitted)
        content: Option<String>,

        /// Language (e.g. python, rust, js); guessed when omitted
        #[arg(short, long)]
        language: Option<String>,

        /// Tag to attach (repeatable, or comma-separated)
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Short description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// List snippets, newest first
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Only snippets with this tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Search titles and content (case-insensitive)
    #[command(alias = "s", display_order = 3)]
    Search {
        /// Search terms (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        terms: Vec<String>,

        /// Only snippets with this tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Show one or more snippets with highlighting
    #[command(alias = "show", display_order = 10)]
    View {
        /// Snippet ids (e.g. 3 or #3)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Delete one or more snippets
    #[command(alias = "rm", display_order = 11)]
    Delete {
        /// Snippet ids (e.g. 3 or #3)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Copy a snippet's content to the clipboard
    #[command(alias = "cp", display_order = 12)]
    Copy {
        /// Snippet id
        id: String,
    },

    /// List all tags in use
    #[command(display_order = 20)]
    Tags,

    /// List supported languages
    #[command(display_order = 21)]
    Languages,

    /// Write an HTML page of snippets (stdout unless --output)
    #[command(display_order = 22)]
    Html {
        /// Output file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Search terms; all snippets when omitted
        terms: Vec<String>,

        /// Only snippets with this tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (default-language, theme)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
