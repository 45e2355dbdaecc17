//! # Snipz Architecture
//!
//! Snipz is a **local code snippet library** with a CLI client on top. Snippets
//! (title, content, language, tags) live in a single SQLite file; everything
//! above the store is UI-agnostic.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - Clipboard, prompts, writing HTML files                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (id strings → SnippetId)               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation and business rules                            │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - SqliteStore (production), InMemoryStore (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Presentation helpers that do not touch the terminal ([`highlight`],
//! [`page`]) live in the library so other front ends can reuse them.
//!
//! ## Testing
//!
//! Commands carry most of the unit tests and run against `InMemoryStore`.
//! `SqliteStore` has its own tests for persistence and file-level failures.
//! The binary is covered end to end in `tests/cli_integration.rs`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Snippet`, `SnippetDraft`, `SnippetQuery`)
//! - [`language`]: The closed set of supported languages
//! - [`tags`]: Tag normalization
//! - [`highlight`]: Syntax highlighting for terminal and HTML
//! - [`page`]: The standalone HTML web view
//! - [`config`]: Configuration management
//! - [`init`]: Path resolution and context setup
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod highlight;
pub mod init;
pub mod language;
pub mod model;
pub mod page;
pub mod store;
pub mod tags;
