//! codetr - finds untranslated comments and string literals in source code
//!
//! codetr scans C#, JavaScript and SQL sources for comments and string
//! literals written in a configured source language (Russian by default),
//! confirms the language with a LibreTranslate-compatible service and
//! suggests a translation into the target language.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and effective settings
//! - `core`: Fragment tokenizer and extraction pipeline
//! - `file_scanner`: Source discovery for `check`
//! - `logging`: Diagnostics subscriber setup
//! - `mcp`: Model Context Protocol server implementation
//! - `service`: Language detection and translation clients
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod file_scanner;
pub mod logging;
pub mod mcp;
pub mod service;
pub mod utils;
