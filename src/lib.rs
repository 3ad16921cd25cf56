//! Chatmark renders customer-service chat messages, including ones still
//! streaming from an AI backend, into sanitized HTML with structured widget
//! cards spliced in where the message carried fenced widget blocks.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`render`] owns the pipeline: streaming-safe preprocessing, widget block
//!   extraction, markdown rendering through an injectable rule table,
//!   sanitization, placeholder splicing, and the bounded render cache.
//! - [`widgets`] defines the typed widget payloads (orders, logistics,
//!   products, price comparisons), their HTML rendering, and the action
//!   protocol used when a widget button is activated.
//! - [`core`] holds configuration loading/persistence and shared constants.
//! - [`cli`] implements the `chatmark` command-line entrypoint.
//! - [`utils`] contains URL sanitizing, syntax highlighting, clipboard access,
//!   and logging setup.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`].

pub mod cli;
pub mod core;
pub mod render;
pub mod utils;
pub mod widgets;
