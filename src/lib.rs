//! HOPEr is a terminal client for an empathetic mental-health support chatbot.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the chat session: transcript, pending state, the transport
//!   seam to the chat backend, citations and configuration.
//! - [`mood`] implements the mood check-in: question bank, scoring, resumable
//!   progress and saving results.
//! - [`api`] defines the JSON payloads exchanged with the backends.
//! - [`cli`] parses arguments and drives the line-based chat and quiz screens.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`].

pub mod api;
pub mod cli;
pub mod core;
pub mod mood;
pub mod utils;
