//! Borat persona chatbot.
//!
//! A single-binary web service: a browser chat page backed by an
//! OpenAI-compatible completions API, with a fixed comedic persona and a
//! bounded window of recent exchanges as the only model context.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod persona;
pub mod web;
