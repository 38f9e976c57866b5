//! Request assembly.
//!
//! The remote model is stateless per call; the entire context is rebuilt
//! for every submission in this exact order: persona preamble first, then
//! the memory window chronologically, then the new user turn last.

use crate::chat::memory::MemoryWindow;
use crate::llm::ChatMessage;
use crate::persona::Persona;

/// Assemble the ordered message sequence for one completion request.
pub fn assemble(persona: &Persona, window: &MemoryWindow, input: &str) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(window.len() * 2 + 2);
    messages.push(ChatMessage::system(persona.preamble));
    messages.extend(window.as_messages());
    messages.push(ChatMessage::user(input));
    messages
}
