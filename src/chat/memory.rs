//! Bounded conversational memory.
//!
//! Holds the most recent K completed exchanges (user turn plus assistant
//! reply) for model context. Eviction is FIFO, unconditional, and silent;
//! it is a normal state transition, not an error.

use std::collections::VecDeque;

use crate::llm::ChatMessage;

/// One user turn paired with its assistant reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub user: String,
    pub assistant: String,
}

/// Sliding window over the most recent exchanges.
#[derive(Debug, Clone)]
pub struct MemoryWindow {
    exchanges: VecDeque<Exchange>,
    max_exchanges: usize,
}

impl MemoryWindow {
    /// Create a window holding at most `max_exchanges` exchanges.
    pub fn new(max_exchanges: usize) -> Self {
        Self {
            exchanges: VecDeque::with_capacity(max_exchanges + 1),
            max_exchanges,
        }
    }

    /// Record a completed exchange, evicting the oldest when over capacity.
    pub fn push(&mut self, exchange: Exchange) {
        self.exchanges.push_back(exchange);
        while self.exchanges.len() > self.max_exchanges {
            self.exchanges.pop_front();
        }
    }

    /// The window as role-tagged messages in chronological order.
    pub fn as_messages(&self) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(self.exchanges.len() * 2);
        for exchange in &self.exchanges {
            messages.push(ChatMessage::user(&exchange.user));
            messages.push(ChatMessage::assistant(&exchange.assistant));
        }
        messages
    }

    /// Exchanges currently in the window, oldest first.
    pub fn exchanges(&self) -> impl Iterator<Item = &Exchange> {
        self.exchanges.iter()
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }
}
