//! Conversation core.
//!
//! - Transcript: the append-only turn store the UI renders
//! - Memory window: bounded model context (most recent K exchanges)
//! - Prompt assembly: persona, then history, then the new input
//! - Engine: one submission processed as one atomic step
//! - Sessions: per-conversation state with idle pruning

mod engine;
mod memory;
mod prompt;
mod session;
mod transcript;

pub use engine::{ChatEngine, TurnOutcome};
pub use memory::{Exchange, MemoryWindow};
pub use prompt::assemble;
pub use session::{Session, SessionManager};
pub use transcript::{Speaker, Transcript, Turn};
