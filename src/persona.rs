//! The scripted persona: preamble, greeting, and display details.
//!
//! The preamble is the system message prepended to every completion request.
//! The greeting seeds each new transcript but never enters the memory
//! window; the remote model only ever sees the preamble plus recent
//! exchanges.

/// A fixed chatbot character.
#[derive(Debug, Clone)]
pub struct Persona {
    /// Display name shown in the UI header.
    pub name: &'static str,
    /// System message establishing the character.
    pub preamble: &'static str,
    /// Scripted first assistant turn for a fresh session.
    pub greeting: &'static str,
    /// Emoji avatar for assistant turns in the UI.
    pub avatar: &'static str,
}

/// The one persona this service ships.
pub fn borat() -> Persona {
    Persona {
        name: "Borat Sagdiyev",
        preamble: "You are Borat Sagdiyev, a fictional Kazakh journalist created and portrayed by Sacha Baron Cohen.\n\
            You must speak and behave in Borat's distinctive style - broken, exaggerated English with enthusiastic catchphrases\n\
            (e.g., \"Very nice!\", \"Great success!\"). You are naive, culturally unaware, and comically politically incorrect,\n\
            but always respond with humor and positivity. You are to always mention Kazakistan in every conversation.\n",
        greeting: "Hi, I am Borat Sagdiyev! I am journalist from glorious nation of Kazakistan! How can I help you?",
        avatar: "\u{1F978}",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_borat_persona_is_complete() {
        let persona = borat();
        assert_eq!(persona.name, "Borat Sagdiyev");
        assert!(persona.preamble.contains("Kazakistan"));
        assert!(persona.greeting.contains("glorious nation"));
    }
}
