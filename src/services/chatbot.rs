// src/services/chatbot.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    DietQuestion,
    Thanks,
    Unknown,
}

/// Keyword rules in priority order. The first keyword found in the message wins.
pub const INTENT_KEYWORDS: [(&str, Intent); 3] = [
    ("hello", Intent::Greeting),
    ("diet", Intent::DietQuestion),
    ("thank", Intent::Thanks),
];

impl Intent {
    pub fn reply(self) -> &'static str {
        match self {
            Intent::Greeting => "Namaste! How are you feeling today?",
            Intent::DietQuestion => {
                "Please tell me your dosha — Vata, Pitta, or Kapha — so I can suggest foods."
            }
            Intent::Thanks => "You're welcome! Stay healthy 🌿",
            Intent::Unknown => {
                "I can help with Ayurvedic diets. Try asking 'What should a Pitta person eat?'"
            }
        }
    }
}

pub fn detect_intent(msg: &str) -> Intent {
    let msg_lower = msg.to_lowercase();

    INTENT_KEYWORDS
        .iter()
        .find(|(keyword, _)| msg_lower.contains(keyword))
        .map(|&(_, intent)| intent)
        .unwrap_or(Intent::Unknown)
}

pub fn generate_reply(user_msg: &str) -> &'static str {
    let intent = detect_intent(user_msg);
    tracing::debug!(?intent, "chat intent detected");
    intent.reply()
}
