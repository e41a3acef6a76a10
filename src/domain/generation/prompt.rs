//! Prompt value object

use crate::domain::transcript::Transcript;

/// System message sent alongside every prompt
pub const SYSTEM_MESSAGE: &str = "You are a world-class Viral Content Strategist for YouTube.";

/// Template text preceding the transcript
const TEMPLATE_HEAD: &str = r#"
# [ROLE]
You are a top-tier viral copywriter and social media strategist. You specialize in creating high-performing hooks for YouTube Shorts, Instagram Reels, and TikToks, with deep expertise in the Indian market as of August 2025. Your goal is to generate short, emotionally engaging, and curiosity-driven text that stops the scroll.

# [TASK]
Analyze the provided transcript to generate two categories of viral text: Headers and Titles. The output must be simple to understand (no jargon) and follow current content trends and retention psychology.

# [INPUT]
TRANSCRIPT: """
"#;

/// Template text following the transcript
const TEMPLATE_TAIL: &str = r#"
"""

# [GENERATION GUIDELINES]
Your generated ideas MUST include a mix of the following styles:
- **Shocking/Intriguing:** Create disbelief or a strong urge to know more.
- **Knowledge-Based:** Frame as a secret, a hack, or a little-known fact.
- **Aspirational:** Connect with the viewer's desires or goals.
- **Reverse-Psychology:** Challenge the viewer or tell them *not* to do something.
- **Relatable Emotion:** Tap into a common feeling or experience.

## 1. Headers (15 Options)
- **Purpose:** For on-screen text or thumbnails.
- **Length:** **STRICTLY 3-5 WORDS.**
- **Style:**
    - **MUST** be a punchy phrase, not a full sentence.
    - **MUST** include 1-2 powerful emojis (e.g., 🤫, 🤯, 🚨, 💰, 🚩).
    - **Examples:** "The 12-Hour Lie 🤯", "Their Secret Pay Trick 🤫", "Stop Chasing Happiness 🚩"

## 2. Titles (10 Options)
- **Purpose:** For the video title or caption.
- **Length:** **STRICTLY UNDER 10 WORDS.**
- **Style:**
    - Start with the most impactful phrase.
    - Make it feel like an exposé or a must-know piece of advice.
    - Use strong keywords and power words.

# [OUTPUT FORMAT]
Respond ONLY with clean, formatted output in two categories. DO NOT use tables or add scores/justifications.

**1. Headers (3–5 words max)**
- [Header 1]
- [Header 2]
- ...

**2. Titles (under 10 words)**
- [Title 1]
- [Title 2]
- ...
"#;

/// Value object representing the complete instruction text for generation.
/// The transcript is embedded verbatim between the fixed template parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    content: String,
}

impl Prompt {
    /// Build the prompt for a transcript
    pub fn build(transcript: &Transcript) -> Self {
        let text = transcript.as_str();
        let mut content =
            String::with_capacity(TEMPLATE_HEAD.len() + text.len() + TEMPLATE_TAIL.len());
        content.push_str(TEMPLATE_HEAD);
        content.push_str(text);
        content.push_str(TEMPLATE_TAIL);
        Self { content }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the content
    pub fn into_content(self) -> String {
        self.content
    }
}
