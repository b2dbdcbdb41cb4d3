//! Deterministic local text tools: summaries, doubt replies, flashcards
//! and quotes. Nothing here leaves the process.

mod quiz;

pub use quiz::{generate_mcqs, Quiz, QuizScore};

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::model::Flashcard;

/// Most flashcards generated from one block of notes.
pub const MAX_FLASHCARDS: usize = 30;

const SUMMARY_FALLBACK_CHARS: usize = 80;

/// Split notes into sentences on `.` and newlines, dropping blanks.
pub fn sentences(text: &str) -> Vec<&str> {
    text.split(['.', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enhanced {
    pub summary: String,
    pub key_points: Vec<String>,
}

/// A short summary (first two sentences) plus every sentence as a key point.
pub fn enhance(text: &str) -> Enhanced {
    let parts = sentences(text);
    let mut summary = parts.iter().take(2).copied().collect::<Vec<_>>().join(". ");
    if summary.is_empty() {
        summary = text.chars().take(SUMMARY_FALLBACK_CHARS).collect();
    }
    Enhanced {
        summary,
        key_points: parts.into_iter().map(str::to_string).collect(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DoubtReply {
    /// The question looked like a definition request.
    Brief { topic: String },
    /// Anything else: echo it back and ask for something more specific.
    Search { excerpt: String },
}

impl DoubtReply {
    pub fn message(&self) -> String {
        match self {
            DoubtReply::Brief { topic } => format!(
                "The topic is related to {topic}. Key point: Focus on the central definition and practical application."
            ),
            DoubtReply::Search { excerpt } => format!(
                "Your question \"{excerpt}...\" has been cross-referenced with your notes. Please be specific (e.g., 'What is Bernoulli's principle?')."
            ),
        }
    }
}

pub fn solve_doubt(text: &str) -> DoubtReply {
    let lower = text.to_lowercase();
    if ["what is", "explain", "how does"]
        .iter()
        .any(|cue| lower.contains(cue))
    {
        let topic = text.split(' ').take(5).collect::<Vec<_>>().join(" ");
        DoubtReply::Brief { topic }
    } else {
        DoubtReply::Search {
            excerpt: text.chars().take(50).collect(),
        }
    }
}

/// One card per sentence, front is the sentence itself.
pub fn flashcards_from(text: &str) -> Vec<Flashcard> {
    sentences(text)
        .into_iter()
        .take(MAX_FLASHCARDS)
        .map(|line| Flashcard {
            front: line.to_string(),
            back: format!("Explanation: {line}"),
        })
        .collect()
}

const QUOTES: [&str; 5] = [
    "The future belongs to those who believe in the beauty of their dreams. - Eleanor Roosevelt",
    "Study smart, not just hard.",
    "The only way to do great work is to love what you do. - Steve Jobs",
    "Success is the sum of small efforts, repeated day in and day out. - Robert Collier",
    "Don't stop until you're proud.",
];

pub fn motivational_quote<R: Rng>(rng: &mut R) -> &'static str {
    QUOTES.choose(rng).copied().unwrap_or(QUOTES[0])
}
