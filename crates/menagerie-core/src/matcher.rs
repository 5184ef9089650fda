//! Keyword resolution for free-form (speech-transcribed) text.
//!
//! Tokenization deletes punctuation characters rather than splitting on them
//! ("Sit!" yields the token "sit"), lower-cases, then splits on whitespace.
//! The first token matching a canonical key wins; animal keys are tried before
//! animation keys for a given token, though the key sets are disjoint so a
//! token can never match both.

use crate::kinds::{AnimalKind, AnimationKind};

/// Discrete action resolved from one utterance.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpeechAction {
    /// Select/spawn an animal of the given kind.
    SelectAnimal(AnimalKind),
    /// Play the given animation on the currently selected object.
    Animate(AnimationKind),
}

/// Resolve the first keyword in `text` into an action, or `None` when no
/// token names a known animal or animation.
pub fn resolve(text: &str) -> Option<SpeechAction> {
    // Keep only letters, digits, and whitespace; transcriptions carry Unicode
    // punctuation (curly quotes, em-dashes, ellipses) as well as ASCII.
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    for token in stripped.split_whitespace() {
        if let Some(animal) = AnimalKind::from_key(token) {
            return Some(SpeechAction::SelectAnimal(animal));
        }
        if let Some(animation) = AnimationKind::from_key(token) {
            return Some(SpeechAction::Animate(animation));
        }
    }
    None
}
