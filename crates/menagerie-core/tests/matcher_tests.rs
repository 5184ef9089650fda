use menagerie_core::matcher::{resolve, SpeechAction};
use menagerie_core::{AnimalKind, AnimationKind};

/// it should match left-to-right, case-insensitively, with punctuation stripped
#[test]
fn first_matching_token_wins() {
    assert_eq!(
        resolve("The Dog should Sit!"),
        Some(SpeechAction::SelectAnimal(AnimalKind::Dog))
    );
}

/// it should resolve animation keywords and return None when nothing matches
#[test]
fn animation_keyword_and_miss() {
    assert_eq!(
        resolve("jump please"),
        Some(SpeechAction::Animate(AnimationKind::Jump))
    );
    assert_eq!(resolve("banana"), None);
    assert_eq!(resolve(""), None);
    assert_eq!(resolve("   ...   "), None);
}

/// it should honor utterance order over keyword category
#[test]
fn order_beats_category() {
    assert_eq!(
        resolve("sit dog"),
        Some(SpeechAction::Animate(AnimationKind::Sit))
    );
    assert_eq!(
        resolve("dog sit"),
        Some(SpeechAction::SelectAnimal(AnimalKind::Dog))
    );
}

/// it should match only canonical keys: "crazy" maps to Lay, "lay" does not resolve
#[test]
fn canonical_keys_only() {
    assert_eq!(
        resolve("go crazy"),
        Some(SpeechAction::Animate(AnimationKind::Lay))
    );
    assert_eq!(resolve("lay down"), None);
}

/// it should delete punctuation inside tokens rather than split on it
#[test]
fn punctuation_is_deleted_not_a_separator() {
    assert_eq!(
        resolve("SIT!!!"),
        Some(SpeechAction::Animate(AnimationKind::Sit))
    );
    assert_eq!(
        resolve("po-ny"),
        Some(SpeechAction::SelectAnimal(AnimalKind::Pony))
    );
    // Deleting the apostrophe merges the token; "dogs" is not a keyword.
    assert_eq!(resolve("dogs can't fly"), None);
}

/// it should strip Unicode punctuation from transcriptions
#[test]
fn unicode_punctuation_is_stripped() {
    assert_eq!(
        resolve("sit…"),
        Some(SpeechAction::Animate(AnimationKind::Sit))
    );
    assert_eq!(
        resolve("\u{201c}dog\u{201d}"),
        Some(SpeechAction::SelectAnimal(AnimalKind::Dog))
    );
    assert_eq!(
        resolve("now \u{2014} jump"),
        Some(SpeechAction::Animate(AnimationKind::Jump))
    );
}
