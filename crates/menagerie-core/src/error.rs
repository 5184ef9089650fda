//! Error type for catalog loading, clip derivation, and slot playback.

use crate::kinds::{AnimalKind, AnimationKind};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AnimationError {
    /// Catalog document failed to parse.
    #[error("catalog parse error: {reason}")]
    CatalogParse { reason: String },

    /// Catalog entry names an animal this build does not know.
    #[error("unknown animal kind: {name:?}")]
    UnknownAnimalKind { name: String },

    /// Catalog entry names an animation this build does not know.
    #[error("unknown animation kind: {name:?}")]
    UnknownAnimationKind { name: String },

    /// Catalog entry carries an unusable time window.
    #[error("invalid window for {animal}/{animation}: {reason}")]
    InvalidWindow {
        animal: AnimalKind,
        animation: AnimationKind,
        reason: String,
    },

    /// Clip constructed with an unusable duration.
    #[error("invalid clip {name:?}: {reason}")]
    InvalidClip { name: String, reason: String },

    /// Crop window falls outside the source clip's timeline.
    #[error(
        "crop window [{start_time}, {start_time} + {duration}] outside clip of {clip_duration}s"
    )]
    CropOutOfRange {
        start_time: f32,
        duration: f32,
        clip_duration: f32,
    },

    /// Playback requested for a slot with no bound player.
    #[error("no player bound under slot {slot:?}")]
    SlotNotBound { slot: String },
}

impl From<serde_json::Error> for AnimationError {
    fn from(err: serde_json::Error) -> Self {
        Self::CatalogParse {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_error_converts_to_catalog_parse() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let converted: AnimationError = err.into();
        assert!(matches!(converted, AnimationError::CatalogParse { .. }));
    }

    #[test]
    fn display_names_the_slot() {
        let err = AnimationError::SlotNotBound {
            slot: "sit".to_string(),
        };
        assert_eq!(err.to_string(), "no player bound under slot \"sit\"");
    }
}
